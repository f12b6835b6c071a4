use thiserror::Error;

use crate::{error::LexError, interpreter::lexer::Position};

/// Represents all errors that can occur during parsing.
///
/// `found` fields hold the display form of the offending token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The current token did not match what the grammar requires here.
    #[error("Error at {position}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of the expected token or construct.
        expected: String,
        /// The token encountered.
        found:    String,
        /// Where the token was found.
        position: Position,
    },
    /// An identifier directly followed a statement without a separating `;`.
    #[error("Error at {position}: Unexpected statement starting with {found}. Missing ';'?")]
    UnexpectedStatement {
        /// The token encountered.
        found:    String,
        /// Where the token was found.
        position: Position,
    },
    /// The program body was not closed with `.`.
    #[error("Error at {position}: Expected '.' after the program body, found {found}.")]
    MissingTerminator {
        /// The token encountered instead of `.`.
        found:    String,
        /// Where the token was found.
        position: Position,
    },
    /// Found extra tokens after the program terminator.
    #[error("Error at {position}: Extra tokens after end of program: {found}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        found:    String,
        /// Where the token was found.
        position: Position,
    },
    /// The lexer failed while the parser was pulling the next token.
    #[error(transparent)]
    Lex(#[from] LexError),
}
