use thiserror::Error;

use crate::interpreter::lexer::Position;

/// Represents all errors that can occur while tokenizing source text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that begins no token.
    #[error("Error at {position}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where the character was found.
        position:  Position,
    },
    /// A numeric literal that cannot be represented.
    #[error("Error at {position}: Invalid number literal '{literal}'.")]
    InvalidNumber {
        /// The literal as written in the source.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
}

pub type LexResult<T> = Result<T, LexError>;
