/// Lexing errors.
///
/// Raised by the lexer when the source contains a character that starts no
/// token, or a numeric literal that does not fit its representation.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning the token stream into
/// a syntax tree: unexpected tokens, stray statements, a missing program
/// terminator and trailing input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: undefined
/// variables, division by zero, type mismatches, overflow and loop guards.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure of an interpretation run, tagged by the stage that raised it.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl From<ParseError> for Error {
    /// Lexing happens lazily inside the parser, so a lex failure reaches the
    /// caller wrapped in a `ParseError`. It is lifted back to `Error::Lex`.
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::Lex(e) => Self::Lex(e),
            other => Self::Parse(other),
        }
    }
}
