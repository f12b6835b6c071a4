use thiserror::Error;

use crate::interpreter::lexer::Position;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Read a variable that has never been assigned.
    #[error("Error at {position}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Where the reference appears.
        position: Position,
    },
    /// Attempted division by zero with `/` or `DIV`.
    #[error("Error at {position}: Division by zero.")]
    DivisionByZero {
        /// Where the operator appears.
        position: Position,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error at {position}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details:  String,
        /// Where the operation appears.
        position: Position,
    },
    /// Integer arithmetic overflowed.
    #[error("Error at {position}: Integer overflow while trying to compute result.")]
    Overflow {
        /// Where the operation appears.
        position: Position,
    },
    /// An expression produced no value.
    #[error("Error at {position}: Value missing.")]
    MissingValue {
        /// Where the expression appears.
        position: Position,
    },
    /// A loop ran more iterations than the configured limit allows.
    #[error("Error at {position}: Loop exceeded the limit of {limit} iterations.")]
    IterationLimitExceeded {
        /// The configured iteration limit.
        limit:    u64,
        /// Where the loop starts.
        position: Position,
    },
}
