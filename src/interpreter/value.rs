use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Position},
};

/// Represents a runtime value in the interpreter.
///
/// Statements produce no value at all; that absence is modelled as `None` in
/// the evaluator's `Option<Value>` rather than as a variant here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
    /// A boolean, produced only by comparison operators. Used as the
    /// condition of `IF`, `WHILE` and `FOR`.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<LiteralValue> for Value {
    fn from(value: LiteralValue) -> Self {
        match value {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
        }
    }
}

impl Value {
    /// Name of the value's type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Bool(_) => "boolean",
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Integers beyond 2^53 in magnitude round to the nearest `f64`.
    ///
    /// # Example
    /// ```
    /// use pascalite::interpreter::{lexer::Position, value::Value};
    ///
    /// assert_eq!(Value::Integer(10).as_real(Position::default()), Ok(10.0));
    /// assert!(Value::Bool(true).as_real(Position::default()).is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self, position: Position) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(*n as f64),
            Self::Bool(_) => Err(self.expected("a number", position)),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Conditions are never coerced: an integer or real condition is a
    /// `TypeError`.
    pub fn as_bool(&self, position: Position) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(self.expected("a boolean condition", position)),
        }
    }

    /// Returns the numeric form of the value.
    ///
    /// Numbers are returned unchanged and booleans become `0` or `1`. This is
    /// the coercion applied by the unary sign operators.
    #[must_use]
    pub fn to_numeric(self) -> Self {
        match self {
            Self::Bool(b) => Self::Integer(i64::from(b)),
            number => number,
        }
    }

    pub(crate) fn expected(&self, what: &str, position: Position) -> RuntimeError {
        RuntimeError::TypeError { details: format!("expected {what}, found {} {self}",
                                                   self.type_name()),
                                  position }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
