use std::cmp::Ordering;

use crate::{
    ast::{BinaryOperator, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Position,
        value::Value,
    },
    util::num::floor_div,
};

impl Context {
    /// Evaluates a binary operator applied to two expressions.
    ///
    /// The left operand is evaluated before the right one.
    pub fn eval_binary_op(&mut self,
                          left: &Node,
                          op: BinaryOperator,
                          right: &Node,
                          position: Position)
                          -> EvalResult<Value> {
        let left = self.eval_child(left, position)?;
        let right = self.eval_child(right, position)?;
        Self::eval_binary(op, left, right, position)
    }

    /// Applies a binary operator to two values.
    ///
    /// - `+`, `-`, `*` stay integral for two integers (overflow is an error)
    ///   and promote to real otherwise.
    /// - `/` always yields a real.
    /// - `DIV` floors toward negative infinity; it yields an integer for two
    ///   integers and a real otherwise.
    /// - Comparisons yield booleans. `==` and `!=` also accept two booleans.
    ///
    /// Division by zero fails with `DivisionByZero` for both `/` and `DIV`.
    ///
    /// # Example
    /// ```
    /// use pascalite::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, lexer::Position, value::Value},
    /// };
    ///
    /// let p = Position::default();
    /// let v = Context::eval_binary(BinaryOperator::IntDiv, Value::Integer(10), Value::Integer(3), p).unwrap();
    /// assert_eq!(v, Value::Integer(3));
    ///
    /// let v = Context::eval_binary(BinaryOperator::Div, Value::Integer(10), Value::Integer(4), p).unwrap();
    /// assert_eq!(v, Value::Real(2.5));
    ///
    /// let v = Context::eval_binary(BinaryOperator::LessEqual, Value::Integer(2), Value::Real(2.5), p).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       position: Position)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, IntDiv, Less, LessEqual, Mul, NotEqual, Sub,
        };

        match op {
            Add => Self::eval_arithmetic(op, left, right, position, i64::checked_add, |a, b| a + b),
            Sub => Self::eval_arithmetic(op, left, right, position, i64::checked_sub, |a, b| a - b),
            Mul => Self::eval_arithmetic(op, left, right, position, i64::checked_mul, |a, b| a * b),
            Div => Self::eval_real_division(left, right, position),
            IntDiv => Self::eval_floor_division(left, right, position),
            Equal => Self::eval_equality(op, left, right, position).map(Value::Bool),
            NotEqual => Self::eval_equality(op, left, right, position).map(|eq| Value::Bool(!eq)),
            Greater => Self::eval_ordering(op, left, right, position, Ordering::is_gt),
            GreaterEqual => Self::eval_ordering(op, left, right, position, Ordering::is_ge),
            Less => Self::eval_ordering(op, left, right, position, Ordering::is_lt),
            LessEqual => Self::eval_ordering(op, left, right, position, Ordering::is_le),
        }
    }

    fn eval_arithmetic(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       position: Position,
                       integer_op: fn(i64, i64) -> Option<i64>,
                       real_op: fn(f64, f64) -> f64)
                       -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => {
                integer_op(a, b).map(Value::Integer)
                                .ok_or(RuntimeError::Overflow { position })
            },
            (Value::Bool(_), _) | (_, Value::Bool(_)) => {
                Err(invalid_operands(op, left, right, position))
            },
            _ => Ok(Value::Real(real_op(left.as_real(position)?, right.as_real(position)?))),
        }
    }

    fn eval_real_division(left: Value, right: Value, position: Position) -> EvalResult<Value> {
        let (a, b) = numeric_pair(BinaryOperator::Div, left, right, position)?;
        if b == 0.0 {
            return Err(RuntimeError::DivisionByZero { position });
        }
        Ok(Value::Real(a / b))
    }

    fn eval_floor_division(left: Value, right: Value, position: Position) -> EvalResult<Value> {
        if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            return floor_div(a, b).map(Value::Integer)
                                  .ok_or(RuntimeError::Overflow { position });
        }

        let (a, b) = numeric_pair(BinaryOperator::IntDiv, left, right, position)?;
        if b == 0.0 {
            return Err(RuntimeError::DivisionByZero { position });
        }
        Ok(Value::Real((a / b).floor()))
    }

    fn eval_equality(op: BinaryOperator,
                     left: Value,
                     right: Value,
                     position: Position)
                     -> EvalResult<bool> {
        match (left, right) {
            (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
            (Value::Bool(_), _) | (_, Value::Bool(_)) => {
                Err(invalid_operands(op, left, right, position))
            },
            _ => Ok(compare_numbers(left, right, position)? == Some(Ordering::Equal)),
        }
    }

    fn eval_ordering(op: BinaryOperator,
                     left: Value,
                     right: Value,
                     position: Position,
                     accept: fn(Ordering) -> bool)
                     -> EvalResult<Value> {
        if matches!(left, Value::Bool(_)) || matches!(right, Value::Bool(_)) {
            return Err(invalid_operands(op, left, right, position));
        }
        let ordering = compare_numbers(left, right, position)?;
        Ok(Value::Bool(ordering.is_some_and(accept)))
    }
}

/// Compares two numeric values, promoting to real for mixed operands.
///
/// Returns `None` when a real operand is NaN.
fn compare_numbers(left: Value, right: Value, position: Position) -> EvalResult<Option<Ordering>> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Some(a.cmp(&b))),
        _ => Ok(left.as_real(position)?
                    .partial_cmp(&right.as_real(position)?)),
    }
}

fn numeric_pair(op: BinaryOperator,
                left: Value,
                right: Value,
                position: Position)
                -> EvalResult<(f64, f64)> {
    if matches!(left, Value::Bool(_)) || matches!(right, Value::Bool(_)) {
        return Err(invalid_operands(op, left, right, position));
    }
    Ok((left.as_real(position)?, right.as_real(position)?))
}

fn invalid_operands(op: BinaryOperator, left: Value, right: Value, position: Position) -> RuntimeError {
    RuntimeError::TypeError { details: format!("Invalid operands: {} {left} {op} {} {right}",
                                               left.type_name(),
                                               right.type_name()),
                              position }
}
