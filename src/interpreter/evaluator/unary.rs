use crate::{
    ast::{Node, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Position,
        value::Value,
    },
};

impl Context {
    /// Evaluates a unary sign applied to a value.
    ///
    /// Both signs first coerce the operand to a number, so a boolean operand
    /// counts as `0` or `1`:
    /// - `Plus` returns the numeric value unchanged.
    /// - `Minus` negates it. Negating `i64::MIN` fails with `Overflow`.
    ///
    /// # Example
    /// ```
    /// use pascalite::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, lexer::Position, value::Value},
    /// };
    ///
    /// let p = Position::default();
    /// let v = Context::eval_unary(UnaryOperator::Minus, Value::Integer(5), p).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Plus, Value::Bool(true), p).unwrap();
    /// assert_eq!(v, Value::Integer(1));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value, position: Position) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Plus, value) => Ok(value.to_numeric()),
            (UnaryOperator::Minus, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { position })
            },
            (UnaryOperator::Minus, Value::Real(r)) => Ok(Value::Real(-r)),
            (UnaryOperator::Minus, Value::Bool(b)) => Ok(Value::Integer(-i64::from(b))),
        }
    }

    /// Evaluates a unary operator applied to a subexpression.
    pub fn eval_unary_op(&mut self,
                         op: UnaryOperator,
                         expr: &Node,
                         position: Position)
                         -> EvalResult<Value> {
        let value = self.eval_child(expr, position)?;
        Self::eval_unary(op, value, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: Position = Position::new(1, 1);

    #[test]
    fn signs_coerce_booleans() {
        assert_eq!(Context::eval_unary(UnaryOperator::Minus, Value::Bool(true), P),
                   Ok(Value::Integer(-1)));
        assert_eq!(Context::eval_unary(UnaryOperator::Minus, Value::Bool(false), P),
                   Ok(Value::Integer(0)));
        assert_eq!(Context::eval_unary(UnaryOperator::Plus, Value::Bool(false), P),
                   Ok(Value::Integer(0)));
    }

    #[test]
    fn minus_negates_numbers() {
        assert_eq!(Context::eval_unary(UnaryOperator::Minus, Value::Real(1.5), P),
                   Ok(Value::Real(-1.5)));
        assert_eq!(Context::eval_unary(UnaryOperator::Minus, Value::Integer(-4), P),
                   Ok(Value::Integer(4)));
        assert_eq!(Context::eval_unary(UnaryOperator::Minus, Value::Integer(i64::MIN), P),
                   Err(RuntimeError::Overflow { position: P }));
    }
}
