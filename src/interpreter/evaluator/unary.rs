use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a prefix operator on a value.
    ///
    /// Only integer operands are accepted. A float operand, including the
    /// result of any binary operation, is a type mismatch. Negating
    /// `i64::MIN` reports an overflow.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// assert!(Interpreter::eval_unary(UnaryOperator::Negate, Value::Float(1.5), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value, line: usize) -> EvalResult<Value> {
        let Value::Integer(n) = value else {
            return Err(RuntimeError::TypeMismatch { details: format!("unary '{op}' requires an Int operand, found {} value {value}",
                                                                     value.type_name()),
                                                    line });
        };

        match op {
            UnaryOperator::Plus => Ok(Value::Integer(n)),
            UnaryOperator::Negate => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { line }),
        }
    }
}
