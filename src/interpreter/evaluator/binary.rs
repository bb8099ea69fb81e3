use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Interpreter, value::Value},
};

impl Interpreter {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Both operands are promoted to floating point first, so the result is
    /// always a `Value::Float`, even for two integers. Division by zero
    /// follows IEEE 754 and yields an infinity or NaN instead of an error.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let v = Interpreter::eval_binary(BinaryOperator::Add, Value::Integer(2), Value::Integer(3));
    /// assert_eq!(v, Value::Float(5.0));
    ///
    /// let v = Interpreter::eval_binary(BinaryOperator::Div, Value::Integer(1), Value::Integer(0));
    /// assert_eq!(v, Value::Float(f64::INFINITY));
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: Value, right: Value) -> Value {
        let left = left.as_float();
        let right = right.as_float();

        Value::Float(match op {
                         BinaryOperator::Add => left + right,
                         BinaryOperator::Sub => left - right,
                         BinaryOperator::Mul => left * right,
                         BinaryOperator::Div => left / right,
                     })
    }
}
