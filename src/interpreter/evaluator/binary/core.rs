use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Both operands must be integers; this is checked before the operator is
    /// looked at, so `"a" % 1` reports incompatible types rather than an
    /// unsupported operator.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `IncompatibleTypes` unless both operands are integers.
    /// - Any error from [`Context::eval_integer_op`].
    ///
    /// # Example
    /// ```
    /// use brewin::{
    ///     ast::BinaryOperator,
    ///     error::ErrorKind,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add, &3.into(), &4.into(), 1);
    /// assert_eq!(sum.unwrap(), Value::Integer(7));
    ///
    /// let err = Context::eval_binary(BinaryOperator::Add, &5.into(), &"x".into(), 1).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Type);
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => {
                Self::eval_integer_op(op, *a, *b, line).map(Value::Integer)
            },
            _ => Err(RuntimeError::IncompatibleTypes { op,
                                                       left: left.type_name(),
                                                       right: right.type_name(),
                                                       line }),
        }
    }
}
