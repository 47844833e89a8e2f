use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates an integer arithmetic operation.
    ///
    /// Addition, subtraction and multiplication wrap on overflow. Division
    /// truncates toward zero and wraps for `i64::MIN / -1`.
    ///
    /// # Errors
    /// - `DivisionByZero` when dividing by zero.
    /// - `UnsupportedOperator` for operators without integer arithmetic.
    ///
    /// # Example
    /// ```
    /// use brewin::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_integer_op(BinaryOperator::Div, -7, 2, 1).unwrap(), -3);
    /// assert!(Context::eval_integer_op(BinaryOperator::Div, 5, 0, 1).is_err());
    /// ```
    pub fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        match op {
            Add => Ok(a.wrapping_add(b)),
            Sub => Ok(a.wrapping_sub(b)),
            Mul => Ok(a.wrapping_mul(b)),
            Div => {
                if b == 0 {
                    Err(RuntimeError::DivisionByZero { line })
                } else {
                    Ok(a.wrapping_div(b))
                }
            },
            Mod => Err(RuntimeError::UnsupportedOperator { op, line }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn arithmetic_wraps_on_overflow() {
        assert_eq!(Context::eval_integer_op(BinaryOperator::Add, i64::MAX, 1, 1).unwrap(),
                   i64::MIN);
        assert_eq!(Context::eval_integer_op(BinaryOperator::Sub, i64::MIN, 1, 1).unwrap(),
                   i64::MAX);
        assert_eq!(Context::eval_integer_op(BinaryOperator::Div, i64::MIN, -1, 1).unwrap(),
                   i64::MIN);
    }

    #[test]
    fn division_by_zero_is_a_fault() {
        let err = Context::eval_integer_op(BinaryOperator::Div, 5, 0, 4).unwrap_err();
        assert_eq!(err, RuntimeError::DivisionByZero { line: 4 });
        assert_eq!(err.kind(), ErrorKind::Fault);
    }

    #[test]
    fn remainder_is_unsupported() {
        let err = Context::eval_integer_op(BinaryOperator::Mod, 5, 2, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }
}
