use crate::{
    ast::{BinaryOperator, Expr, LiteralValue},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::core::CallSite,
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a literal expression.
    ///
    /// Converts the literal value directly into a `Value`. Literals never
    /// produce errors.
    ///
    /// # Example
    /// ```
    /// use brewin::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let value = Context::eval_literal(&7.into());
    /// assert_eq!(value, Value::Integer(7));
    /// ```
    #[must_use]
    pub fn eval_literal(value: &LiteralValue) -> Value {
        Value::from(value)
    }

    /// Looks up a variable by name.
    ///
    /// # Errors
    /// - `UnknownVariable` if the name was never declared.
    /// - `UnassignedVariable` if it was declared but holds no value yet.
    ///
    /// # Example
    /// ```
    /// use brewin::interpreter::{
    ///     console::ScriptedConsole, evaluator::core::Context, value::core::Value,
    /// };
    ///
    /// let mut console = ScriptedConsole::default();
    /// let mut ctx = Context::new(&mut console);
    /// ctx.environment.declare("x", 1).unwrap();
    /// ctx.environment.assign("x", Value::Integer(10), 2).unwrap();
    ///
    /// assert_eq!(ctx.eval_variable("x", 3).unwrap(), Value::Integer(10));
    /// assert!(ctx.eval_variable("y", 3).is_err());
    /// ```
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.environment.get(name, line).cloned()
    }

    /// Evaluates a binary operator applied to two expressions.
    ///
    /// The left operand is fully evaluated before the right one, then both
    /// values are passed to [`Context::eval_binary`].
    ///
    /// # Example
    /// ```
    /// use brewin::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{console::ScriptedConsole, evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut console = ScriptedConsole::default();
    /// let mut ctx = Context::new(&mut console);
    /// let l = Expr::Literal { value: 2.into(),
    ///                         line:  1, };
    /// let r = Expr::Literal { value: 3.into(),
    ///                         line:  1, };
    ///
    /// let v = ctx.eval_binary_op(&l, BinaryOperator::Sub, &r, 1).unwrap();
    /// assert_eq!(v, Value::Integer(-1));
    /// ```
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          line: usize)
                          -> EvalResult<Value> {
        let lval = self.eval(left)?;
        let rval = self.eval(right)?;

        Self::eval_binary(op, &lval, &rval, line)
    }

    /// Evaluates a function call in expression position.
    ///
    /// Only builtins that produce a value (`inputi`) may be called here.
    ///
    /// # Errors
    /// `UnknownFunction` for any other name, including `print`.
    pub fn eval_function_call(&mut self,
                              name: &str,
                              arguments: &[Expr],
                              line: usize)
                              -> EvalResult<Value> {
        self.eval_call(name, arguments, line, CallSite::Expression)?
            .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                           line })
    }
}
