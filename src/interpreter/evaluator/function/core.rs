use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{inputi, print},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluation context, a slice of evaluated argument
/// values and the line number. It returns `Some(Value)` if it produces a
/// value.
type BuiltinFn = fn(&mut Context<'_>, &[Value], usize) -> EvalResult<Option<Value>>;

/// Where a call appears in the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallSite {
    /// A call used as a statement; any result is discarded.
    Statement,
    /// A call inside an expression; it must produce a value.
    Expression,
}

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Any` accepts every argument count.
/// - `AtMost(n)` accepts between zero and `n` arguments.
#[derive(Clone, Copy)]
enum Arity {
    Any,
    AtMost(usize),
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity rule,
/// - whether the builtin may be called in expression position,
/// - a function pointer implementing the builtin.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                in_expression: $in_expression:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:          &'static str,
            arity:         Arity,
            in_expression: bool,
            func:          BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, in_expression: $in_expression, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "print"  => { arity: Arity::Any,       in_expression: false, func: print::print },
    "inputi" => { arity: Arity::AtMost(1), in_expression: true,  func: inputi::inputi },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Any => true,
            Self::AtMost(m) => n <= m,
        }
    }
}

/// Finds the builtin called `name` that may be used at `site`.
///
/// # Errors
/// Returns `UnknownFunction` if no such builtin exists, or if it exists but
/// cannot appear at `site` (such as `print` inside an expression).
fn resolve_builtin(name: &str, site: CallSite, line: usize) -> EvalResult<&'static BuiltinDef> {
    BUILTIN_TABLE.iter()
                 .find(|b| b.name == name && (site == CallSite::Statement || b.in_expression))
                 .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                line })
}

impl Context<'_> {
    /// Calls a builtin function.
    ///
    /// The name is resolved and the argument count checked before any
    /// argument is evaluated. Arguments are then evaluated left to right and
    /// handed to the builtin.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `line`: Line number for error reporting.
    /// - `site`: Whether the call is a statement or part of an expression.
    ///
    /// # Errors
    /// - `UnknownFunction` if the name does not resolve at `site`.
    /// - `NoMatchingOverload` if too many arguments are supplied.
    /// - Any error raised while evaluating arguments or running the builtin.
    ///
    /// # Returns
    /// The builtin's result, if it produces one.
    pub fn eval_call(&mut self,
                     name: &str,
                     arguments: &[Expr],
                     line: usize,
                     site: CallSite)
                     -> EvalResult<Option<Value>> {
        let builtin = resolve_builtin(name, site, line)?;
        if !builtin.arity.check(arguments.len()) {
            return Err(RuntimeError::NoMatchingOverload { name: name.to_string(),
                                                          found: arguments.len(),
                                                          line });
        }

        let mut args = Vec::with_capacity(arguments.len());
        for expr in arguments {
            args.push(self.eval(expr)?);
        }

        tracing::debug!(%name, ?site, args = args.len(), "calling builtin");
        (builtin.func)(self, &args, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, interpreter::console::ScriptedConsole};

    fn call(name: &str, arguments: &[Expr], site: CallSite) -> EvalResult<Option<Value>> {
        let mut console = ScriptedConsole::new(["5"]);
        let mut context = Context::new(&mut console);
        context.eval_call(name, arguments, 1, site)
    }

    #[test]
    fn print_is_statement_only() {
        assert_eq!(call("print", &[], CallSite::Statement).unwrap(), None);

        let err = call("print", &[], CallSite::Expression).unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownFunction { .. }));
    }

    #[test]
    fn inputi_works_at_both_sites() {
        assert_eq!(call("inputi", &[], CallSite::Statement).unwrap(),
                   Some(Value::Integer(5)));
        assert_eq!(call("inputi", &[], CallSite::Expression).unwrap(),
                   Some(Value::Integer(5)));
    }

    #[test]
    fn unknown_builtin_is_a_name_error() {
        let err = call("println", &[], CallSite::Statement).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Name);
    }

    #[test]
    fn too_many_inputi_arguments_fails_before_evaluating_them() {
        // The second argument would fail with a type error if evaluated.
        let bad = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: 1.into(),
                                                                   line:  1, }),
                                   op:    crate::ast::BinaryOperator::Add,
                                   right: Box::new(Expr::Literal { value: "x".into(),
                                                                   line:  1, }),
                                   line:  1, };
        let prompt = Expr::Literal { value: "?".into(),
                                     line:  1, };

        let err = call("inputi", &[prompt, bad], CallSite::Statement).unwrap_err();
        assert_eq!(err,
                   RuntimeError::NoMatchingOverload { name:  "inputi".into(),
                                                      found: 2,
                                                      line:  1, });
    }
}
