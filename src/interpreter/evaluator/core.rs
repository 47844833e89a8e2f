use crate::{
    ast::{Expr, FunctionDef, Program, Statement},
    error::RuntimeError,
    interpreter::{
        console::Console,
        evaluator::{environment::Environment, function::core::CallSite},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Name of the function a program starts executing at.
pub const MAIN_FUNCTION: &str = "main";

/// Stores the runtime evaluation context of a single run.
///
/// The context owns the run's variable environment and borrows the console
/// the program reads from and writes to. A new context is created for every
/// run, so independent runs never share bindings.
///
/// ## Usage
///
/// Most callers go through [`run_program`]. A context can also be built
/// directly to evaluate single statements or expressions:
///
/// ```
/// use brewin::{
///     ast::{Expr, Statement},
///     interpreter::{console::ScriptedConsole, evaluator::core::Context, value::core::Value},
/// };
///
/// let mut console = ScriptedConsole::default();
/// let mut context = Context::new(&mut console);
///
/// context.eval_statement(&Statement::VariableDeclaration { name: "x".into(),
///                                                          line: 1, })
///        .unwrap();
/// context.eval_statement(&Statement::Assignment { name:  "x".into(),
///                                                 value: Expr::Literal { value: 5.into(),
///                                                                        line:  2, },
///                                                 line:  2, })
///        .unwrap();
///
/// assert_eq!(context.environment.get("x", 3).unwrap(), &Value::Integer(5));
/// ```
pub struct Context<'io> {
    /// The flat variable table for this run.
    pub environment: Environment,
    console:         &'io mut dyn Console,
}

impl<'io> Context<'io> {
    /// Creates a context with an empty environment that performs I/O through
    /// `console`.
    pub fn new(console: &'io mut dyn Console) -> Self {
        Self { environment: Environment::new(),
               console }
    }

    /// Consumes the context, returning its environment.
    #[must_use]
    pub fn into_environment(self) -> Environment {
        self.environment
    }

    /// Emits one line through the console.
    pub(crate) fn output(&mut self, line: &str) {
        self.console.output(line);
    }

    /// Reads one line from the console.
    pub(crate) fn read_input(&mut self) -> Option<String> {
        self.console.get_input()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, variables, binary
    /// operations and function calls. Operands are always evaluated left to
    /// right and depth first, since a nested `inputi` call reads input.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value the expression reduces to.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Self::eval_literal(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line),
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
        }
    }

    /// Executes a single statement.
    ///
    /// Handles variable declarations, assignments and builtin calls. Any other
    /// statement kind is rejected with `UnknownStatement`.
    ///
    /// An assignment checks that its target is declared before evaluating the
    /// right-hand side, so an assignment to an unknown name consumes no input.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        tracing::trace!(line = statement.line(), "executing statement");

        match statement {
            Statement::VariableDeclaration { name, line } => {
                self.environment.declare(name, *line)?;
                tracing::debug!(%name, "declared variable");
                Ok(())
            },
            Statement::Assignment { name, value, line } => {
                if !self.environment.is_declared(name) {
                    return Err(RuntimeError::UnknownVariable { name: name.clone(),
                                                               line: *line, });
                }

                let value = self.eval(value)?;
                tracing::debug!(%name, %value, "assigned variable");
                self.environment.assign(name, value, *line)
            },
            Statement::FunctionCall { name,
                                      arguments,
                                      line, } => {
                self.eval_call(name, arguments, *line, CallSite::Statement)?;
                Ok(())
            },
            Statement::Expression { line, .. } => {
                Err(RuntimeError::UnknownStatement { line: *line })
            },
        }
    }

    /// Executes the statements of a function body in order, stopping at the
    /// first failure.
    pub fn run_function(&mut self, function: &FunctionDef) -> EvalResult<()> {
        for statement in &function.statements {
            self.eval_statement(statement)?;
        }
        Ok(())
    }
}

/// Finds the entry point of a program.
///
/// Functions are scanned in source order and the first one named `main` is
/// returned.
///
/// # Errors
/// Returns `MissingMain` if no function is named `main`.
///
/// # Example
/// ```
/// use brewin::{
///     ast::{FunctionDef, Program},
///     interpreter::evaluator::core::find_main,
/// };
///
/// let program = Program { functions: vec![FunctionDef { name:       "helper".into(),
///                                                       statements: vec![],
///                                                       line:       1, },
///                                         FunctionDef { name:       "main".into(),
///                                                       statements: vec![],
///                                                       line:       2, }], };
///
/// assert_eq!(find_main(&program).unwrap().line, 2);
/// assert!(find_main(&Program::default()).is_err());
/// ```
pub fn find_main(program: &Program) -> EvalResult<&FunctionDef> {
    program.functions
           .iter()
           .find(|function| function.name == MAIN_FUNCTION)
           .ok_or(RuntimeError::MissingMain)
}

/// Runs a parsed program from its `main` function.
///
/// The entry point is located before anything executes, then a fresh
/// environment is created and `main`'s statements run against it. Output
/// emitted before a failure stays emitted.
///
/// # Errors
/// Returns the first runtime error raised, after which nothing else runs.
///
/// # Returns
/// The final variable environment of the run.
#[tracing::instrument(level = "debug", skip_all, fields(functions = program.functions.len()))]
pub fn run_program(program: &Program, console: &mut dyn Console) -> EvalResult<Environment> {
    let main = find_main(program)?;
    let mut context = Context::new(console);

    context.run_function(main)
           .inspect_err(|e| tracing::debug!(kind = %e.kind(), error = %e, "run failed"))?;

    Ok(context.into_environment())
}
