use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::core::Value,
};

/// Writes all arguments to the console as a single line.
///
/// Each value is rendered with its `Display` implementation and the pieces
/// are joined with no separator. With no arguments an empty line is written.
/// `print` produces no value.
///
/// # Example
/// ```
/// use brewin::interpreter::{
///     console::ScriptedConsole,
///     evaluator::{core::Context, function::print::print},
///     value::core::Value,
/// };
///
/// let mut console = ScriptedConsole::default();
/// let mut context = Context::new(&mut console);
///
/// let result = print(&mut context, &["a".into(), Value::Integer(1), "b".into()], 1).unwrap();
/// assert_eq!(result, None);
/// drop(context);
///
/// assert_eq!(console.lines(), ["a1b"]);
/// ```
#[allow(clippy::unnecessary_wraps)]
pub fn print(context: &mut Context<'_>, args: &[Value], _line: usize) -> EvalResult<Option<Value>> {
    let line: String = args.iter().map(ToString::to_string).collect();
    context.output(&line);
    Ok(None)
}
