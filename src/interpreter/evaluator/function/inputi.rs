use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Reads one integer from the console.
///
/// With one argument, its rendered value is written first as a prompt line.
/// Leading and trailing whitespace around the input is ignored.
///
/// # Errors
/// - `InputExhausted` if the console has no more input.
/// - `InvalidInput` if the line is not an integer.
///
/// # Example
/// ```
/// use brewin::interpreter::{
///     console::ScriptedConsole,
///     evaluator::{core::Context, function::inputi::inputi},
///     value::core::Value,
/// };
///
/// let mut console = ScriptedConsole::new([" 42 "]);
/// let mut context = Context::new(&mut console);
///
/// let value = inputi(&mut context, &["Number? ".into()], 1).unwrap();
/// assert_eq!(value, Some(Value::Integer(42)));
/// drop(context);
///
/// assert_eq!(console.lines(), ["Number? "]);
/// ```
pub fn inputi(context: &mut Context<'_>, args: &[Value], line: usize) -> EvalResult<Option<Value>> {
    if let Some(prompt) = args.first() {
        context.output(&prompt.to_string());
    }

    let input = context.read_input()
                       .ok_or(RuntimeError::InputExhausted { line })?;
    let value = input.trim()
                     .parse::<i64>()
                     .map_err(|_| RuntimeError::InvalidInput { input: input.clone(),
                                                               line })?;

    tracing::debug!(value, "read integer input");
    Ok(Some(Value::Integer(value)))
}
