use crate::{
    ast::Program,
    interpreter::{lexer::tokenize, parser::core::ParseResult, parser::program::parse_program},
};

/// Core parsing entry points.
///
/// Contains the shared result type and the expression entry point.
pub mod core;

/// Binary expression parsing.
///
/// Implements the precedence levels for additive and multiplicative
/// operators.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles literals, identifiers, calls, grouping and negative integer
/// literals.
pub mod unary;

/// Block parsing.
///
/// Parses the brace-delimited statement list of a function body.
pub mod block;

/// Statement parsing.
///
/// Implements declarations, assignments, call statements and bare expression
/// statements.
pub mod statement;

/// Program and function definition parsing.
pub mod program;

/// Utility functions for the parser.
///
/// Provides helpers for identifiers, comma-separated lists and expected
/// punctuation.
pub mod utils;

/// Parses source text into a [`Program`].
///
/// # Errors
/// Returns a `ParseError` if the source cannot be tokenized or does not
/// follow the grammar.
///
/// # Example
/// ```
/// use brewin::interpreter::parser::parse;
///
/// let program = parse("func main() { var x; x = 3 + 4; print(x); }").unwrap();
///
/// assert_eq!(program.functions.len(), 1);
/// assert_eq!(program.functions[0].statements.len(), 3);
/// ```
pub fn parse(source: &str) -> ParseResult<Program> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    parse_program(&mut iter)
}
