use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{block::parse_block, core::ParseResult, utils::parse_identifier},
    },
};

/// Parses a whole program: a sequence of function definitions.
///
/// Grammar: `program := function*`
///
/// # Errors
/// Returns a `ParseError` if anything other than a function definition
/// appears at the top level.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut functions = Vec::new();

    while let Some((_, line)) = tokens.peek() {
        let line = *line;
        functions.push(parse_function_definition(tokens, line)?);
    }

    Ok(Program { functions })
}

/// Parses a function definition of the form `func <name>() { <statements> }`.
///
/// Functions take no parameters.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the definition does not start with `func`,
/// - the name is missing,
/// - the empty parameter list or the opening brace is missing,
/// - the body fails to parse.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>,
                                    line: usize)
                                    -> ParseResult<FunctionDef>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::Func, line)) => *line,
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected 'func', found {tok:?}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    };

    let name = parse_identifier(tokens, line)?;

    for expected in [Token::LParen, Token::RParen, Token::LBrace] {
        match tokens.next() {
            Some((tok, _)) if *tok == expected => {},
            Some((_, line)) => return Err(ParseError::InvalidFunctionDefinition { line: *line }),
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }

    let statements = parse_block(tokens, line)?;

    Ok(FunctionDef { name,
                     statements,
                     line })
}
