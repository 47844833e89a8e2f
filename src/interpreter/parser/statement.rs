use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_semicolon, parse_identifier},
        },
    },
};

/// Parses a single statement.
/// A statement may be one of:
/// - a variable declaration,
/// - an assignment,
/// - an expression terminated by `;`.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. An expression statement whose expression is a call becomes a
/// [`Statement::FunctionCall`]; any other expression is kept as a
/// [`Statement::Expression`].
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `line`: Line of the last consumed token, reported if the input ends.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_variable_declaration(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let current_line = tokens.peek()
                             .map(|(_, l)| *l)
                             .ok_or(ParseError::UnexpectedEndOfInput { line })?;
    let expr = parse_expression(tokens, current_line)?;
    expect_semicolon(tokens, current_line)?;

    Ok(match expr {
           Expr::FunctionCall { name,
                                arguments,
                                line, } => Statement::FunctionCall { name,
                                                                     arguments,
                                                                     line },
           expr => Statement::Expression { expr,
                                           line: current_line },
       })
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `var <identifier>;`.
///
/// If the next token is not `var`, this function returns `Ok(None)` and does
/// not consume any input.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is missing or is a keyword,
/// - the terminating `;` is missing.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Var, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let name = parse_identifier(tokens, line)?;
        expect_semicolon(tokens, line)?;

        return Ok(Some(Statement::VariableDeclaration { name, line }));
    }

    Ok(None)
}

/// Parses an assignment statement: `<identifier> = <expression>;`.
///
/// The function performs a limited lookahead: if the next token is an
/// identifier and the following token is `=`, an assignment is parsed.
///
/// If no assignment pattern matches, the function returns `Ok(None)` and does
/// not consume tokens.
///
/// # Errors
/// Returns a `ParseError` if the assigned expression fails to parse or the
/// terminating `;` is missing.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Identifier(_), line)) = tokens.peek() {
        let line = *line;
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some((Token::Equals, _)) = lookahead.peek() {
            let name = parse_identifier(tokens, line)?;
            tokens.next();

            let value = parse_expression(tokens, line)?;
            expect_semicolon(tokens, line)?;

            return Ok(Some(Statement::Assignment { name, value, line }));
        }
    }
    Ok(None)
}
