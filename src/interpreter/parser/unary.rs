use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// The only prefix operator is `-`, and it may only precede an integer
/// literal, producing a negative literal.
///
/// Grammar:
/// ```text
///     unary := "-" INTEGER
///            | primary
/// ```
/// The magnitude after `-` may be one larger than `i64::MAX`, so
/// `-9223372036854775808` is expressible.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `line`: Line of the last consumed token.
///
/// # Returns
/// A negative [`Expr::Literal`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        return match tokens.next() {
            Some((Token::Integer(n), _)) => {
                let value = 0_i64.checked_sub_unsigned(*n)
                                 .ok_or(ParseError::LiteralTooLarge { line })?;
                Ok(Expr::Literal { value: LiteralValue::Integer(value),
                                   line })
            },
            Some((tok, line)) => {
                Err(ParseError::UnexpectedToken { token: format!("Expected integer after '-', found {tok:?}"),
                                                  line:  *line, })
            },
            None => Err(ParseError::UnexpectedEndOfInput { line }),
        };
    }

    parse_primary(tokens, line)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer and string literals
/// - identifiers
/// - function calls
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_or_function
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `line`: Line of the last consumed token, reported if the input ends.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line })?;

    match peeked {
        (Token::Integer(..) | Token::Str(..), _) => parse_literal(tokens, line),
        (Token::LParen, _) => parse_grouping(tokens, line),
        (Token::Identifier(_), _) => parse_identifier_or_function(tokens, line),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses an integer or string literal.
///
/// Integer literals above `i64::MAX` are rejected here; only a leading `-`
/// can bring them into range.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(n), line)) => {
            let value = i64::try_from(*n).map_err(|_| ParseError::LiteralTooLarge { line: *line })?;
            Ok(Expr::Literal { value: LiteralValue::Integer(value),
                               line:  *line, })
        },
        Some((Token::Str(s), line)) => Ok(Expr::Literal { value: LiteralValue::Str(s.clone()),
                                                          line:  *line, }),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("Expected literal, found {tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a parenthesized expression: `"(" expression ")"`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.next().map_or(line, |(_, l)| *l);
    let expr = parse_expression(tokens, line)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((_, line)) => Err(ParseError::ExpectedClosingParen { line: *line }),
        None => Err(ParseError::ExpectedClosingParen { line }),
    }
}

/// Parses a variable reference or a function call.
///
/// An identifier immediately followed by `(` is a call whose arguments are a
/// comma-separated expression list; otherwise it is a variable reference.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(name), line)) => (name.clone(), *line),
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found {tok:?}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    };

    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen, line)?;
        return Ok(Expr::FunctionCall { name,
                                       arguments,
                                       line });
    }

    Ok(Expr::Variable { name, line })
}
