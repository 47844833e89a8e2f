use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses a block of statements delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until a
/// closing `}` token is encountered; reaching the end of input first is an
/// error.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the opening brace. It tracks the latest statement
///   so a missing `}` is reported near the end of the block.
///
/// # Returns
/// All parsed statements in source order.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, mut line: usize) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                return Ok(statements);
            },
            Some((_, statement_line)) => {
                line = *statement_line;
                statements.push(parse_statement(tokens, line)?);
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }
}
