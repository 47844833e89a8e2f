use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    ///
    /// The magnitude is kept unsigned; the parser narrows it to `i64` once it
    /// knows whether a `-` precedes it.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(u64),
    /// String literal tokens, such as `"hello"`. The quotes are stripped.
    #[regex(r#""[^"\n]*""#, parse_string)]
    Str(String),
    /// `func`
    #[token("func")]
    Func,
    /// `var`
    #[token("var")]
    Var,
    /// Identifier tokens; variable or function names such as `x` or `print`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// ```text
    /// /* Multi line comments. */
    /// ```
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    MultiLineComment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=")]
    Equals,

    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, feeds and carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Splits source text into `(Token, line)` pairs.
///
/// Lines are counted from 1. Comments and whitespace never reach the token
/// stream.
///
/// # Errors
/// - `LiteralTooLarge` if an integer literal does not fit in a `u64`.
/// - `UnexpectedToken` for any character sequence that is not a token, such as
///   an unterminated string.
///
/// # Example
/// ```
/// use brewin::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("var x;\nx = 1;").unwrap();
///
/// assert_eq!(tokens[0], (Token::Var, 1));
/// assert_eq!(tokens[3], (Token::Identifier("x".to_string()), 2));
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            let line = lexer.extras.line;
            if !slice.is_empty() && slice.chars().all(|c| c.is_ascii_digit()) {
                return Err(ParseError::LiteralTooLarge { line });
            }
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line });
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` if the literal does not fit in a `u64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<u64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_and_identifiers() {
        let tokens = tokenize("func main() { var funcs; }").unwrap();
        let kinds: Vec<Token> = tokens.into_iter().map(|(t, _)| t).collect();

        assert_eq!(kinds,
                   vec![Token::Func,
                        Token::Identifier("main".into()),
                        Token::LParen,
                        Token::RParen,
                        Token::LBrace,
                        Token::Var,
                        Token::Identifier("funcs".into()),
                        Token::Semicolon,
                        Token::RBrace]);
    }

    #[test]
    fn strings_keep_inner_text() {
        let tokens = tokenize(r#"print("a + b", 3);"#).unwrap();
        assert_eq!(tokens[2].0, Token::Str("a + b".into()));
        assert_eq!(tokens[4].0, Token::Integer(3));
    }

    #[test]
    fn comments_are_skipped_and_lines_counted() {
        let source = "// header\nvar x; /* one\ntwo */\nx = 1;";
        let tokens = tokenize(source).unwrap();

        assert_eq!(tokens[0], (Token::Var, 2));
        assert_eq!(tokens[3], (Token::Identifier("x".into()), 4));
    }

    #[test]
    fn starred_block_comments_are_skipped() {
        let source = "/** banner **/\nvar a; /***/ var b;\n/*\n * x\n **/\nvar c;";
        let tokens = tokenize(source).unwrap();

        assert_eq!(tokens[0], (Token::Var, 2));
        assert_eq!(tokens[4], (Token::Identifier("b".into()), 2));
        assert_eq!(tokens[6], (Token::Var, 6));
    }

    #[test]
    fn comment_ends_at_first_terminator() {
        let tokens = tokenize("/* a */ x /* b */").unwrap();
        assert_eq!(tokens, vec![(Token::Identifier("x".into()), 1)]);
    }

    #[test]
    fn largest_magnitude_still_lexes() {
        let tokens = tokenize("9223372036854775808").unwrap();
        assert_eq!(tokens[0].0, Token::Integer(9_223_372_036_854_775_808));
    }

    #[test]
    fn oversized_literal_is_rejected() {
        let err = tokenize("x = 99999999999999999999;").unwrap_err();
        assert!(matches!(err, ParseError::LiteralTooLarge { line: 1 }));
    }

    #[test]
    fn unterminated_string_is_rejected() {
        assert!(tokenize("print(\"oops);").is_err());
    }
}
