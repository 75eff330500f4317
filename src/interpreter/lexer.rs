use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Failure raised by the generated lexer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No token matches the input at this position.
    #[default]
    UnexpectedCharacter,
    /// A run of digits and dots that does not parse as a decimal.
    InvalidNumber,
}

/// Represents a lexical token in a normalized expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexError)]
pub enum Token {
    /// Decimal literal tokens, such as `3`, `2.5`, `.5` or `4.`.
    ///
    /// Any run of digits and dots is captured so that `1.2.3` is reported as
    /// one malformed number rather than two adjacent ones.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
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
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Whitespace; normally already removed by the normalizer.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses a decimal literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexError::InvalidNumber)`: If the slice is not a valid decimal or
///   is too large to represent.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    lex.slice()
       .parse::<f64>()
       .ok()
       .filter(|value| value.is_finite())
       .ok_or(LexError::InvalidNumber)
}

/// Tokenizes a normalized expression into `(Token, column)` pairs.
///
/// Columns are 1-based byte offsets into `source`.
///
/// # Errors
/// - `InvalidNumber` for a malformed literal such as `1.2.3` or `.`, or one
///   with more digits than an `f64` can hold.
/// - `UnexpectedCharacter` for anything outside digits, `.`, `+ - * / ^ ( )`.
///
/// # Example
/// ```
/// use bodmas::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2^-1.5").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 1),
///                 (Token::Caret, 2),
///                 (Token::Minus, 3),
///                 (Token::Number(1.5), 4)]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();

    for (token, span) in Token::lexer(source).spanned() {
        let column = span.start + 1;
        match token {
            Ok(token) => tokens.push((token, column)),
            Err(LexError::InvalidNumber) => {
                return Err(ParseError::InvalidNumber { literal: source[span].to_string(),
                                                       column });
            },
            Err(LexError::UnexpectedCharacter) => {
                let character = source[span.start..].chars().next().unwrap_or_default();
                return Err(ParseError::UnexpectedCharacter { character, column });
            },
        }
    }

    Ok(tokens)
}
