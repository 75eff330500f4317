use std::iter::Peekable;

use log::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}

/// Parses a complete token stream into one expression tree.
///
/// Every token must be consumed; a stray `)` or a token following a complete
/// expression is an error.
///
/// # Errors
/// - `EmptyExpression` if `tokens` is empty.
/// - `UnmatchedClosingParen` for a `)` with no opening counterpart.
/// - `UnexpectedToken` for anything else left over.
/// - Any error from [`parse_expression`].
///
/// # Example
/// ```
/// use bodmas::interpreter::{lexer::tokenize, parser::core::parse_tokens};
///
/// let tokens = tokenize("1+2*3").unwrap();
/// let expr = parse_tokens(&tokens).unwrap();
/// assert_eq!(expr.to_string(), "1+2*3");
///
/// let tokens = tokenize("1+2)").unwrap();
/// assert!(parse_tokens(&tokens).is_err());
/// ```
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    if iter.peek().is_none() {
        return Err(ParseError::EmptyExpression);
    }

    let expr = parse_expression(&mut iter)?;

    match iter.next() {
        None => {
            debug!("parsed {expr}");
            Ok(expr)
        },
        Some((Token::RParen, column)) => {
            Err(ParseError::UnmatchedClosingParen { column: *column })
        },
        Some((token, column)) => Err(ParseError::UnexpectedToken { token:  token.to_string(),
                                                                   column: *column, }),
    }
}
