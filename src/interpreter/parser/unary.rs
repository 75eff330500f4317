use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_exponent,
            core::{ParseResult, parse_expression},
        },
    },
};

/// Parses a signed operand.
///
/// Supports the prefix signs:
/// - `-`  (numeric negation)
/// - `+`  (no-op, dropped)
///
/// A sign binds looser than `^`, so `-3^2` is `-(3^2)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | exponent
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or an exponent-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Minus, column)) => {
            tokens.next();
            let expr = parse_unary(tokens)?;
            Ok(Expr::UnaryOp { op:     UnaryOperator::Negate,
                               expr:   Box::new(expr),
                               column: *column, })
        },
        Some((Token::Plus, _)) => {
            tokens.next();
            parse_unary(tokens)
        },
        _ => parse_exponent(tokens),
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - decimal literals
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := number
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Number(value), column)) => {
            let expr = Expr::Literal { value:  *value,
                                       column: *column, };
            tokens.next();
            Ok(expr)
        },
        Some((Token::LParen, column)) => {
            let column = *column;
            tokens.next();
            parse_grouping(tokens, column)
        },
        Some((token, column)) => Err(ParseError::UnexpectedToken { token:  token.to_string(),
                                                                   column: *column, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses the inside of a parenthesized group.
///
/// The group is a complete expression on its own; its tree is returned
/// directly so the enclosing layer treats it as a single operand.
///
/// # Parameters
/// - `tokens`: Token stream positioned just after `(`.
/// - `column`: Column of the opening `(`.
///
/// # Errors
/// - `EmptyGroup` for `()`.
/// - `ExpectedClosingParen` when the group is never closed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, column: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::RParen, _)) = tokens.peek() {
        return Err(ParseError::EmptyGroup { column });
    }

    let expr = match parse_expression(tokens) {
        Err(ParseError::UnexpectedEndOfInput) => {
            return Err(ParseError::ExpectedClosingParen { column });
        },
        other => other?,
    };

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { column }),
    }
}
