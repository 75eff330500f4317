//! # bodmas
//!
//! bodmas evaluates arithmetic expressions written as text, honoring the
//! standard order of operations: brackets, exponents, division and
//! multiplication, addition and subtraction.
//!
//! ```
//! assert_eq!(bodmas::evaluate("(2^3 + 1) * (3 + 4^2)").unwrap(), 171.0);
//! assert_eq!(bodmas::evaluate("2^-1").unwrap(), 0.5);
//! assert_eq!(bodmas::evaluate("1--1").unwrap(), 2.0);
//! ```
//!
//! Evaluation runs in three stages: the input is normalized as text
//! ([`interpreter::normalizer`]), tokenized once ([`interpreter::lexer`]) and
//! parsed by precedence into an [`ast::Expr`] tree, which is then evaluated
//! ([`interpreter::evaluator`]).
//!
//! Recursion depth grows with parenthesis nesting and with the length of
//! exponent chains. No limit is enforced, so extremely deep input can
//! exhaust the stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    ast::Expr,
    error::CalcError,
    interpreter::{
        evaluator::core::Context, lexer::tokenize, normalizer::normalize,
        parser::core::parse_tokens,
    },
};

/// Pure arithmetic primitives.
///
/// Addition, subtraction, multiplication, checked division and the integer
/// power, with no knowledge of text or trees.
pub mod arithmetic;
/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The tree is built by the parser, traversed by the
/// evaluator and rendered back to text by its `Display` implementation.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (normalizer, lexer, parser,
///   evaluator).
/// - Attaches columns and detailed messages for context.
/// - Groups every error into one of three kinds.
pub mod error;
/// Orchestrates normalizing, lexing, parsing and evaluation.
pub mod interpreter;

/// Parses an expression into a tree without evaluating it.
///
/// # Errors
/// Returns an error if the expression is empty, contains a disallowed
/// operator pair, a malformed literal, an unsupported character, unbalanced
/// parentheses or a missing operand.
///
/// # Examples
/// ```
/// use bodmas::parse;
///
/// let expr = parse("-2 ^ 2").unwrap();
/// assert_eq!(expr.to_string(), "0-2^2");
///
/// assert!(parse("(1+2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, CalcError> {
    let normalized = normalize(source)?;
    debug!("normalized {source:?} to {normalized:?}");

    let tokens = tokenize(&normalized)?;
    debug!("lexed {} tokens", tokens.len());

    Ok(parse_tokens(&tokens)?)
}

/// Evaluates an expression with the default [`Context`].
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use bodmas::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("1 + 2").unwrap(), 3.0);
/// assert_eq!(evaluate("((1+1))").unwrap(), 2.0);
///
/// let err = evaluate("1+*1").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidExpression);
/// ```
pub fn evaluate(source: &str) -> Result<f64, CalcError> {
    evaluate_with(source, &Context::new())
}

/// Evaluates an expression with the given [`Context`].
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
pub fn evaluate_with(source: &str, context: &Context) -> Result<f64, CalcError> {
    let expr = parse(source)?;
    let value = context.eval(&expr)?;
    debug!("{source:?} = {value}");
    Ok(value)
}

/// Returns every intermediate expression on the way from `source` to its
/// value.
///
/// The first entry is the normalized input and the last is the result.
///
/// # Errors
/// Returns an error if parsing fails or any reduction fails.
///
/// # Examples
/// ```
/// use bodmas::{interpreter::evaluator::core::Context, trace};
///
/// let steps = trace("2 * (3 + 4)", &Context::new()).unwrap();
/// assert_eq!(steps, ["2*(3+4)", "2*7", "14"]);
/// ```
pub fn trace(source: &str, context: &Context) -> Result<Vec<String>, CalcError> {
    let expr = parse(source)?;
    Ok(context.trace(&expr)?)
}
