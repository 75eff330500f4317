use log::trace;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Adjacent sign pairs and the single operator each one collapses to.
///
/// The table is consulted in order; the first pair found anywhere in the
/// expression is rewritten before the scan restarts.
pub const SIGN_PAIRS: [(&str, &str); 6] =
    [("++", "+"), ("--", "+"), ("+-", "-"), ("-+", "-"), ("*+", "*"), ("/+", "/")];

/// Operator pairs with no defined sign-then-operator reading.
pub const INVALID_PAIRS: [&str; 7] = ["-*", "+*", "**", "/*", "+/", "-/", "//"];

/// Runs the full normalization pipeline on raw input.
///
/// Whitespace is removed, the result is checked for invalid operator pairs,
/// redundant signs are collapsed and a leading sign is rewritten so that the
/// expression always starts with an operand.
///
/// Normalizing an already normalized expression returns it unchanged.
///
/// # Errors
/// - `InvalidOperatorPair` if the expression contains one of
///   [`INVALID_PAIRS`].
/// - `EmptyExpression` if nothing but whitespace was supplied.
///
/// # Example
/// ```
/// use bodmas::interpreter::normalizer::normalize;
///
/// assert_eq!(normalize(" -1 -- 2 * +3 ").unwrap(), "0-1+2*3");
/// assert!(normalize("1 + * 2").is_err());
/// ```
pub fn normalize(expression: &str) -> ParseResult<String> {
    let expression = remove_whitespace(expression);
    validate(&expression)?;
    let expression = collapse_sign_pairs(&expression);
    strip_leading_sign(&expression)
}

/// Deletes every whitespace character.
#[must_use]
pub fn remove_whitespace(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Rewrites adjacent sign pairs until none of [`SIGN_PAIRS`] remain.
///
/// Every rewrite shortens the string by one character, so a fixed point is
/// always reached.
///
/// # Example
/// ```
/// use bodmas::interpreter::normalizer::collapse_sign_pairs;
///
/// assert_eq!(collapse_sign_pairs("1---1"), "1-1");
/// assert_eq!(collapse_sign_pairs("3*+5/+2"), "3*5/2");
/// assert_eq!(collapse_sign_pairs("2*-3"), "2*-3");
/// ```
#[must_use]
pub fn collapse_sign_pairs(expression: &str) -> String {
    let mut collapsed = expression.to_string();

    while let Some((index, pair, replacement)) =
        SIGN_PAIRS.iter()
                  .find_map(|(pair, replacement)| {
                      collapsed.find(pair).map(|index| (index, *pair, *replacement))
                  })
    {
        trace!("collapsing '{pair}' at {index} in {collapsed}");
        collapsed.replace_range(index..index + pair.len(), replacement);
    }

    collapsed
}

/// Makes the expression start with an operand.
///
/// A leading `+` is dropped; a leading `-` becomes a subtraction from zero.
///
/// # Errors
/// Returns `EmptyExpression` if `expression` is empty or is a lone `+`.
///
/// # Example
/// ```
/// use bodmas::interpreter::normalizer::strip_leading_sign;
///
/// assert_eq!(strip_leading_sign("+4").unwrap(), "4");
/// assert_eq!(strip_leading_sign("-4*2").unwrap(), "0-4*2");
/// assert_eq!(strip_leading_sign("(1)").unwrap(), "(1)");
/// assert!(strip_leading_sign("+").is_err());
/// ```
pub fn strip_leading_sign(expression: &str) -> ParseResult<String> {
    match expression.chars().next() {
        None => Err(ParseError::EmptyExpression),
        Some('+') if expression.len() == 1 => Err(ParseError::EmptyExpression),
        Some('+') => Ok(expression[1..].to_string()),
        Some('-') => Ok(format!("0{expression}")),
        Some(_) => Ok(expression.to_string()),
    }
}

/// Rejects operator pairs listed in [`INVALID_PAIRS`].
///
/// The earliest offending pair is reported.
///
/// # Errors
/// Returns `InvalidOperatorPair` with the pair and its 1-based column.
///
/// # Example
/// ```
/// use bodmas::{error::ParseError, interpreter::normalizer::validate};
///
/// assert!(validate("1*-2").is_ok());
/// assert_eq!(validate("1+1+/1"),
///            Err(ParseError::InvalidOperatorPair { pair:   "+/".to_string(),
///                                                  column: 4, }));
/// ```
pub fn validate(expression: &str) -> ParseResult<()> {
    let found = INVALID_PAIRS.iter()
                             .filter_map(|pair| expression.find(pair).map(|index| (index, *pair)))
                             .min_by_key(|(index, _)| *index);

    match found {
        Some((index, pair)) => Err(ParseError::InvalidOperatorPair { pair:   pair.to_string(),
                                                                     column: index + 1, }),
        None => Ok(()),
    }
}
