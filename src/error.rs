/// Parsing errors.
///
/// Defines all error types that can occur while normalizing, lexing and
/// parsing an expression. Parse errors include disallowed operator pairs,
/// unmatched parentheses, malformed literals and any other issue detected
/// before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero or an exponent the power primitive cannot handle.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The category of a failed evaluation.
///
/// Every concrete error maps onto exactly one kind. Callers that only need to
/// know *why* an expression could not be evaluated should match on this
/// instead of the individual variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The expression is structurally malformed.
    InvalidExpression,
    /// A divisor resolved to zero.
    DivisionByZero,
    /// A span expected to be a decimal literal is not one.
    NumericParseFailure,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression => write!(f, "invalid expression"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::NumericParseFailure => write!(f, "numeric parse failure"),
        }
    }
}

/// Any error returned by the public entry points.
///
/// Wraps either a [`ParseError`] or a [`RuntimeError`]; both convert into it
/// with `?`.
///
/// # Example
/// ```
/// use bodmas::{error::ErrorKind, evaluate};
///
/// let err = evaluate("1/0").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// The expression could not be normalized, tokenized or parsed.
    Parse(ParseError),
    /// The expression parsed but could not be evaluated.
    Runtime(RuntimeError),
}

impl CalcError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
