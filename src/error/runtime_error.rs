use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
///
/// Columns point at the operator whose evaluation failed.
pub enum RuntimeError {
    /// Attempted division by zero, either directly or through a negative
    /// power of zero.
    DivisionByZero {
        /// The column of the operator.
        column: usize,
    },
    /// `0^0` was evaluated while the context rejects it.
    ZeroToThePowerZero {
        /// The column of the `^`.
        column: usize,
    },
    /// The exponent is fractional or not finite; only integer exponents are
    /// supported.
    FractionalExponent {
        /// The exponent that was rejected.
        exponent: f64,
        /// The column of the `^`.
        column:   usize,
    },
    /// The result of an operation is too large to represent.
    Overflow {
        /// The column of the operator.
        column: usize,
    },
}

impl RuntimeError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::ZeroToThePowerZero { .. }
            | Self::FractionalExponent { .. }
            | Self::Overflow { .. } => ErrorKind::InvalidExpression,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { column } => {
                write!(f, "Error at column {column}: Division by zero.")
            },
            Self::ZeroToThePowerZero { column } => {
                write!(f, "Error at column {column}: 0^0 is undefined.")
            },
            Self::FractionalExponent { exponent, column } => write!(f,
                                                                    "Error at column {column}: Exponent {exponent} is not an integer."),
            Self::Overflow { column } => {
                write!(f, "Error at column {column}: Result is out of range.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
