use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during normalizing, lexing or parsing.
///
/// Columns are 1-based byte offsets into the normalized expression, i.e. the
/// input with whitespace removed and redundant signs collapsed.
pub enum ParseError {
    /// Nothing left to evaluate once whitespace was removed.
    EmptyExpression,
    /// Two adjacent operators with no defined sign-then-operator reading.
    InvalidOperatorPair {
        /// The offending pair, e.g. `+*`.
        pair:   String,
        /// The column of the first character of the pair.
        column: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The column where the token starts.
        column: usize,
    },
    /// Reached the end of input while an operand was still expected.
    UnexpectedEndOfInput,
    /// An opening parenthesis `(` was never closed.
    ExpectedClosingParen {
        /// The column of the unmatched `(`.
        column: usize,
    },
    /// A closing parenthesis `)` has no opening counterpart.
    UnmatchedClosingParen {
        /// The column of the unmatched `)`.
        column: usize,
    },
    /// A group `()` with nothing inside.
    EmptyGroup {
        /// The column of the `(`.
        column: usize,
    },
    /// A literal made of digits and dots that is not a decimal number.
    InvalidNumber {
        /// The literal as written.
        literal: String,
        /// The column where the literal starts.
        column:  usize,
    },
    /// A character outside the supported alphabet.
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
        /// The column of the character.
        column:    usize,
    },
}

impl ParseError {
    /// Returns the category of this error.
    ///
    /// Malformed literals and unknown characters are numeric parse failures;
    /// everything else is a structurally invalid expression.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidNumber { .. } | Self::UnexpectedCharacter { .. } => {
                ErrorKind::NumericParseFailure
            },
            _ => ErrorKind::InvalidExpression,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Error: Expression is empty."),

            Self::InvalidOperatorPair { pair, column } => {
                write!(f, "Error at column {column}: Invalid operator combination '{pair}'.")
            },

            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => {
                write!(f, "Error: Unexpected end of input, an operand is missing.")
            },

            Self::ExpectedClosingParen { column } => write!(f,
                                                            "Error at column {column}: Expected closing parenthesis ')' but none found."),

            Self::UnmatchedClosingParen { column } => write!(f,
                                                             "Error at column {column}: Closing parenthesis ')' has no matching '('."),

            Self::EmptyGroup { column } => {
                write!(f, "Error at column {column}: Parentheses contain no expression.")
            },

            Self::InvalidNumber { literal, column } => {
                write!(f, "Error at column {column}: '{literal}' is not a valid number.")
            },

            Self::UnexpectedCharacter { character, column } => {
                write!(f, "Error at column {column}: Unexpected character '{character}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
