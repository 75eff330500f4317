/// The evaluator module computes the value of a parsed expression.
///
/// The evaluator walks the expression tree, applies the arithmetic
/// primitives for every operator and reports runtime errors such as
/// division by zero. It can also reduce a tree one operation at a time.
///
/// # Responsibilities
/// - Evaluates tree nodes with the context's policies.
/// - Reports runtime errors with the column of the failing operator.
/// - Produces the step-by-step reduction trace.
pub mod evaluator;
/// The lexer module tokenizes a normalized expression.
///
/// The lexer reads the normalized text once and produces a stream of tokens:
/// decimal literals, the five operators and parentheses, each with its
/// column.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source columns.
/// - Reports malformed literals and unsupported characters.
pub mod lexer;
/// The normalizer module prepares raw input for tokenizing.
///
/// # Responsibilities
/// - Removes whitespace.
/// - Rejects operator pairs with no defined reading.
/// - Collapses redundant adjacent signs and rewrites a leading sign.
pub mod normalizer;
/// The parser module builds the expression tree from tokens.
///
/// The parser has one rule per precedence layer, so parenthesized groups,
/// exponents, products and sums are each resolved at their own level with
/// the associativity that layer requires.
///
/// # Responsibilities
/// - Converts tokens into tree nodes.
/// - Validates grammar, reporting errors with column info.
pub mod parser;
