/// Parser entry points and the shared result type.
///
/// Contains the top-level expression rule and the driver that turns a full
/// token stream into a single tree, rejecting anything left over.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence layer: sums and differences, products and
/// quotients, and right-associative exponentiation.
pub mod binary;

/// Unary and primary parsing.
///
/// Handles sign prefixes, decimal literals and parenthesized groups.
pub mod unary;
