/// Binary operator evaluation logic.
///
/// Routes the four arithmetic operators and exponentiation to the
/// primitives in [`crate::arithmetic`].
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements sign handling (negation).
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the tree-walking evaluator, the runtime context and its
/// configuration.
pub mod core;

/// Step-by-step reduction.
///
/// Rewrites an expression tree one operation at a time, producing the
/// sequence of intermediate expressions.
pub mod trace;
