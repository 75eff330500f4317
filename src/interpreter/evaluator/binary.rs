/// Dispatch of binary operators.
pub mod core;

/// Exponentiation.
///
/// Applies the context's `0^0` policy on top of the integer power primitive.
pub mod power;

/// Addition, subtraction, multiplication and division.
pub mod scalar;
