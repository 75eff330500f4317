use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// What `0^0` evaluates to.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ZeroPowerPolicy {
    /// `0^0 == 1`, the convention of the recursive power definition.
    #[default]
    One,
    /// `0^0` is rejected as undefined.
    Reject,
}

/// Returns `x + y`.
#[must_use]
pub const fn add(x: f64, y: f64) -> f64 {
    x + y
}

/// Returns `x - y`.
#[must_use]
pub const fn subtract(x: f64, y: f64) -> f64 {
    x - y
}

/// Returns `x * y`.
#[must_use]
pub const fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

/// Returns `x / y`.
///
/// # Errors
/// Returns `DivisionByZero` when `y` is zero, whatever `x` is.
///
/// # Example
/// ```
/// use bodmas::{arithmetic::divide, error::RuntimeError};
///
/// assert_eq!(divide(6.0, 2.0, 1).unwrap(), 3.0);
/// assert_eq!(divide(0.0, 0.0, 2),
///            Err(RuntimeError::DivisionByZero { column: 2 }));
/// ```
pub fn divide(x: f64, y: f64, column: usize) -> EvalResult<f64> {
    if y == 0.0 {
        return Err(RuntimeError::DivisionByZero { column });
    }
    Ok(x / y)
}

/// Raises `base` to an integer `exponent`.
///
/// - `exponent == 0` gives `1`, subject to `policy` when `base` is zero too.
/// - `exponent < 0` gives `1 / base^-exponent`, so a negative power of zero
///   is a division by zero.
/// - Otherwise `base` multiplied by itself `exponent` times.
///
/// # Errors
/// - `FractionalExponent` if `exponent` is not a finite integer.
/// - `ZeroToThePowerZero` for `0^0` under [`ZeroPowerPolicy::Reject`].
/// - `DivisionByZero` for a negative power of zero.
///
/// # Example
/// ```
/// use bodmas::arithmetic::{ZeroPowerPolicy, power};
///
/// assert_eq!(power(2.0, 10.0, ZeroPowerPolicy::One, 1).unwrap(), 1024.0);
/// assert_eq!(power(2.0, -1.0, ZeroPowerPolicy::One, 1).unwrap(), 0.5);
/// assert_eq!(power(0.0, 0.0, ZeroPowerPolicy::One, 1).unwrap(), 1.0);
/// assert!(power(0.0, 0.0, ZeroPowerPolicy::Reject, 1).is_err());
/// assert!(power(2.0, 0.5, ZeroPowerPolicy::One, 1).is_err());
/// ```
pub fn power(base: f64, exponent: f64, policy: ZeroPowerPolicy, column: usize) -> EvalResult<f64> {
    if !exponent.is_finite() || exponent.fract() != 0.0 {
        return Err(RuntimeError::FractionalExponent { exponent, column });
    }

    if exponent == 0.0 {
        if base == 0.0 && policy == ZeroPowerPolicy::Reject {
            return Err(RuntimeError::ZeroToThePowerZero { column });
        }
        return Ok(1.0);
    }

    if exponent < 0.0 {
        return divide(1.0, power(base, -exponent, policy, column)?, column);
    }

    // Integral and positive here, where `powf` is exact up to rounding of the
    // repeated product.
    Ok(base.powf(exponent))
}
