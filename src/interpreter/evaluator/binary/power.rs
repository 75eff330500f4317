use crate::{
    arithmetic::power,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// Only integer exponents are supported. Negative exponents produce the
    /// reciprocal, and `0^0` follows the context's `zero_power` policy.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `column`: Column of the `^` for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use bodmas::interpreter::evaluator::core::Context;
    ///
    /// let context = Context::new();
    /// assert_eq!(context.eval_pow(2.0, 10.0, 1).unwrap(), 1024.0);
    /// assert_eq!(context.eval_pow(2.0, -2.0, 1).unwrap(), 0.25);
    /// ```
    pub fn eval_pow(&self, base: f64, exponent: f64, column: usize) -> EvalResult<f64> {
        power(base, exponent, self.zero_power, column)
    }
}
