use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators go to `eval_scalar_op`; exponentiation calls
    /// `eval_pow`, which consults the context's policies.
    ///
    /// A result that is not finite is reported as `Overflow` rather than
    /// returned.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `column`: Column of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use bodmas::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let context = Context::new();
    /// let result = context.eval_binary(BinaryOperator::Add, 3.0, 4.0, 1);
    /// assert_eq!(result.unwrap(), 7.0);
    ///
    /// assert!(context.eval_binary(BinaryOperator::Pow, 10.0, 400.0, 3).is_err());
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: f64,
                       right: f64,
                       column: usize)
                       -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        let value = match op {
            Add | Sub | Mul | Div => Self::eval_scalar_op(op, left, right, column)?,
            Pow => self.eval_pow(left, right, column)?,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(RuntimeError::Overflow { column })
        }
    }
}
