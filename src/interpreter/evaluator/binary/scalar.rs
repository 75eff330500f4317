use crate::{
    arithmetic::{ZeroPowerPolicy, add, divide, multiply, power, subtract},
    ast::BinaryOperator,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Division by zero is checked by the `divide` primitive. Exponentiation
    /// uses the default `0^0` policy; [`Context::eval_binary`] applies the
    /// context's own.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `column`: Column of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use bodmas::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Mul, 1.5, 2.0, 1).unwrap();
    /// assert_eq!(result, 3.0);
    /// assert!(Context::eval_scalar_op(BinaryOperator::Div, 1.0, 0.0, 1).is_err());
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Pow, 2.0, 3.0, 1).unwrap(), 8.0);
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: f64,
                          right: f64,
                          column: usize)
                          -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        match op {
            Add => Ok(add(left, right)),
            Sub => Ok(subtract(left, right)),
            Mul => Ok(multiply(left, right)),
            Div => divide(left, right, column),
            Pow => power(left, right, ZeroPowerPolicy::default(), column),
        }
    }
}
