use log::debug;

pub use crate::arithmetic::ZeroPowerPolicy;
use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the evaluation configuration.
///
/// ## Usage
///
/// `Context` is created once and can be reused, or shared by reference,
/// across any number of evaluations; evaluating never mutates it.
///
/// ```
/// use bodmas::{
///     evaluate_with,
///     interpreter::evaluator::core::{Context, ZeroPowerPolicy},
/// };
///
/// let strict = Context::new().with_zero_power(ZeroPowerPolicy::Reject);
/// assert!(evaluate_with("0^0", &strict).is_err());
/// assert_eq!(evaluate_with("0^0", &Context::new()).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    /// What `0^0` evaluates to.
    pub zero_power: ZeroPowerPolicy,
}

impl Context {
    /// Creates a context with the default policies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this context with the given `0^0` policy.
    #[must_use]
    pub const fn with_zero_power(mut self, policy: ZeroPowerPolicy) -> Self {
        self.zero_power = policy;
        self
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for tree evaluation. Operands are
    /// evaluated left before right, then combined by their operator.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The numeric value of `expr`.
    ///
    /// # Example
    /// ```
    /// use bodmas::{interpreter::evaluator::core::Context, parse};
    ///
    /// let expr = parse("2^3^2").unwrap();
    /// assert_eq!(Context::new().eval(&expr).unwrap(), 512.0);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::UnaryOp { op, expr, .. } => Ok(Self::eval_unary(*op, self.eval(expr)?)),
            Expr::BinaryOp { left,
                             op,
                             right,
                             column, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                let value = self.eval_binary(*op, left, right, *column)?;
                debug!("{left} {op} {right} = {value}");
                Ok(value)
            },
        }
    }
}
