use log::trace;

use crate::{
    ast::Expr,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Performs the next single reduction on `expr`.
    ///
    /// The reduced operation is the first one, in evaluation order, whose
    /// operands are all literals: operands are reduced before the operation
    /// that consumes them, the left operand before the right one, except for
    /// `^` whose exponent is reduced first so chains fold right to left. The
    /// operation is replaced by a literal holding its value.
    ///
    /// # Returns
    /// `Some(tree)` with one operation fewer, or `None` when `expr` is already
    /// a literal.
    ///
    /// # Example
    /// ```
    /// use bodmas::{interpreter::evaluator::core::Context, parse};
    ///
    /// let context = Context::new();
    /// let expr = parse("1+2*3").unwrap();
    /// let step = context.reduce_step(&expr).unwrap().unwrap();
    /// assert_eq!(step.to_string(), "1+6");
    /// ```
    pub fn reduce_step(&self, expr: &Expr) -> EvalResult<Option<Expr>> {
        match expr {
            Expr::Literal { .. } => Ok(None),
            Expr::UnaryOp { op, expr, column } => {
                if let Expr::Literal { value, .. } = **expr {
                    let value = Self::eval_unary(*op, value);
                    return Ok(Some(Expr::Literal { value,
                                                   column: *column }));
                }
                Ok(self.reduce_step(expr)?.map(|reduced| Expr::UnaryOp { op:     *op,
                                                                         expr:   Box::new(reduced),
                                                                         column: *column, }))
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             column, } => {
                if let (Expr::Literal { value: l, .. }, Expr::Literal { value: r, .. }) =
                    (&**left, &**right)
                {
                    let value = self.eval_binary(*op, *l, *r, *column)?;
                    return Ok(Some(Expr::Literal { value,
                                                   column: *column }));
                }

                let rebuild = |left: Expr, right: Expr| Expr::BinaryOp { left: Box::new(left),
                                                                        op: *op,
                                                                        right: Box::new(right),
                                                                        column: *column };

                if op.is_right_associative() {
                    if let Some(reduced) = self.reduce_step(right)? {
                        return Ok(Some(rebuild((**left).clone(), reduced)));
                    }
                    Ok(self.reduce_step(left)?
                           .map(|reduced| rebuild(reduced, (**right).clone())))
                } else {
                    if let Some(reduced) = self.reduce_step(left)? {
                        return Ok(Some(rebuild(reduced, (**right).clone())));
                    }
                    Ok(self.reduce_step(right)?
                           .map(|reduced| rebuild((**left).clone(), reduced)))
                }
            },
        }
    }

    /// Reduces `expr` to a number one operation at a time.
    ///
    /// The first entry is `expr` rendered as text and the last one is its
    /// value. A reduction that does not change the rendered text, such as
    /// folding a sign into a literal, is not repeated as a separate step.
    ///
    /// # Errors
    /// Propagates the first `RuntimeError` met while reducing.
    ///
    /// # Example
    /// ```
    /// use bodmas::{interpreter::evaluator::core::Context, parse};
    ///
    /// let expr = parse("(1+2)*3^2").unwrap();
    /// let steps = Context::new().trace(&expr).unwrap();
    /// assert_eq!(steps, ["(1+2)*3^2", "3*3^2", "3*9", "27"]);
    /// ```
    pub fn trace(&self, expr: &Expr) -> EvalResult<Vec<String>> {
        let mut steps = vec![expr.to_string()];
        let mut current = expr.clone();

        while let Some(next) = self.reduce_step(&current)? {
            let rendered = next.to_string();
            if steps.last() != Some(&rendered) {
                trace!("step {}: {rendered}", steps.len());
                steps.push(rendered);
            }
            current = next;
        }

        Ok(steps)
    }
}
