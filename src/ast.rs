use std::fmt;

/// Binding strength of a negation, and of a negative literal.
///
/// Sits between products and powers: `-2^2` negates the power while `-2*3`
/// multiplies the negated operand.
const NEGATION_BINDING: u8 = 3;
/// Binding strength of a non-negative literal.
const ATOM_BINDING: u8 = 5;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Each variant carries the column of the token it was built from so that
/// evaluation errors can point back into the normalized expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A decimal literal, or the result of an already reduced operation.
    Literal {
        /// The numeric value.
        value:  f64,
        /// Column in the normalized expression.
        column: usize,
    },
    /// A sign applied to an operand (e.g. `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Column of the sign.
        column: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Column of the operator.
        column: usize,
    },
}

impl Expr {
    /// Returns the column at which this expression's token was found.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Literal { column, .. }
            | Self::UnaryOp { column, .. }
            | Self::BinaryOp { column, .. } => *column,
        }
    }

    /// How tightly this node holds together when rendered next to an operator.
    fn binding(&self) -> u8 {
        match self {
            Self::Literal { value, .. } if value.is_sign_negative() => NEGATION_BINDING,
            Self::Literal { .. } => ATOM_BINDING,
            Self::UnaryOp { .. } => NEGATION_BINDING,
            Self::BinaryOp { op, .. } => op.precedence(),
        }
    }

    /// Whether the rendered text starts with `-`.
    fn leading_sign(&self) -> bool {
        match self {
            Self::Literal { value, .. } => value.is_sign_negative(),
            Self::UnaryOp { .. } => true,
            Self::BinaryOp { left, op, .. } => {
                left.binding() >= op.operand_bindings().0 && left.leading_sign()
            },
        }
    }

    /// Renders an operand, in parentheses when it binds looser than
    /// `min_binding` or when it would put a second sign right after a sign.
    fn fmt_operand(&self,
                   f: &mut fmt::Formatter<'_>,
                   min_binding: u8,
                   after_sign: bool)
                   -> fmt::Result {
        if self.binding() < min_binding || (after_sign && self.leading_sign()) {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

/// Renders the expression without whitespace, adding parentheses only where
/// the grammar needs them or where two signs would meet. The output parses
/// back to an equal value.
///
/// # Example
/// ```
/// use bodmas::parse;
///
/// let expr = parse("(1 + 2) * 3 ^ (2)").unwrap();
/// assert_eq!(expr.to_string(), "(1+2)*3^2");
///
/// let expr = parse("2*-(-3)").unwrap();
/// assert_eq!(expr.to_string(), "2*-(-3)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::UnaryOp { op, expr, .. } => {
                write!(f, "{op}")?;
                expr.fmt_operand(f, NEGATION_BINDING, true)
            },
            Self::BinaryOp { left, op, right, .. } => {
                let (min_left, min_right) = op.operand_bindings();
                left.fmt_operand(f, min_left, false)?;
                write!(f, "{op}")?;
                right.fmt_operand(f, min_right, op.is_additive())
            },
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Returns the precedence level; higher binds tighter.
    ///
    /// # Example
    /// ```
    /// use bodmas::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Pow.precedence() > BinaryOperator::Mul.precedence());
    /// assert_eq!(BinaryOperator::Add.precedence(), BinaryOperator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 4,
        }
    }

    /// Returns `true` for `+` and `-`.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Exponentiation groups right to left; everything else left to right.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }

    /// Minimum bindings the left and right operands need to be rendered
    /// without parentheses.
    const fn operand_bindings(self) -> (u8, u8) {
        match self {
            Self::Add | Self::Sub => (1, 2),
            Self::Mul | Self::Div => (2, NEGATION_BINDING),
            // The base is a bare number or a group; the exponent may carry a
            // sign or be another power.
            Self::Pow => (ATOM_BINDING, NEGATION_BINDING),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary operator.
///
/// Sign handling is the only unary operation: a leading `+` is dropped while
/// parsing, so negation is all that reaches the tree.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
