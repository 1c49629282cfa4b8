/// Represents one of the three grid variables.
///
/// Every expression is a function of the variables `x`, `y` and `z`; a
/// `Variable` node stores which of the three axes it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The variable `x`.
    X,
    /// The variable `y`.
    Y,
    /// The variable `z`.
    Z,
}

impl Axis {
    /// Resolves a variable name to its axis.
    ///
    /// Only the exact names `x`, `y` and `z` are variables; every other
    /// identifier is rejected with `None`.
    ///
    /// # Example
    /// ```
    /// use trigrid::ast::Axis;
    ///
    /// assert_eq!(Axis::from_name("y"), Some(Axis::Y));
    /// assert_eq!(Axis::from_name("yy"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "x" => Some(Self::X),
            "y" => Some(Self::Y),
            "z" => Some(Self::Z),
            _ => None,
        }
    }

    /// Returns the variable name of this axis.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Represents a binary operator.
///
/// The grammar exposes two operator vocabularies: the generic one with `mod`,
/// and the 32-bit integer one with the bit operators `set` and `clear`. Both
/// share this enum; the active operator table decides which subset the parser
/// accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Remainder (`mod`)
    Mod,
    /// Sets the bit selected by the right operand (`set`).
    Set,
    /// Clears the bit selected by the right operand (`clear`).
    Clear,
}

impl BinaryOp {
    /// Returns the precedence tier of this operator.
    ///
    /// Higher tiers bind tighter. Tiers start at 1 so the outermost parse can
    /// use a floor of 0 that no operator ever fails to exceed.
    ///
    /// # Example
    /// ```
    /// use trigrid::ast::BinaryOp;
    ///
    /// assert!(BinaryOp::Multiply.priority() > BinaryOp::Add.priority());
    /// assert!(BinaryOp::Add.priority() > BinaryOp::Set.priority());
    /// assert_eq!(BinaryOp::Divide.priority(), BinaryOp::Mod.priority());
    /// ```
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Set | Self::Clear => 1,
            Self::Add | Self::Subtract => 2,
            Self::Multiply | Self::Divide | Self::Mod => 3,
        }
    }

    /// Returns the textual form of this operator as written in expressions.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Mod => "mod",
            Self::Set => "set",
            Self::Clear => "clear",
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a unary (prefix) operator.
///
/// Unary operators are parsed as part of a primary, so they always bind
/// tighter than any binary operator and carry no precedence tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Arithmetic negation (`-`).
    Negate,
    /// 1 for a non-zero operand, 0 otherwise (`count`).
    Count,
    /// Ten raised to the operand (`pow10`).
    Pow10,
    /// Floor of the decimal logarithm (`log10`).
    Log10,
    /// Absolute value (`abs`).
    Abs,
    /// The operand multiplied by itself (`square`).
    Square,
}

impl UnaryOp {
    /// Returns the textual form of this operator as written in expressions.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Count => "count",
            Self::Pow10 => "pow10",
            Self::Log10 => "log10",
            Self::Abs => "abs",
            Self::Square => "square",
        }
    }
}

impl std::fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An abstract syntax tree node for an expression over `x`, `y` and `z`.
///
/// The tree is generic over the constant type `T`, so the same structure
/// carries 32-bit, 64-bit, 16-bit, floating-point and arbitrary-precision
/// expressions. Constants are converted into `T` while parsing; the tree is
/// immutable after construction and evaluating it never mutates a node, so a
/// parsed expression can be evaluated any number of times.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<T> {
    /// A literal constant, already converted into the numeric domain.
    Const(T),
    /// A reference to one of the three grid variables.
    Variable(Axis),
    /// A unary operation applied to one operand.
    Unary {
        /// The unary operator to apply.
        op:      UnaryOp,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation combining two operands.
    Binary {
        /// The operator.
        op:    BinaryOp,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl<T: std::fmt::Display> std::fmt::Display for Expr<T> {
    /// Renders the expression in fully parenthesized infix form.
    ///
    /// # Example
    /// ```
    /// let expr = trigrid::parse("2+3*x").unwrap();
    /// assert_eq!(expr.to_string(), "(2 + (3 * x))");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Const(value) => write!(f, "{value}"),
            Self::Variable(axis) => write!(f, "{axis}"),
            Self::Unary { op, operand } => write!(f, "{op}({operand})"),
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
