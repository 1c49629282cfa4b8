use crate::{
    ast::{Axis, Expr},
    error::EvalError,
};

/// Result type used by the evaluators.
///
/// All evaluation functions return either a value of the active numeric
/// domain or an [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// A numeric domain: how constants are read and how arithmetic behaves.
///
/// Each implementation is a stateless marker type; operations are associated
/// functions over the domain's [`Evaluator::Value`]. The same expression tree
/// evaluated under two different domains can produce different values,
/// different failures, or one of each — overflow handling, division rules
/// and the sign of `mod` all belong to the domain, not to the tree.
///
/// The bit-manipulating and power-of-ten operations (`set`, `clear`,
/// `count`, `pow10`, `log10`) only exist in the checked 32-bit domain. Their
/// default bodies fail with [`EvalError::IllegalOperand`], so hand-built
/// trees remain safe to evaluate anywhere; expressions coming out of the
/// parser never reach them in other domains because the grammar does not
/// contain those words there.
pub trait Evaluator {
    /// The value type of this domain.
    type Value: Clone;

    /// Converts a grid coordinate into a domain value.
    fn from_int(value: i32) -> Self::Value;

    /// Converts literal text, with an optional leading `-`, into a domain
    /// value.
    ///
    /// # Returns
    /// `None` when the literal does not fit the domain. The parser turns
    /// that into a constant-overflow error with the literal's position.
    fn from_text(text: &str) -> Option<Self::Value>;

    /// Computes `-a`.
    fn negate(a: Self::Value) -> EvalResult<Self::Value>;

    /// Computes `a + b`.
    fn add(a: Self::Value, b: Self::Value) -> EvalResult<Self::Value>;

    /// Computes `a - b`.
    fn subtract(a: Self::Value, b: Self::Value) -> EvalResult<Self::Value>;

    /// Computes `a * b`.
    fn multiply(a: Self::Value, b: Self::Value) -> EvalResult<Self::Value>;

    /// Computes `a / b`.
    fn divide(a: Self::Value, b: Self::Value) -> EvalResult<Self::Value>;

    /// Computes the remainder or modulus of `a` by `b`; which one is the
    /// domain's choice.
    fn modulo(a: Self::Value, b: Self::Value) -> EvalResult<Self::Value>;

    /// Computes the absolute value of `a`.
    fn abs(a: Self::Value) -> EvalResult<Self::Value>;

    /// Computes `a * a`.
    fn square(a: Self::Value) -> EvalResult<Self::Value> {
        Self::multiply(a.clone(), a)
    }

    /// Sets bit `b` of `a`.
    fn set_bit(_a: Self::Value, _b: Self::Value) -> EvalResult<Self::Value> {
        Err(unsupported("set"))
    }

    /// Clears bit `b` of `a`.
    fn clear_bit(_a: Self::Value, _b: Self::Value) -> EvalResult<Self::Value> {
        Err(unsupported("clear"))
    }

    /// Counts whether `a` is non-zero: `1` for any non-zero value, else `0`.
    fn count(_a: Self::Value) -> EvalResult<Self::Value> {
        Err(unsupported("count"))
    }

    /// Computes `10` raised to `a`.
    fn pow10(_a: Self::Value) -> EvalResult<Self::Value> {
        Err(unsupported("pow10"))
    }

    /// Computes the floor of the base-10 logarithm of `a`.
    fn log10(_a: Self::Value) -> EvalResult<Self::Value> {
        Err(unsupported("log10"))
    }
}

fn unsupported(operation: &str) -> EvalError {
    EvalError::IllegalOperand { details: format!("operation '{operation}' is not supported in this domain"), }
}

/// Evaluates an expression tree at the point `(x, y, z)`.
///
/// The coordinates are converted into the domain once, up front, and the
/// tree is walked bottom-up. The first failing operation aborts the walk.
///
/// # Parameters
/// - `expression`: The tree to evaluate.
/// - `x`, `y`, `z`: Values for the three variables.
///
/// # Returns
/// The value of the expression in the domain `E`.
///
/// # Example
/// ```
/// use trigrid::{
///     eval::{CheckedIntEvaluator, evaluate},
///     parser::{INTEGER_OPERATORS, Parser},
/// };
///
/// let tree = Parser::<CheckedIntEvaluator>::new("x*y+z", &INTEGER_OPERATORS).parse()
///                                                                           .unwrap();
/// assert_eq!(evaluate::<CheckedIntEvaluator>(&tree, 2, 3, 4).unwrap(), 10);
/// ```
pub fn evaluate<E: Evaluator>(expression: &Expr<E::Value>,
                              x: i32,
                              y: i32,
                              z: i32)
                              -> EvalResult<E::Value> {
    evaluate_at::<E>(expression, &E::from_int(x), &E::from_int(y), &E::from_int(z))
}

fn evaluate_at<E: Evaluator>(expression: &Expr<E::Value>,
                             x: &E::Value,
                             y: &E::Value,
                             z: &E::Value)
                             -> EvalResult<E::Value> {
    use crate::ast::{BinaryOp, UnaryOp};

    match expression {
        Expr::Const(value) => Ok(value.clone()),

        Expr::Variable(axis) => Ok(match axis {
                                       Axis::X => x.clone(),
                                       Axis::Y => y.clone(),
                                       Axis::Z => z.clone(),
                                   }),

        Expr::Unary { op, operand } => {
            let operand = evaluate_at::<E>(operand, x, y, z)?;
            match op {
                UnaryOp::Negate => E::negate(operand),
                UnaryOp::Count => E::count(operand),
                UnaryOp::Pow10 => E::pow10(operand),
                UnaryOp::Log10 => E::log10(operand),
                UnaryOp::Abs => E::abs(operand),
                UnaryOp::Square => E::square(operand),
            }
        },

        Expr::Binary { op, left, right } => {
            let left = evaluate_at::<E>(left, x, y, z)?;
            let right = evaluate_at::<E>(right, x, y, z)?;
            match op {
                BinaryOp::Add => E::add(left, right),
                BinaryOp::Subtract => E::subtract(left, right),
                BinaryOp::Multiply => E::multiply(left, right),
                BinaryOp::Divide => E::divide(left, right),
                BinaryOp::Mod => E::modulo(left, right),
                BinaryOp::Set => E::set_bit(left, right),
                BinaryOp::Clear => E::clear_bit(left, right),
            }
        },
    }
}
