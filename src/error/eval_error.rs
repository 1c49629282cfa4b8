#[derive(Debug)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Evaluation errors describe the values involved, not source positions: by
/// the time evaluation runs, the expression has already parsed cleanly.
pub enum EvalError {
    /// Attempted division (or modulo) by zero.
    DivisionByZero,
    /// The result does not fit the numeric domain being evaluated in.
    Overflow,
    /// An operand is outside the domain an operation is defined for.
    IllegalOperand {
        /// Details about the offending operand.
        details: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => write!(f, "Overflow while trying to compute result."),
            Self::IllegalOperand { details } => write!(f, "Illegal operand: {details}."),
        }
    }
}

impl std::error::Error for EvalError {}
