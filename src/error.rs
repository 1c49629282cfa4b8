/// Parsing errors.
///
/// Defines all error types that can occur while turning expression text into
/// a syntax tree. Every parse error carries the exact one-based character
/// position it refers to.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while computing the value of
/// a parsed expression: division by zero, domain overflow, and operands
/// outside an operation's domain.
pub mod eval_error;
/// Tabulation errors.
///
/// Error types that stop a tabulation before any cell is computed: an
/// unsupported mode name or an expression that fails to parse.
pub mod tabulate_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
pub use tabulate_error::TabulateError;
