/// Core evaluation logic.
///
/// Defines the [`Evaluator`] trait every numeric domain implements, and the
/// tree walk that evaluates an expression at a point.
pub mod core;

/// Checked 32-bit integers.
pub mod checked_int;

/// Wrapping 32-bit integers.
pub mod wrapping_int;

/// Wrapping 64-bit integers.
pub mod long;

/// Truncating 16-bit integers.
pub mod short;

/// IEEE 754 double precision.
pub mod double;

/// Arbitrary-precision integers.
pub mod big_int;

pub use big_int::BigIntEvaluator;
pub use checked_int::CheckedIntEvaluator;
pub use self::core::{EvalResult, Evaluator, evaluate};
pub use double::DoubleEvaluator;
pub use long::LongEvaluator;
pub use short::ShortEvaluator;
pub use wrapping_int::WrappingIntEvaluator;
