use crate::eval::core::{EvalResult, Evaluator};

/// IEEE 754 double-precision arithmetic.
///
/// Nothing is checked and nothing fails: division by zero yields an
/// infinity or NaN, overflow saturates to an infinity, and `modulo` is the
/// sign-of-dividend floating-point remainder. Whatever IEEE says, the cell
/// gets.
pub struct DoubleEvaluator;

impl Evaluator for DoubleEvaluator {
    type Value = f64;

    fn from_int(value: i32) -> f64 {
        f64::from(value)
    }

    fn from_text(text: &str) -> Option<f64> {
        text.parse().ok()
    }

    fn negate(a: f64) -> EvalResult<f64> {
        Ok(-a)
    }

    fn add(a: f64, b: f64) -> EvalResult<f64> {
        Ok(a + b)
    }

    fn subtract(a: f64, b: f64) -> EvalResult<f64> {
        Ok(a - b)
    }

    fn multiply(a: f64, b: f64) -> EvalResult<f64> {
        Ok(a * b)
    }

    fn divide(a: f64, b: f64) -> EvalResult<f64> {
        Ok(a / b)
    }

    fn modulo(a: f64, b: f64) -> EvalResult<f64> {
        Ok(a % b)
    }

    fn abs(a: f64) -> EvalResult<f64> {
        Ok(a.abs())
    }
}
