use crate::{
    error::EvalError,
    eval::core::{EvalResult, Evaluator},
};

/// Wrapping 64-bit integer arithmetic.
///
/// Same rules as the wrapping 32-bit domain, over the `i64` range: results
/// wrap, and only division by zero fails. Constants still have to fit `i64`
/// to parse.
pub struct LongEvaluator;

impl Evaluator for LongEvaluator {
    type Value = i64;

    fn from_int(value: i32) -> i64 {
        i64::from(value)
    }

    fn from_text(text: &str) -> Option<i64> {
        text.parse().ok()
    }

    fn negate(a: i64) -> EvalResult<i64> {
        Ok(a.wrapping_neg())
    }

    fn add(a: i64, b: i64) -> EvalResult<i64> {
        Ok(a.wrapping_add(b))
    }

    fn subtract(a: i64, b: i64) -> EvalResult<i64> {
        Ok(a.wrapping_sub(b))
    }

    fn multiply(a: i64, b: i64) -> EvalResult<i64> {
        Ok(a.wrapping_mul(b))
    }

    fn divide(a: i64, b: i64) -> EvalResult<i64> {
        if b == 0 {
            return Err(EvalError::DivisionByZero);
        }
        Ok(a.wrapping_div(b))
    }

    fn modulo(a: i64, b: i64) -> EvalResult<i64> {
        if b == 0 {
            return Err(EvalError::DivisionByZero);
        }
        Ok(a.wrapping_rem(b))
    }

    fn abs(a: i64) -> EvalResult<i64> {
        Ok(a.wrapping_abs())
    }
}
