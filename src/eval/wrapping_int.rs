use crate::{
    error::EvalError,
    eval::core::{EvalResult, Evaluator},
};

/// Wrapping 32-bit integer arithmetic.
///
/// Results wrap around the `i32` range modulo 2^32, so the only failure left
/// is division by zero. Note that `i32::MIN / -1` wraps to `i32::MIN` and
/// `abs(i32::MIN)` stays `i32::MIN`.
pub struct WrappingIntEvaluator;

impl Evaluator for WrappingIntEvaluator {
    type Value = i32;

    fn from_int(value: i32) -> i32 {
        value
    }

    fn from_text(text: &str) -> Option<i32> {
        text.parse().ok()
    }

    fn negate(a: i32) -> EvalResult<i32> {
        Ok(a.wrapping_neg())
    }

    fn add(a: i32, b: i32) -> EvalResult<i32> {
        Ok(a.wrapping_add(b))
    }

    fn subtract(a: i32, b: i32) -> EvalResult<i32> {
        Ok(a.wrapping_sub(b))
    }

    fn multiply(a: i32, b: i32) -> EvalResult<i32> {
        Ok(a.wrapping_mul(b))
    }

    fn divide(a: i32, b: i32) -> EvalResult<i32> {
        if b == 0 {
            return Err(EvalError::DivisionByZero);
        }
        Ok(a.wrapping_div(b))
    }

    fn modulo(a: i32, b: i32) -> EvalResult<i32> {
        if b == 0 {
            return Err(EvalError::DivisionByZero);
        }
        Ok(a.wrapping_rem(b))
    }

    fn abs(a: i32) -> EvalResult<i32> {
        Ok(a.wrapping_abs())
    }
}
