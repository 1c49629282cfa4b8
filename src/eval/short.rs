use crate::{
    error::EvalError,
    eval::core::{EvalResult, Evaluator},
};

/// Truncating 16-bit integer arithmetic.
///
/// Operands are widened to `i32`, the operation runs there, and the result
/// is truncated back to the low 16 bits. Two `i16` operands can never
/// overflow an `i32` operation, so apart from division by zero every
/// operation succeeds; it just wraps through the truncation. Coordinates are
/// truncated the same way on entry, while constants have to fit `i16` to
/// parse.
pub struct ShortEvaluator;

impl Evaluator for ShortEvaluator {
    type Value = i16;

    fn from_int(value: i32) -> i16 {
        narrow(value)
    }

    fn from_text(text: &str) -> Option<i16> {
        text.parse().ok()
    }

    fn negate(a: i16) -> EvalResult<i16> {
        Ok(narrow(-i32::from(a)))
    }

    fn add(a: i16, b: i16) -> EvalResult<i16> {
        Ok(narrow(i32::from(a) + i32::from(b)))
    }

    fn subtract(a: i16, b: i16) -> EvalResult<i16> {
        Ok(narrow(i32::from(a) - i32::from(b)))
    }

    fn multiply(a: i16, b: i16) -> EvalResult<i16> {
        Ok(narrow(i32::from(a) * i32::from(b)))
    }

    fn divide(a: i16, b: i16) -> EvalResult<i16> {
        if b == 0 {
            return Err(EvalError::DivisionByZero);
        }
        Ok(narrow(i32::from(a) / i32::from(b)))
    }

    fn modulo(a: i16, b: i16) -> EvalResult<i16> {
        if b == 0 {
            return Err(EvalError::DivisionByZero);
        }
        Ok(narrow(i32::from(a) % i32::from(b)))
    }

    fn abs(a: i16) -> EvalResult<i16> {
        Ok(narrow(i32::from(a).abs()))
    }
}

// Truncation to the low 16 bits is the domain's defining behavior.
#[allow(clippy::cast_possible_truncation)]
fn narrow(value: i32) -> i16 {
    value as i16
}
