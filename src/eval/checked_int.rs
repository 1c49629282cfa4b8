use crate::{
    error::EvalError,
    eval::core::{EvalResult, Evaluator},
};

/// Checked 32-bit integer arithmetic.
///
/// Any operation whose mathematical result leaves the `i32` range fails with
/// [`EvalError::Overflow`]. The one deliberate exception is `modulo`: the
/// remainder of `i32::MIN` by `-1` is taken to be `0` rather than an
/// overflow, because the remainder itself is representable.
///
/// This is the only domain where `set`, `clear`, `count`, `pow10` and
/// `log10` are defined.
pub struct CheckedIntEvaluator;

impl Evaluator for CheckedIntEvaluator {
    type Value = i32;

    fn from_int(value: i32) -> i32 {
        value
    }

    fn from_text(text: &str) -> Option<i32> {
        text.parse().ok()
    }

    fn negate(a: i32) -> EvalResult<i32> {
        a.checked_neg().ok_or(EvalError::Overflow)
    }

    fn add(a: i32, b: i32) -> EvalResult<i32> {
        a.checked_add(b).ok_or(EvalError::Overflow)
    }

    fn subtract(a: i32, b: i32) -> EvalResult<i32> {
        a.checked_sub(b).ok_or(EvalError::Overflow)
    }

    fn multiply(a: i32, b: i32) -> EvalResult<i32> {
        a.checked_mul(b).ok_or(EvalError::Overflow)
    }

    fn divide(a: i32, b: i32) -> EvalResult<i32> {
        if b == 0 {
            return Err(EvalError::DivisionByZero);
        }
        // checked_div still fails for i32::MIN / -1.
        a.checked_div(b).ok_or(EvalError::Overflow)
    }

    fn modulo(a: i32, b: i32) -> EvalResult<i32> {
        if b == 0 {
            return Err(EvalError::DivisionByZero);
        }
        // i32::MIN % -1 is 0; wrapping_rem avoids the overflow panic.
        Ok(a.wrapping_rem(b))
    }

    fn abs(a: i32) -> EvalResult<i32> {
        a.checked_abs().ok_or(EvalError::Overflow)
    }

    fn set_bit(a: i32, b: i32) -> EvalResult<i32> {
        Ok(a | bit_mask(b))
    }

    fn clear_bit(a: i32, b: i32) -> EvalResult<i32> {
        Ok(a & !bit_mask(b))
    }

    fn count(a: i32) -> EvalResult<i32> {
        Ok(i32::from(a != 0))
    }

    fn pow10(a: i32) -> EvalResult<i32> {
        let Ok(power) = u32::try_from(a) else {
            return Err(EvalError::IllegalOperand { details: format!("negative power: {a}"), });
        };
        if power > 9 {
            return Err(EvalError::Overflow);
        }
        Ok(10_i32.pow(power))
    }

    fn log10(a: i32) -> EvalResult<i32> {
        if a <= 0 {
            return Err(EvalError::IllegalOperand { details:
                                                       format!("non-positive operand for log10: {a}"), });
        }
        let mut power = 1;
        let mut result = 0;
        while power <= a / 10 {
            power *= 10;
            result += 1;
        }
        Ok(result)
    }
}

// Only the low five bits of the shift count matter.
#[allow(clippy::cast_sign_loss)]
fn bit_mask(position: i32) -> i32 {
    1_i32.wrapping_shl(position as u32)
}
