use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};

use crate::{
    error::EvalError,
    eval::core::{EvalResult, Evaluator},
};

/// Arbitrary-precision integer arithmetic.
///
/// Values never overflow and constants of any length parse. Division
/// truncates toward zero like the fixed-width domains, but `modulo` is a
/// true mathematical modulus: defined only for a positive modulus, with a
/// result in `[0, b)` whatever the sign of `a`.
pub struct BigIntEvaluator;

impl Evaluator for BigIntEvaluator {
    type Value = BigInt;

    fn from_int(value: i32) -> BigInt {
        BigInt::from(value)
    }

    fn from_text(text: &str) -> Option<BigInt> {
        text.parse().ok()
    }

    fn negate(a: BigInt) -> EvalResult<BigInt> {
        Ok(-a)
    }

    fn add(a: BigInt, b: BigInt) -> EvalResult<BigInt> {
        Ok(a + b)
    }

    fn subtract(a: BigInt, b: BigInt) -> EvalResult<BigInt> {
        Ok(a - b)
    }

    fn multiply(a: BigInt, b: BigInt) -> EvalResult<BigInt> {
        Ok(a * b)
    }

    fn divide(a: BigInt, b: BigInt) -> EvalResult<BigInt> {
        if b.is_zero() {
            return Err(EvalError::DivisionByZero);
        }
        Ok(a / b)
    }

    fn modulo(a: BigInt, b: BigInt) -> EvalResult<BigInt> {
        match b.sign() {
            Sign::NoSign => Err(EvalError::DivisionByZero),
            Sign::Minus => Err(EvalError::IllegalOperand { details: format!("negative modulus: {b}"), }),
            Sign::Plus => Ok(((a % &b) + &b) % &b),
        }
    }

    fn abs(a: BigInt) -> EvalResult<BigInt> {
        Ok(a.abs())
    }
}
