use crate::{error::EvaluationError, interpreter::value::Number};

/// Applies an integer operation when both operands are integers and the
/// result fits in `i64`; otherwise applies the real operation to both operands
/// promoted to `f64`.
fn exact_or_real(left: Number,
                 right: Number,
                 exact: fn(i64, i64) -> Option<i64>,
                 real: fn(f64, f64) -> f64)
                 -> Number {
    if let (Number::Integer(a), Number::Integer(b)) = (left, right)
       && let Some(n) = exact(a, b)
    {
        return Number::Integer(n);
    }
    Number::Real(real(left.as_real(), right.as_real()))
}

/// Adds two numbers.
///
/// # Example
/// ```
/// use arith_eval::{Number, add};
///
/// assert_eq!(add(2.into(), 3.into()), Number::Integer(5));
/// assert_eq!(add(0.5.into(), 2.into()), Number::Real(2.5));
/// // Overflow leaves integer arithmetic instead of wrapping.
/// assert!(add(i64::MAX.into(), 1.into()).is_real());
/// ```
#[must_use]
pub fn add(left: Number, right: Number) -> Number {
    exact_or_real(left, right, i64::checked_add, |a, b| a + b)
}

/// Subtracts `right` from `left`.
///
/// # Example
/// ```
/// use arith_eval::{Number, subtract};
///
/// assert_eq!(subtract(0.into(), 5.into()), Number::Integer(-5));
/// ```
#[must_use]
pub fn subtract(left: Number, right: Number) -> Number {
    exact_or_real(left, right, i64::checked_sub, |a, b| a - b)
}

/// Multiplies two numbers.
///
/// # Example
/// ```
/// use arith_eval::{Number, multiply};
///
/// assert_eq!(multiply((-1).into(), 5.into()), Number::Integer(-5));
/// ```
#[must_use]
pub fn multiply(left: Number, right: Number) -> Number {
    exact_or_real(left, right, i64::checked_mul, |a, b| a * b)
}

/// Divides `left` by `right`.
///
/// Division is true division: the result is always [`Number::Real`], even
/// when both operands are integers and the quotient is whole.
///
/// # Errors
/// Returns `EvaluationError::DivisionByZero` when `right` is zero.
///
/// # Example
/// ```
/// use arith_eval::{EvaluationError, Number, divide};
///
/// assert_eq!(divide(5.into(), 2.into()), Ok(Number::Real(2.5)));
/// assert!(divide(6.into(), 3.into()).unwrap().is_real());
/// assert_eq!(divide(5.into(), 0.into()), Err(EvaluationError::DivisionByZero));
/// ```
pub fn divide(left: Number, right: Number) -> Result<Number, EvaluationError> {
    if right.is_zero() {
        return Err(EvaluationError::DivisionByZero);
    }
    Ok(Number::Real(left.as_real() / right.as_real()))
}
