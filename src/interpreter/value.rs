use std::fmt::Display;

/// A numeric result or operand.
///
/// Integer literals and the results of `+`, `-` and `*` on two integers are
/// kept exact as [`Number::Integer`]. Anything that touches a real, overflows
/// `i64`, or passes through `/` becomes a [`Number::Real`].
///
/// Equality is numeric and exact, so `Integer(2)` equals `Real(2.0)` but an
/// integer above `2^53` never equals the nearest real it would round to.
///
/// Reals follow IEEE 754. A literal is always finite, but a product or sum of
/// large reals can reach infinity, and `inf - inf` gives NaN. NaN is unequal to
/// every number, itself included.
///
/// # Example
/// ```
/// use arith_eval::Number;
///
/// assert_eq!(Number::Integer(2), Number::Real(2.0));
/// assert_eq!(Number::from(7).to_string(), "7");
/// assert_eq!(Number::from(2.0).to_string(), "2.0");
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// An exact 64 bit integer.
    Integer(i64),
    /// A double precision floating-point value.
    Real(f64),
}

impl Number {
    /// Returns the value as an `f64`.
    ///
    /// Integers beyond `2^53` round to the nearest representable real, which
    /// is the same rounding true division applies to its operands.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Returns `true` for integer `0` and for both signed real zeros.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }

    #[must_use]
    pub const fn is_real(self) -> bool {
        matches!(self, Self::Real(_))
    }
}

impl PartialEq for Number {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::Integer(n), Self::Real(r)) | (Self::Real(r), Self::Integer(n)) => {
                integer_equals_real(n, r)
            },
        }
    }
}

/// Compares without rounding the integer: the real must be whole, inside the
/// `i64` range, and convert back to exactly `n`.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn integer_equals_real(n: i64, r: f64) -> bool {
    // 2^63, exactly representable as f64.
    const BOUND: f64 = 9_223_372_036_854_775_808.0;

    r.fract() == 0.0 && (-BOUND..BOUND).contains(&r) && r as i64 == n
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the trailing `.0` on integral reals.
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}
