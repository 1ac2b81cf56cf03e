/// Binary operator dispatch.
///
/// Maps each operator to the scalar primitive that implements it.
pub mod binary;

/// Scalar arithmetic primitives.
///
/// Implements `add`, `subtract`, `multiply` and `divide` over [`Number`],
/// including integer exactness, overflow promotion and the zero-divisor check.
///
/// [`Number`]: crate::interpreter::value::Number
pub mod scalar;

pub use binary::BinaryOperator;
pub use scalar::{add, divide, multiply, subtract};
