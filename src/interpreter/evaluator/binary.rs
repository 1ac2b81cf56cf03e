use std::fmt::Display;

use crate::{
    error::EvaluationError,
    interpreter::{
        evaluator::scalar::{add, divide, multiply, subtract},
        value::Number,
    },
};

/// The four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Evaluates `left op right`.
    ///
    /// The parser routes every operator through here, so expression results
    /// always agree with the primitive functions.
    ///
    /// # Errors
    /// Returns `EvaluationError::DivisionByZero` for `Div` with a zero right
    /// operand.
    ///
    /// # Example
    /// ```
    /// use arith_eval::{Number, interpreter::evaluator::BinaryOperator};
    ///
    /// let result = BinaryOperator::Mul.apply(Number::Integer(3), Number::Integer(4));
    /// assert_eq!(result, Ok(Number::Integer(12)));
    /// ```
    pub fn apply(self, left: Number, right: Number) -> Result<Number, EvaluationError> {
        match self {
            Self::Add => Ok(add(left, right)),
            Self::Sub => Ok(subtract(left, right)),
            Self::Mul => Ok(multiply(left, right)),
            Self::Div => divide(left, right),
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}
