use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Represents all errors that can occur while applying an operator.
pub enum EvaluationError {
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
}
