use thiserror::Error;

/// Evaluation errors.
///
/// Errors raised while applying an operator to two valid operands. The only
/// undefined result in four-function arithmetic is division by zero.
pub mod evaluation_error;
/// Lexing errors.
///
/// Defines the errors the tokenizer raises for characters outside the
/// expression alphabet and for malformed number literals. Every variant
/// carries the character position of the problem.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all errors raised for a token sequence that does not match the
/// grammar: empty input, misplaced tokens, missing operands, unmatched
/// parentheses and excessive nesting.
pub mod parse_error;

pub use evaluation_error::EvaluationError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Result type returned by [`crate::evaluate`] and the parser rules.
pub type EvalResult<T> = Result<T, EvalFailure>;

/// Any failure of a single evaluation.
///
/// The three phases fail independently; `From` conversions let each phase
/// propagate its own error with `?`.
///
/// # Example
/// ```
/// use arith_eval::{EvalFailure, EvaluationError, evaluate};
///
/// let failure = evaluate("5 / 0").unwrap_err();
/// assert_eq!(failure, EvalFailure::Evaluation(EvaluationError::DivisionByZero));
/// assert_eq!(failure.to_string(), "Division by zero.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalFailure {
    /// The input contained a character or literal the lexer rejects.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens did not form a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression was well formed but its value is undefined.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl EvalFailure {
    /// Returns the character position the failure points at, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Parse(e) => e.position(),
            Self::Evaluation(_) => None,
        }
    }
}
