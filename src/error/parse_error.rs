use thiserror::Error;

use crate::interpreter::parser::MAX_NESTING_DEPTH;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    #[error("Empty expression.")]
    EmptyExpression,
    /// Found a token where the grammar does not allow one, such as an
    /// operator where an operand belongs.
    #[error("Unexpected token '{token}' at position {position}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Character offset of the token.
        position: usize,
    },
    /// Reached the end of input while an operand or `)` was still expected.
    #[error("Unexpected end of input at position {position}.")]
    UnexpectedEndOfInput {
        /// Character length of the input.
        position: usize,
    },
    /// Found extra tokens after a complete expression, typically an
    /// unmatched `)`.
    #[error("Unexpected trailing input '{token}' at position {position}.")]
    TrailingInput {
        /// The first unconsumed token.
        token:    String,
        /// Character offset of that token.
        position: usize,
    },
    /// Parentheses were nested deeper than the parser allows.
    #[error("Parentheses nested deeper than {max} levels at position {position}.",
            max = MAX_NESTING_DEPTH)]
    NestingTooDeep {
        /// Character offset of the `(` that crossed the limit.
        position: usize,
    },
}

impl ParseError {
    /// Returns the character offset the error points at.
    ///
    /// `EmptyExpression` has no meaningful position and returns `None`.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyExpression => None,
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::TrailingInput { position, .. }
            | Self::NestingTooDeep { position } => Some(*position),
        }
    }
}
