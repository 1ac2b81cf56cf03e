use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum LexError {
    /// Found a character that is not a digit, `.`, operator, parenthesis or
    /// whitespace.
    #[error("Invalid character '{character}' at position {position}.")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// Character offset of the rejected character.
        position:  usize,
    },
    /// A number literal contained more than one decimal point.
    #[error("Extra decimal point in number '{literal}' at position {position}.")]
    ExtraDecimalPoint {
        /// The full run of digits and points.
        literal:  String,
        /// Character offset of the second `.`.
        position: usize,
    },
    /// A number literal had no digits or did not fit a finite real.
    #[error("Invalid number '{literal}' at position {position}.")]
    InvalidNumber {
        /// The rejected literal.
        literal:  String,
        /// Character offset where the literal starts.
        position: usize,
    },
}

impl LexError {
    /// Returns the character offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. }
            | Self::ExtraDecimalPoint { position, .. }
            | Self::InvalidNumber { position, .. } => *position,
        }
    }

    /// Returns the offending character.
    ///
    /// For `ExtraDecimalPoint` this is the surplus `.`; for `InvalidNumber`
    /// it is the first character of the literal.
    #[must_use]
    pub fn character(&self) -> char {
        match self {
            Self::InvalidCharacter { character, .. } => *character,
            Self::ExtraDecimalPoint { .. } => '.',
            Self::InvalidNumber { literal, .. } => {
                literal.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER)
            },
        }
    }
}
