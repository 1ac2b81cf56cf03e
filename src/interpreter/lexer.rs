use std::fmt::Display;

use logos::Logos;
use tracing::trace;

use crate::{error::LexError, interpreter::value::Number};

/// Represents a lexical token in an arithmetic expression.
///
/// A token is the smallest meaningful unit of the input: a number, one of the
/// four operators, or a parenthesis. Whitespace between tokens is skipped.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `5.`.
    ///
    /// The pattern takes the maximal run of digits and points; the callback
    /// rejects runs with more than one point or no digits.
    #[regex(r"[0-9.]+", parse_number)]
    Number(Number),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Failure reported by the generated lexer before a position is attached.
///
/// Logos builds the default variant for input that matches no token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character no token starts with.
    #[default]
    InvalidCharacter,
    /// Byte offset of the surplus `.` inside the literal.
    ExtraDecimalPoint { offset: usize },
    /// A literal with no digits, or one too large to be finite.
    InvalidNumber,
}

impl LexErrorKind {
    fn into_error(self, slice: &str, position: usize) -> LexError {
        match self {
            Self::InvalidCharacter => {
                let character = slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                LexError::InvalidCharacter { character, position }
            },
            // Number literals are ASCII, so the byte offset is a char offset.
            Self::ExtraDecimalPoint { offset } => {
                LexError::ExtraDecimalPoint { literal:  slice.to_string(),
                                              position: position + offset, }
            },
            Self::InvalidNumber => LexError::InvalidNumber { literal: slice.to_string(),
                                                             position },
        }
    }
}

/// Parses a run of digits and decimal points into a [`Number`].
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(Number::Integer)` for a point-free literal that fits in `i64`.
/// - `Ok(Number::Real)` for any other finite literal.
/// - `Err(LexErrorKind)` for a second point, no digits, or a non-finite value.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<Number, LexErrorKind> {
    let slice = lex.slice();

    if let Some((offset, _)) = slice.match_indices('.').nth(1) {
        return Err(LexErrorKind::ExtraDecimalPoint { offset });
    }
    if !slice.bytes().any(|b| b.is_ascii_digit()) {
        return Err(LexErrorKind::InvalidNumber);
    }

    if !slice.contains('.')
       && let Ok(n) = slice.parse::<i64>()
    {
        return Ok(Number::Integer(n));
    }

    match slice.parse::<f64>() {
        Ok(r) if r.is_finite() => Ok(Number::Real(r)),
        _ => Err(LexErrorKind::InvalidNumber),
    }
}

/// Converts byte offsets reported by the lexer into character offsets.
///
/// Offsets must be requested in increasing order; each call only counts the
/// characters since the previous one.
#[derive(Default)]
struct CharCursor {
    byte:  usize,
    chars: usize,
}

impl CharCursor {
    fn advance_to(&mut self, source: &str, byte: usize) -> usize {
        self.chars += source[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

/// Splits an expression into tokens paired with their character positions.
///
/// # Errors
/// Returns a [`LexError`] for the first character outside the expression
/// alphabet, or for the first malformed number literal.
///
/// # Example
/// ```
/// use arith_eval::{Number, Token, tokenize};
///
/// let tokens = tokenize("(1 + 2.5)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::LParen, 0),
///                 (Token::Number(Number::Integer(1)), 1),
///                 (Token::Plus, 3),
///                 (Token::Number(Number::Real(2.5)), 5),
///                 (Token::RParen, 8)]);
///
/// assert!(tokenize("1.2.3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut cursor = CharCursor::default();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let position = cursor.advance_to(source, lexer.span().start);
        match result {
            Ok(token) => {
                trace!(%token, position, "lexed token");
                tokens.push((token, position));
            },
            Err(kind) => return Err(kind.into_error(lexer.slice(), position)),
        }
    }

    Ok(tokens)
}
