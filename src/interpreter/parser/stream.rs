use crate::{error::ParseError, interpreter::lexer::Token};

/// An ordered sequence of positioned tokens plus a read cursor.
///
/// The stream is owned by a single parse. Reads past the last token return
/// `None`, and [`TokenStream::end_position`] tells the rules where the input
/// ended so they can report it. The source text is kept so errors can quote
/// a token the way it was written.
#[derive(Debug, Clone)]
pub struct TokenStream<'src> {
    source:       &'src str,
    tokens:       Vec<(Token, usize)>,
    cursor:       usize,
    end_position: usize,
}

impl<'src> TokenStream<'src> {
    /// Creates a stream over `tokens`, which were lexed from `source`.
    #[must_use]
    pub fn new(tokens: Vec<(Token, usize)>, source: &'src str) -> Self {
        Self { source,
               tokens,
               cursor: 0,
               end_position: source.chars().count() }
    }

    /// Returns the next token and its position without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<(Token, usize)> {
        self.tokens.get(self.cursor).copied()
    }

    /// Character length of the input the tokens came from.
    #[must_use]
    pub const fn end_position(&self) -> usize {
        self.end_position
    }

    /// Returns `token` as it appears in the source at `position`.
    ///
    /// Numbers are quoted from the source, so `5.` stays `5.` instead of the
    /// normalized `5.0`. Other tokens are a single fixed character.
    #[must_use]
    pub fn source_text(&self, token: Token, position: usize) -> String {
        let literal: String = self.source
                                  .chars()
                                  .skip(position)
                                  .take_while(|c| c.is_ascii_digit() || *c == '.')
                                  .collect();
        match token {
            Token::Number(_) if !literal.is_empty() => literal,
            _ => token.to_string(),
        }
    }

    /// Consumes the next token, or reports the end of input.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedEndOfInput` when no token is left.
    pub fn expect_any(&mut self) -> Result<(Token, usize), ParseError> {
        self.next()
            .ok_or(ParseError::UnexpectedEndOfInput { position: self.end_position })
    }
}

impl Iterator for TokenStream<'_> {
    type Item = (Token, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.peek()?;
        self.cursor += 1;
        Some(item)
    }
}
