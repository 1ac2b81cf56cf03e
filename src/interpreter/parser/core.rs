use crate::{
    error::{EvalResult, ParseError},
    interpreter::{
        parser::{binary::parse_additive, stream::TokenStream},
        value::Number,
    },
};

/// Deepest parenthesis nesting the parser accepts.
///
/// Every level costs a few stack frames of recursion; the cap keeps
/// pathological input such as ten thousand `(` from overflowing the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level and recursively descends through the precedence
/// hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the expression.
/// - `depth`: Number of enclosing parentheses.
///
/// # Returns
/// The value of the expression.
pub fn parse_expression(tokens: &mut TokenStream<'_>, depth: usize) -> EvalResult<Number> {
    parse_additive(tokens, depth)
}

/// Parses and evaluates a complete token stream.
///
/// After the top-level expression every token must have been consumed. A
/// leftover token, most often an unmatched `)`, is reported as
/// `ParseError::TrailingInput`.
///
/// # Errors
/// Returns a `ParseError` for malformed input and an `EvaluationError` for
/// division by zero.
///
/// # Example
/// ```
/// use arith_eval::{EvalFailure, Number, ParseError, TokenStream, parse, tokenize};
///
/// let tokens = tokenize("2 * (3 + 4)").unwrap();
/// let value = parse(TokenStream::new(tokens, "2 * (3 + 4)")).unwrap();
/// assert_eq!(value, Number::Integer(14));
///
/// let tokens = tokenize("1)").unwrap();
/// let failure = parse(TokenStream::new(tokens, "1)")).unwrap_err();
/// assert!(matches!(failure,
///                  EvalFailure::Parse(ParseError::TrailingInput { position: 1, .. })));
/// ```
pub fn parse(mut tokens: TokenStream<'_>) -> EvalResult<Number> {
    let value = parse_expression(&mut tokens, 0)?;

    if let Some((token, position)) = tokens.peek() {
        let token = tokens.source_text(token, position);
        return Err(ParseError::TrailingInput { token, position }.into());
    }

    Ok(value)
}
