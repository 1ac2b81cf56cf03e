use tracing::trace;

use crate::{
    error::EvalResult,
    interpreter::{
        evaluator::BinaryOperator,
        lexer::Token,
        parser::{primary::parse_primary, stream::TokenStream},
        value::Number,
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. Each operator is
/// applied as soon as its right operand has been parsed, so `8 - 3 - 2`
/// evaluates as `(8 - 3) - 2`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `depth`: Number of enclosing parentheses.
///
/// # Returns
/// The accumulated value.
pub fn parse_additive(tokens: &mut TokenStream<'_>, depth: usize) -> EvalResult<Number> {
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            left = apply(op, left, right)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`. Division by zero is
/// detected here, when the operator is applied, not by scanning the text.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `depth`: Number of enclosing parentheses.
///
/// # Returns
/// The accumulated value.
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>, depth: usize) -> EvalResult<Number> {
    let mut left = parse_primary(tokens, depth)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_primary(tokens, depth)?;
            left = apply(op, left, right)?;
            continue;
        }
        break;
    }
    Ok(left)
}

fn apply(op: BinaryOperator, left: Number, right: Number) -> EvalResult<Number> {
    let value = op.apply(left, right)?;
    trace!(%left, %op, %right, %value, "applied operator");
    Ok(value)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for numbers and parentheses.
///
/// # Example
/// ```
/// use arith_eval::interpreter::{
///     evaluator::BinaryOperator, lexer::Token, parser::binary::token_to_binary_operator,
/// };
///
/// assert_eq!(token_to_binary_operator(Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Number(_) | Token::LParen | Token::RParen => None,
    }
}
