use crate::{
    error::{EvalResult, ParseError},
    interpreter::{
        lexer::Token,
        parser::{
            core::{MAX_NESTING_DEPTH, parse_expression},
            stream::TokenStream,
        },
        value::Number,
    },
};

/// Parses a primary expression: a number or a parenthesized expression.
///
/// This is where adjacent operators and missing operands are caught. An
/// operator or `)` in operand position is an unexpected token; running out of
/// tokens is an unexpected end of input.
///
/// Grammar: `primary := Number | "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of an operand.
/// - `depth`: Number of enclosing parentheses.
///
/// # Returns
/// The value of the operand.
pub(crate) fn parse_primary(tokens: &mut TokenStream<'_>, depth: usize) -> EvalResult<Number> {
    match tokens.expect_any()? {
        (Token::Number(n), _) => Ok(n),
        (Token::LParen, position) => parse_grouping(tokens, depth, position),
        (token, position) => {
            let token = tokens.source_text(token, position);
            Err(ParseError::UnexpectedToken { token, position }.into())
        },
    }
}

/// Parses the body of a parenthesized expression.
///
/// Expected form `( expression )`, with the opening parenthesis already
/// consumed. An unmatched `(` shows up as an unexpected end of input when the
/// stream runs out before the `)`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after `(`.
/// - `depth`: Nesting depth outside this group.
/// - `open`: Position of the `(`.
///
/// # Returns
/// The value of the enclosed expression.
fn parse_grouping(tokens: &mut TokenStream<'_>, depth: usize, open: usize) -> EvalResult<Number> {
    let depth = depth + 1;
    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { position: open }.into());
    }

    let value = parse_expression(tokens, depth)?;
    match tokens.expect_any()? {
        (Token::RParen, _) => Ok(value),
        (token, position) => {
            let token = tokens.source_text(token, position);
            Err(ParseError::UnexpectedToken { token, position }.into())
        },
    }
}
