//! # arith-eval
//!
//! arith-eval evaluates arithmetic expressions written as text. It supports
//! the four operators `+ - * /`, decimal numbers and parentheses, with the
//! usual precedence and left associativity.
//!
//! Expressions are tokenized and then evaluated by a recursive-descent parser
//! that applies each operator as soon as its operands are known. Integer
//! arithmetic stays exact where `i64` allows it; division always produces a
//! real.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines one error enum per phase plus [`EvalFailure`], the
/// union returned by [`evaluate`]. Lex and parse errors carry the character
/// position of the problem.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and human-readable messages.
/// - Converts each phase error into [`EvalFailure`] so `?` composes.
pub mod error;
/// Tokenizes, parses and evaluates expressions.
///
/// This module ties together lexing, parsing, the numeric representation and
/// the arithmetic primitives.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of values and errors between phases.
pub mod interpreter;

pub use error::{EvalFailure, EvalResult, EvaluationError, LexError, ParseError};
pub use interpreter::{
    evaluator::{add, divide, multiply, subtract},
    lexer::{Token, tokenize},
    parser::{MAX_NESTING_DEPTH, TokenStream, parse},
    value::Number,
};

/// Evaluates an arithmetic expression.
///
/// Empty or all-whitespace input is rejected before tokenizing. Otherwise the
/// whole input is tokenized first, so a lexical error anywhere wins over any
/// parse or evaluation error, and the tokens are then parsed and evaluated
/// together. The first error ends the evaluation and no partial result is
/// returned.
///
/// # Errors
/// - [`EvalFailure::Lex`] for characters outside the expression alphabet and
///   malformed numbers.
/// - [`EvalFailure::Parse`] for input that does not match the grammar.
/// - [`EvalFailure::Evaluation`] for division by zero.
///
/// # Examples
/// ```
/// use arith_eval::{EvalFailure, LexError, Number, ParseError, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(Number::Integer(14)));
/// assert_eq!(evaluate("(2 + 3) * 4"), Ok(Number::Integer(20)));
/// assert_eq!(evaluate("5 / 2"), Ok(Number::Real(2.5)));
///
/// assert_eq!(evaluate("  "), Err(EvalFailure::Parse(ParseError::EmptyExpression)));
/// assert_eq!(evaluate("2 + a"),
///            Err(EvalFailure::Lex(LexError::InvalidCharacter { character: 'a',
///                                                              position:  4, })));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<Number> {
    let result = evaluate_inner(expression);
    match &result {
        Ok(value) => debug!(expression, %value, "evaluated expression"),
        Err(error) => debug!(expression, %error, "expression rejected"),
    }
    result
}

fn evaluate_inner(expression: &str) -> EvalResult<Number> {
    if expression.trim().is_empty() {
        return Err(ParseError::EmptyExpression.into());
    }

    let tokens = tokenize(expression)?;
    debug!(tokens = tokens.len(), "tokenized expression");

    parse(TokenStream::new(tokens, expression))
}
