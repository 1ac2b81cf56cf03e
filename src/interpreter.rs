/// The evaluator module applies arithmetic operators to numbers.
///
/// The parser calls into the evaluator as soon as both operands of an operator
/// are known, so there is no separate tree-walking pass.
///
/// # Responsibilities
/// - Implements the primitive operations `add`, `subtract`, `multiply` and
///   `divide`.
/// - Keeps integer arithmetic exact where `i64` allows it and promotes to real
///   otherwise.
/// - Reports division by zero at the moment the operator is applied.
pub mod evaluator;
/// The lexer module tokenizes expression text for the parser.
///
/// The lexer reads the raw input and produces a flat sequence of tokens, each
/// paired with the character position where it starts.
///
/// # Responsibilities
/// - Recognizes numbers, the four operators and parentheses.
/// - Skips whitespace.
/// - Reports invalid characters and malformed number literals with their
///   position.
pub mod lexer;
/// The parser module evaluates a token sequence by recursive descent.
///
/// Each grammar rule is a function; precedence falls out of which rule calls
/// which. Structural problems such as unbalanced parentheses, adjacent
/// operators and missing operands surface as parse errors while descending.
///
/// # Responsibilities
/// - Walks the token stream with a single cursor and never reads past its end.
/// - Applies operators left to right within a precedence level.
/// - Rejects trailing tokens after a complete expression.
pub mod parser;
/// The value module defines the numeric representation used everywhere.
pub mod value;
