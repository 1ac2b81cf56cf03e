/// Entry point of the parser.
///
/// Runs the top-level `expression` rule and checks that every token was
/// consumed.
pub mod core;

/// Binary operator rules.
///
/// Parses and immediately evaluates the two left-associative precedence
/// levels: `+`/`-` and `*`/`/`.
pub mod binary;

/// Primary rule.
///
/// Parses number literals and parenthesized sub-expressions.
pub mod primary;

/// The token stream the rules read from.
pub mod stream;

pub use self::core::{MAX_NESTING_DEPTH, parse};
pub use stream::TokenStream;
