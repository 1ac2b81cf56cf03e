use std::fs;

use arith_eval::{
    EvalFailure, EvaluationError, LexError, MAX_NESTING_DEPTH, Number, ParseError, add, divide,
    evaluate, multiply, subtract,
};

fn assert_value(src: &str, expected: Number) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> EvalFailure {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_parse_error(src: &str) -> ParseError {
    match assert_failure(src) {
        EvalFailure::Parse(e) => e,
        other => panic!("Expected a parse error for {src:?}, got {other:?}"),
    }
}

fn assert_lex_error(src: &str) -> LexError {
    match assert_failure(src) {
        EvalFailure::Lex(e) => e,
        other => panic!("Expected a lex error for {src:?}, got {other:?}"),
    }
}

#[test]
fn primitives_match_basic_arithmetic() {
    assert_eq!(add(2.into(), 3.into()), Number::Integer(5));
    assert_eq!(add((-1).into(), 1.into()), Number::Integer(0));
    assert_eq!(add(0.into(), 0.into()), Number::Integer(0));

    assert_eq!(subtract(5.into(), 3.into()), Number::Integer(2));
    assert_eq!(subtract(1.into(), 1.into()), Number::Integer(0));
    assert_eq!(subtract(0.into(), 5.into()), Number::Integer(-5));

    assert_eq!(multiply(2.into(), 3.into()), Number::Integer(6));
    assert_eq!(multiply((-1).into(), 5.into()), Number::Integer(-5));
    assert_eq!(multiply(0.into(), 5.into()), Number::Integer(0));

    assert_eq!(divide(6.into(), 3.into()), Ok(Number::Integer(2)));
    assert_eq!(divide(5.into(), 2.into()), Ok(Number::Real(2.5)));
    assert_eq!(divide((-10).into(), 2.into()), Ok(Number::Integer(-5)));
}

#[test]
fn divide_by_zero_is_error() {
    assert_eq!(divide(5.into(), 0.into()), Err(EvaluationError::DivisionByZero));
    assert_eq!(divide(5.into(), 0.0.into()), Err(EvaluationError::DivisionByZero));
    assert_eq!(divide(5.into(), (-0.0).into()), Err(EvaluationError::DivisionByZero));
}

#[test]
fn integer_arithmetic_stays_exact_and_division_is_real() {
    assert!(evaluate("2 + 3").unwrap().is_integer());
    assert!(evaluate("2 * 3 - 1").unwrap().is_integer());
    assert!(evaluate("6 / 3").unwrap().is_real());
    assert!(evaluate("2 * 1.0").unwrap().is_real());

    assert_value("9007199254740993 - 1", Number::Integer(9_007_199_254_740_992));
}

#[test]
fn integer_overflow_promotes_to_real() {
    let value = evaluate("9223372036854775807 + 1").unwrap();
    assert!(value.is_real());
    assert_eq!(value, Number::Real(9_223_372_036_854_775_808.0));

    let literal = evaluate("99999999999999999999").unwrap();
    assert_eq!(literal, Number::Real(1e20));
}

#[test]
fn mixed_equality_does_not_round_integers() {
    let above = Number::Integer(9_007_199_254_740_993);
    let real = Number::Real(9_007_199_254_740_992.0);
    let below = Number::Integer(9_007_199_254_740_992);

    assert_ne!(above, real);
    assert_ne!(real, above);
    assert_eq!(real, below);
    assert_ne!(above, below);

    assert_eq!(Number::Integer(-3), Number::Real(-3.0));
    assert_ne!(Number::Integer(3), Number::Real(3.5));
    assert_ne!(Number::Integer(i64::MAX), Number::Real(9_223_372_036_854_775_808.0));
    assert_eq!(Number::Integer(i64::MIN), Number::Real(-9_223_372_036_854_775_808.0));
    assert_ne!(Number::Integer(0), Number::Real(f64::NAN));
}

#[test]
fn large_reals_can_overflow_to_infinity() {
    let huge = "9".repeat(300);

    let infinite = evaluate(&format!("{huge} * {huge}")).unwrap();
    assert!(infinite.as_real().is_infinite());

    let nan = evaluate(&format!("{huge} * {huge} - {huge} * {huge}")).unwrap();
    assert!(nan.as_real().is_nan());
    assert_ne!(nan, nan);
}

#[test]
fn simple_expressions() {
    assert_value("2 + 3", Number::Integer(5));
    assert_value("5 - 3", Number::Integer(2));
    assert_value("2 * 3", Number::Integer(6));
    assert_value("6 / 3", Number::Integer(2));
}

#[test]
fn complex_expressions() {
    assert_value("2 + 3 * 4", Number::Integer(14));
    assert_value("(2 + 3) * 4", Number::Integer(20));
    assert_value("2 + 3 * 4 - 1", Number::Integer(13));
    assert_value("8 - 3 - 2", Number::Integer(3));
    assert_value("16 / 4 / 2", Number::Real(2.0));
}

#[test]
fn whitespace_handling() {
    assert_value("2+3", Number::Integer(5));
    assert_value(" 2 + 3 ", Number::Integer(5));
    assert_value("\t2\n*\r\n3 ", Number::Integer(6));
}

#[test]
fn decimal_literals() {
    assert_value(".5 + 5.", Number::Real(5.5));
    assert_value("1.5 * 4", Number::Real(6.0));

    let sum = evaluate("0.1 + 0.2").unwrap().as_real();
    assert!((sum - 0.3).abs() < 1e-12);
}

#[test]
fn division_by_zero_in_expressions() {
    for src in ["5 / 0", "5 / 0.0", "5 / (2 - 2)", "1 + 4 / (3 * 0)"] {
        assert_eq!(assert_failure(src),
                   EvalFailure::Evaluation(EvaluationError::DivisionByZero),
                   "for {src:?}");
    }
    assert_value("0 / 5", Number::Real(0.0));
}

#[test]
fn empty_input_is_error() {
    assert_eq!(assert_parse_error(""), ParseError::EmptyExpression);
    assert_eq!(assert_parse_error("   \t\n"), ParseError::EmptyExpression);
}

#[test]
fn adjacent_operators_are_unexpected_tokens() {
    assert_eq!(assert_parse_error("2 + * 3"),
               ParseError::UnexpectedToken { token:    "*".to_string(),
                                             position: 4, });
    assert_eq!(assert_parse_error("-5"),
               ParseError::UnexpectedToken { token:    "-".to_string(),
                                             position: 0, });
    assert_eq!(assert_parse_error("()"),
               ParseError::UnexpectedToken { token:    ")".to_string(),
                                             position: 1, });
}

#[test]
fn unmatched_parentheses() {
    assert_eq!(assert_parse_error("2 + 3)"),
               ParseError::TrailingInput { token:    ")".to_string(),
                                           position: 5, });
    assert_eq!(assert_parse_error("(2 + 3"),
               ParseError::UnexpectedEndOfInput { position: 6 });
    assert_eq!(assert_parse_error("((1)"),
               ParseError::UnexpectedEndOfInput { position: 4 });
    assert_eq!(assert_parse_error("(2 + 3 4"),
               ParseError::UnexpectedToken { token:    "4".to_string(),
                                             position: 7, });
}

#[test]
fn missing_operands() {
    assert_eq!(assert_parse_error("2 +"),
               ParseError::UnexpectedEndOfInput { position: 3 });
    assert_eq!(assert_parse_error("2 3"),
               ParseError::TrailingInput { token:    "3".to_string(),
                                           position: 2, });
}

#[test]
fn unexpected_numbers_are_quoted_as_written() {
    assert_eq!(assert_parse_error("(2 5."),
               ParseError::UnexpectedToken { token:    "5.".to_string(),
                                             position: 3, });
    assert_eq!(assert_parse_error("1 99999999999999999999"),
               ParseError::TrailingInput { token:    "99999999999999999999".to_string(),
                                           position: 2, });
}

#[test]
fn invalid_characters_are_lex_errors() {
    let error = assert_lex_error("2 + a");
    assert_eq!(error,
               LexError::InvalidCharacter { character: 'a',
                                            position:  4, });
    assert_eq!(error.character(), 'a');
    assert_eq!(error.to_string(), "Invalid character 'a' at position 4.");

    assert_eq!(assert_lex_error("2 ^ 3").character(), '^');
    assert_eq!(assert_lex_error("1e5").character(), 'e');
    // Lexing runs before evaluation, so the division is never reached.
    assert_eq!(assert_lex_error("1 / 0 + x").character(), 'x');
}

#[test]
fn positions_count_characters_not_bytes() {
    assert_eq!(assert_lex_error("3 × 4"),
               LexError::InvalidCharacter { character: '×',
                                            position:  2, });
    assert_eq!(assert_lex_error("1\u{3000}+ x"),
               LexError::InvalidCharacter { character: 'x',
                                            position:  4, });
}

#[test]
fn malformed_numbers_are_lex_errors() {
    assert_eq!(assert_lex_error("1.2.3"),
               LexError::ExtraDecimalPoint { literal:  "1.2.3".to_string(),
                                             position: 3, });
    assert_eq!(assert_lex_error("2 + 1..5"),
               LexError::ExtraDecimalPoint { literal:  "1..5".to_string(),
                                             position: 6, });
    assert_eq!(assert_lex_error("2 * ."),
               LexError::InvalidNumber { literal:  ".".to_string(),
                                         position: 4, });

    let huge = "9".repeat(400);
    assert!(matches!(assert_lex_error(&huge),
                     LexError::InvalidNumber { position: 0, .. }));
}

#[test]
fn nesting_is_capped() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_value(&nested(MAX_NESTING_DEPTH), Number::Integer(1));
    assert_eq!(assert_parse_error(&nested(MAX_NESTING_DEPTH + 1)),
               ParseError::NestingTooDeep { position: MAX_NESTING_DEPTH });
}

#[test]
fn failures_report_positions() {
    assert_eq!(assert_failure("2 + a").position(), Some(4));
    assert_eq!(assert_failure("2 + 3)").position(), Some(5));
    assert_eq!(assert_failure("").position(), None);
    assert_eq!(assert_failure("1 / 0").position(), None);
}

#[test]
fn numbers_display_like_results() {
    assert_eq!(evaluate("2 + 3 * 4").unwrap().to_string(), "14");
    assert_eq!(evaluate("6 / 3").unwrap().to_string(), "2.0");
    assert_eq!(evaluate("10 / 4").unwrap().to_string(), "2.5");
}

#[test]
fn evaluation_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Number>();
    assert_send_sync::<EvalFailure>();

    let handles: Vec<_> = (0..4).map(|i| {
                                    std::thread::spawn(move || {
                                        evaluate(&format!("{i} * (2 + 3)"))
                                    })
                                })
                                .collect();
    for (i, handle) in (0_i64..).zip(handles) {
        assert_eq!(handle.join().unwrap(), Ok(Number::Integer(i * 5)));
    }
}

#[test]
fn example_file_works() {
    let contents = fs::read_to_string("tests/examples.calc").expect("missing file");
    let mut count = 0;

    for line in contents.lines() {
        let Some((expression, expected)) = line.split_once('#') else {
            continue;
        };
        if expression.trim().is_empty() {
            continue;
        }

        count += 1;
        let expected = evaluate(expected).unwrap_or_else(|e| {
                                              panic!("Bad expectation in {line:?}: {e}")
                                          });
        assert_value(expression, expected);
    }

    assert!(count > 0, "No expressions found in tests/examples.calc");
}
