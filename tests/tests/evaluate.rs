//! End-to-end tests for the full lexer -> parser -> evaluator pipeline.

use pretty_assertions::assert_eq;
use tally::{evaluate, EvalError};
use tally_eval::RuntimeError;
use tally_lexer::LexError;
use tally_parser::{ParseError, MAX_NESTING_DEPTH};

#[test]
fn precedence_and_parentheses() {
    assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
    assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
    assert_eq!(evaluate("100 - 2 * 3 + 4").unwrap(), 98.0);
    assert_eq!(evaluate("8 / 4 / 2").unwrap(), 1.0);
}

#[test]
fn decimal_literals() {
    assert_eq!(evaluate("1.5 + 2.25").unwrap(), 3.75);
    assert_eq!(evaluate(".5 * 4").unwrap(), 2.0);
}

#[test]
fn nested_unary_signs() {
    assert_eq!(evaluate("--5 + 3").unwrap(), 8.0);
    assert_eq!(evaluate("-+-2").unwrap(), 2.0);
    assert_eq!(evaluate("-(2 + 3)").unwrap(), -5.0);
}

#[test]
fn division_by_zero_is_typed_not_infinity() {
    assert_eq!(
        evaluate("10 / 0").unwrap_err(),
        EvalError::Runtime(RuntimeError::DivisionByZero)
    );
    assert_eq!(
        evaluate("1 / 0.0").unwrap_err(),
        EvalError::Runtime(RuntimeError::DivisionByZero)
    );
    assert_eq!(
        evaluate("1 / (2 - 2)").unwrap_err(),
        EvalError::Runtime(RuntimeError::DivisionByZero)
    );
}

#[test]
fn missing_close_paren_is_unbalanced() {
    assert!(matches!(
        evaluate("2 + (3 * 4").unwrap_err(),
        EvalError::Parse(ParseError::UnbalancedParentheses { .. })
    ));
}

#[test]
fn invalid_character_is_reported_at_its_position() {
    match evaluate("2 + a").unwrap_err() {
        EvalError::Lex(LexError::InvalidCharacter { ch, location }) => {
            assert_eq!(ch, 'a');
            assert_eq!(location.offset, 4);
            assert_eq!(location.column, 5);
        }
        other => panic!("expected InvalidCharacter, got {other:?}"),
    }
}

#[test]
fn one_bad_character_rejects_the_whole_expression() {
    // An otherwise valid expression with a single stray character
    assert!(matches!(
        evaluate("1 + 2 * 3 # 4").unwrap_err(),
        EvalError::Lex(LexError::InvalidCharacter { .. })
    ));
}

#[test]
fn empty_and_whitespace_inputs_are_syntax_errors() {
    for input in ["", "   ", "\t\n"] {
        assert!(
            matches!(
                evaluate(input).unwrap_err(),
                EvalError::Parse(ParseError::Syntax { .. })
            ),
            "input {input:?} should be a syntax error"
        );
    }
}

#[test]
fn empty_parentheses_are_a_syntax_error() {
    assert!(matches!(
        evaluate("()").unwrap_err(),
        EvalError::Parse(ParseError::Syntax { .. })
    ));
}

#[test]
fn malformed_literals_are_rejected_by_the_lexer() {
    for input in ["1.2.3", "7.", ".", "1 + ."] {
        assert!(
            matches!(
                evaluate(input).unwrap_err(),
                EvalError::Lex(LexError::MalformedNumber { .. })
            ),
            "input {input:?} should be a malformed literal"
        );
    }
}

#[test]
fn implicit_multiplication_is_rejected() {
    assert!(matches!(
        evaluate("2(3+4)").unwrap_err(),
        EvalError::Parse(ParseError::Syntax { .. })
    ));
}

#[test]
fn pathological_nesting_fails_cleanly() {
    let depth = MAX_NESTING_DEPTH * 4;
    let input = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert!(matches!(
        evaluate(&input).unwrap_err(),
        EvalError::Parse(ParseError::Syntax { .. })
    ));
}

#[test]
fn evaluation_is_left_to_right_within_a_precedence_level() {
    // 1 - 2 + 3 is (1 - 2) + 3 = 2, not 1 - (2 + 3) = -4
    assert_eq!(evaluate("1 - 2 + 3").unwrap(), 2.0);
}

#[test]
fn repeated_evaluation_yields_the_same_outcome() {
    let inputs = ["2 + 3 * 4", "10 / 0", "2 + a", "(1"];
    for input in inputs {
        assert_eq!(evaluate(input), evaluate(input), "input {input:?}");
    }
}
