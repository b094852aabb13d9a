//! Property tests comparing the evaluator against directly computed results.

use proptest::prelude::*;
use tally::evaluate;

fn small_int() -> impl Strategy<Value = u32> {
    0u32..10_000
}

proptest! {
    /// A chain of additions evaluates to the sum of its terms.
    #[test]
    fn addition_chains_sum(terms in prop::collection::vec(small_int(), 1..20)) {
        let input = terms
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" + ");
        let expected: f64 = terms.iter().map(|&n| f64::from(n)).sum();
        prop_assert_eq!(evaluate(&input).unwrap(), expected);
    }

    /// Multiplication binds tighter than addition.
    #[test]
    fn multiplication_binds_tighter(a in small_int(), b in small_int(), c in small_int()) {
        let input = format!("{a} + {b} * {c}");
        let expected = f64::from(a) + f64::from(b) * f64::from(c);
        prop_assert_eq!(evaluate(&input).unwrap(), expected);
    }

    /// Parenthesizing the addition first changes the grouping.
    #[test]
    fn parentheses_regroup(a in small_int(), b in small_int(), c in small_int()) {
        let input = format!("({a} + {b}) * {c}");
        let expected = (f64::from(a) + f64::from(b)) * f64::from(c);
        prop_assert_eq!(evaluate(&input).unwrap(), expected);
    }

    /// Subtraction associates to the left.
    #[test]
    fn subtraction_is_left_associative(a in small_int(), b in small_int(), c in small_int()) {
        let input = format!("{a} - {b} - {c}");
        let expected = f64::from(a) - f64::from(b) - f64::from(c);
        prop_assert_eq!(evaluate(&input).unwrap(), expected);
    }

    /// Evaluating the same input twice gives the same outcome, success or error.
    #[test]
    fn evaluation_is_deterministic(input in "[0-9+\\-*/(). ]{0,40}") {
        prop_assert_eq!(evaluate(&input), evaluate(&input));
    }

    /// Inputs containing a character outside the alphabet never evaluate.
    #[test]
    fn foreign_characters_are_rejected(
        prefix in "[0-9 +]{0,10}",
        ch in "[a-zA-Z_%$&]",
        suffix in "[0-9 +]{0,10}",
    ) {
        let input = format!("{prefix}{ch}{suffix}");
        prop_assert!(evaluate(&input).is_err());
    }
}
