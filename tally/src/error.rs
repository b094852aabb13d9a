use thiserror::Error;

use tally_eval::RuntimeError;
use tally_lexer::LexError;
use tally_parser::ParseError;

/// Unified error for a full evaluation.
///
/// Every variant is an expected, locally-detected "bad input" condition;
/// errors propagate up from the stage that detected them without
/// modification, and no partial result accompanies an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_pass_through_transparently() {
        let err = EvalError::from(RuntimeError::DivisionByZero);
        assert_eq!(err.to_string(), "division by zero");
    }
}
