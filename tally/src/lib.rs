//! Arithmetic expression evaluation.
//!
//! Chains the lexer, parser, and evaluator into a single entry point:
//!
//! ```
//! assert_eq!(tally::evaluate("2 + 3 * 4").unwrap(), 14.0);
//! assert!(tally::evaluate("10 / 0").is_err());
//! ```

pub mod error;

pub use error::EvalError;
pub use tally_ast::ExpressionNode;

use log::debug;

/// Evaluate an arithmetic expression supplied as text.
///
/// Each call is a pure function of its input string: no state persists
/// between evaluations, and identical input always yields an identical
/// result or the same error kind.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let tokens = tally_lexer::tokenize(expression)?;
    let expr = tally_parser::parse(&tokens)?;
    let value = tally_eval::evaluate(&expr)?;
    debug!("evaluated {expression:?} to {value}");
    Ok(value)
}

/// Capability interface over [`evaluate`], so transport layers can be
/// tested against a fake without invoking real parsing logic.
pub trait ExpressionEvaluator: Send + Sync {
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError>;
}

/// The default [`ExpressionEvaluator`], backed by the real pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl ExpressionEvaluator for Calculator {
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        evaluate(expression)
    }
}
