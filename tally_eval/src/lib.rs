//! Evaluation of arithmetic expression trees.

pub mod error;
pub mod evaluator;

pub use error::RuntimeError;
pub use evaluator::evaluate;
