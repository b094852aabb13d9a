use thiserror::Error;

/// Errors detected while evaluating an expression tree.
///
/// Division by zero and overflow are surfaced as typed errors rather than
/// silently producing infinity or NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("division by zero")]
    DivisionByZero,

    /// Finite operands produced a non-finite result.
    #[error("numeric overflow")]
    Overflow,
}
