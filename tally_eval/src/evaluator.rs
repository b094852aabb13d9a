//! Depth-first walk over the expression tree.
//!
//! Evaluation order is strictly left-to-right within a precedence level;
//! operands are never reordered for numeric stability.

use tally_ast::{BinaryOperator, ExpressionNode, UnaryOperator};

use crate::error::RuntimeError;

/// Evaluate an expression tree to a double-precision result.
///
/// Recursion depth mirrors the tree depth, which the parser caps, so the
/// walk always terminates without exhausting the stack.
pub fn evaluate(expr: &ExpressionNode) -> Result<f64, RuntimeError> {
    match expr {
        ExpressionNode::Literal(value) => Ok(*value),
        ExpressionNode::Unary(unary) => {
            let operand = evaluate(&unary.operand)?;
            Ok(match unary.operator {
                UnaryOperator::Plus => operand,
                UnaryOperator::Minus => -operand,
            })
        }
        ExpressionNode::Binary(binary) => {
            let left = evaluate(&binary.left)?;
            let right = evaluate(&binary.right)?;
            apply_binary_op(binary.operator, left, right)
        }
    }
}

fn apply_binary_op(op: BinaryOperator, left: f64, right: f64) -> Result<f64, RuntimeError> {
    let value = match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left / right
        }
    };
    // Literals are finite and division by zero is caught above, so a
    // non-finite result here means the operation overflowed.
    if !value.is_finite() {
        return Err(RuntimeError::Overflow);
    }
    Ok(value)
}
