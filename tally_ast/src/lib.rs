//! Expression tree node types shared by the parser and the evaluator.

pub mod ast;

pub use ast::{
    BinaryExpressionNode, BinaryOperator, ExpressionNode, UnaryExpressionNode, UnaryOperator,
};
