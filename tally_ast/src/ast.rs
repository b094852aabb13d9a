// Expression tree definitions for arithmetic expressions.
// The tree is finite and acyclic; each node exclusively owns its children.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionNode {
    Literal(f64),
    Unary(Box<UnaryExpressionNode>),
    Binary(Box<BinaryExpressionNode>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpressionNode {
    pub operator: UnaryOperator,
    pub operand: ExpressionNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpressionNode {
    pub left: ExpressionNode,
    pub operator: BinaryOperator,
    pub right: ExpressionNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl ExpressionNode {
    /// Build a literal node.
    pub fn literal(value: f64) -> Self {
        ExpressionNode::Literal(value)
    }

    /// Build a unary node owning its operand.
    pub fn unary(operator: UnaryOperator, operand: ExpressionNode) -> Self {
        ExpressionNode::Unary(Box::new(UnaryExpressionNode { operator, operand }))
    }

    /// Build a binary node owning both children.
    pub fn binary(left: ExpressionNode, operator: BinaryOperator, right: ExpressionNode) -> Self {
        ExpressionNode::Binary(Box::new(BinaryExpressionNode {
            left,
            operator,
            right,
        }))
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOperator::Plus => write!(f, "+"),
            UnaryOperator::Minus => write!(f, "-"),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Sub => write!(f, "-"),
            BinaryOperator::Mul => write!(f, "*"),
            BinaryOperator::Div => write!(f, "/"),
        }
    }
}
