//! Recursive-descent parser for arithmetic expressions.
//!
//! Grammar (left-associative, `*`/`/` bind tighter than `+`/`-`):
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := factor (('*' | '/') factor)*
//! factor  := ('+' | '-')? factor | number | '(' expr ')'
//! ```

mod token_stream;

use log::debug;

use tally_ast::{BinaryOperator, ExpressionNode, UnaryOperator};
use tally_lexer::{Token, TokenType};

use crate::error::ParseError;

pub use token_stream::TokenStream;

/// Maximum nesting depth of parentheses and unary signs.
///
/// Descent recursion is bounded by this cap, so pathological inputs
/// (thousands of nested parens) fail with a syntax error instead of
/// exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parse a token sequence into an expression tree.
///
/// The tokens are expected to come from [`tally_lexer::tokenize`] and end
/// with an [`TokenType::Eof`] marker. A single cursor advances monotonically
/// from the first token to `Eof`; no state survives the call.
pub fn parse(tokens: &[Token]) -> Result<ExpressionNode, ParseError> {
    Parser::new(tokens).parse_root()
}

/// One-shot parser over a token slice.
pub struct Parser<'a> {
    stream: TokenStream<'a>,
    /// Number of currently open parentheses, used to tell an unmatched ')'
    /// apart from a plain syntax error.
    paren_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            stream: TokenStream::new(tokens),
            paren_depth: 0,
        }
    }

    /// Parse a full expression and require the cursor to end on `Eof`.
    pub fn parse_root(&mut self) -> Result<ExpressionNode, ParseError> {
        let first = self.current();
        if first.is_eof() {
            return Err(ParseError::at_token(&first, "empty expression"));
        }
        let expr = self.parse_expression(0)?;

        let trailing = self.current();
        match trailing.token_type {
            TokenType::Eof => {
                debug!("parsed expression from {} tokens", self.stream.position());
                Ok(expr)
            }
            TokenType::RightParen => Err(ParseError::unbalanced_at(&trailing)),
            _ => Err(ParseError::at_token(
                &trailing,
                format!("unexpected token '{}'", trailing.lexeme),
            )),
        }
    }

    /// The current token, or a synthetic `Eof` if the slice ran out.
    fn current(&self) -> Token {
        match self.stream.peek() {
            Some(token) => token.clone(),
            None => Token::new(TokenType::Eof, "", self.stream.end_location()),
        }
    }

    fn advance(&mut self) {
        self.stream.next();
    }

    /// expr := term (('+' | '-') term)*
    fn parse_expression(&mut self, depth: usize) -> Result<ExpressionNode, ParseError> {
        let mut node = self.parse_term(depth)?;
        loop {
            let operator = match self.current().token_type {
                TokenType::Plus => BinaryOperator::Add,
                TokenType::Minus => BinaryOperator::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_term(depth)?;
            node = ExpressionNode::binary(node, operator, right);
        }
        Ok(node)
    }

    /// term := factor (('*' | '/') factor)*
    fn parse_term(&mut self, depth: usize) -> Result<ExpressionNode, ParseError> {
        let mut node = self.parse_factor(depth)?;
        loop {
            let operator = match self.current().token_type {
                TokenType::Star => BinaryOperator::Mul,
                TokenType::Slash => BinaryOperator::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_factor(depth)?;
            node = ExpressionNode::binary(node, operator, right);
        }
        Ok(node)
    }

    /// factor := ('+' | '-')? factor | number | '(' expr ')'
    fn parse_factor(&mut self, depth: usize) -> Result<ExpressionNode, ParseError> {
        if depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::at_token(
                &self.current(),
                "expression is too deeply nested",
            ));
        }

        let token = self.current();
        match token.token_type {
            TokenType::Number(value) => {
                self.advance();
                Ok(ExpressionNode::literal(value))
            }
            TokenType::Plus => {
                self.advance();
                let operand = self.parse_factor(depth + 1)?;
                Ok(ExpressionNode::unary(UnaryOperator::Plus, operand))
            }
            TokenType::Minus => {
                self.advance();
                let operand = self.parse_factor(depth + 1)?;
                Ok(ExpressionNode::unary(UnaryOperator::Minus, operand))
            }
            TokenType::LeftParen => self.parse_paren(depth),
            TokenType::RightParen if self.paren_depth == 0 => {
                Err(ParseError::unbalanced_at(&token))
            }
            TokenType::Eof if self.paren_depth > 0 => Err(ParseError::unbalanced_at(&token)),
            TokenType::Eof => Err(ParseError::at_token(&token, "unexpected end of expression")),
            _ => Err(ParseError::at_token(
                &token,
                format!("expected a number, sign, or '(', found '{}'", token.lexeme),
            )),
        }
    }

    /// '(' expr ')' with the opening paren still at the cursor.
    fn parse_paren(&mut self, depth: usize) -> Result<ExpressionNode, ParseError> {
        self.advance(); // consume '('
        self.paren_depth += 1;

        let next = self.current();
        if matches!(next.token_type, TokenType::RightParen) {
            return Err(ParseError::at_token(&next, "empty parentheses"));
        }

        let inner = self.parse_expression(depth + 1)?;

        let closing = self.current();
        match closing.token_type {
            TokenType::RightParen => {
                self.advance();
                self.paren_depth -= 1;
                Ok(inner)
            }
            TokenType::Eof => Err(ParseError::unbalanced_at(&closing)),
            _ => Err(ParseError::at_token(
                &closing,
                format!("expected ')', found '{}'", closing.lexeme),
            )),
        }
    }
}
