//! Lexical analysis for arithmetic expressions.
//!
//! The lexer turns an expression string into a sequence of position-tracked
//! tokens, rejecting any character outside the expression alphabet and any
//! malformed numeric literal in the same single pass.

pub mod error;
pub mod lexer;
pub mod token;

pub use error::LexError;
pub use lexer::{tokenize, Lexer};
pub use token::{Location, Token, TokenType};
