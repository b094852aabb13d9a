use std::fmt;

/// Represents a token's location in the expression text.
///
/// Line and column numbers are 1-based, the byte offset is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based line number in the input
    pub line: usize,
    /// The 1-based column number in the input
    pub column: usize,
    /// The 0-based byte offset from the start of the input
    pub offset: usize,
}

/// Represents the type of a token in an arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenType {
    /// A numeric literal, already parsed to its `f64` value
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
    /// End-of-input marker appended by [`crate::tokenize`]
    Eof,
}

/// A token together with its source text and location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The type of the token
    pub token_type: TokenType,
    /// The original source text of the token
    pub lexeme: String,
    /// The location of the token in the input
    pub location: Location,
}

impl Token {
    pub fn new<S: Into<String>>(token_type: TokenType, lexeme: S, location: Location) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// Returns true if this token marks the end of input.
    pub fn is_eof(&self) -> bool {
        matches!(self.token_type, TokenType::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.token_type, self.location)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
