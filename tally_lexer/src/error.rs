use thiserror::Error;

use crate::token::Location;

/// Errors detected while tokenizing an expression.
///
/// Both variants are "bad input" conditions: the whole expression is
/// rejected at the first offending character, no partial token stream is
/// returned alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// A character outside the expression alphabet (digits, `.`,
    /// `+ - * / ( )` and whitespace).
    #[error("invalid character '{ch}' at {location}")]
    InvalidCharacter { ch: char, location: Location },

    /// A numeric literal with two decimal points, a trailing dot with no
    /// digits after it, a lone dot, or a value too large for an `f64`.
    #[error("malformed number literal '{lexeme}' at {location}")]
    MalformedNumber { lexeme: String, location: Location },
}

impl LexError {
    /// The location at which lexing stopped.
    pub fn location(&self) -> Location {
        match self {
            LexError::InvalidCharacter { location, .. } => *location,
            LexError::MalformedNumber { location, .. } => *location,
        }
    }
}
