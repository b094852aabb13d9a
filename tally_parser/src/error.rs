use thiserror::Error;

use tally_lexer::{Location, Token};

/// Errors detected while parsing a token sequence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The tokens do not form a grammatical expression: empty input, empty
    /// parentheses, an operator with a missing operand, a number followed
    /// by '(' with no operator between them, or nesting beyond the
    /// supported depth.
    #[error("syntax error at {location}: {message}")]
    Syntax { location: Location, message: String },

    /// A '(' without a matching ')', or a ')' without a matching '('.
    #[error("unbalanced parentheses at {location}")]
    UnbalancedParentheses { location: Location },
}

impl ParseError {
    /// Create a syntax error anchored at a specific token.
    pub fn at_token<S: Into<String>>(token: &Token, message: S) -> Self {
        ParseError::Syntax {
            location: token.location,
            message: message.into(),
        }
    }

    /// Create an unbalanced-parentheses error anchored at a specific token.
    pub fn unbalanced_at(token: &Token) -> Self {
        ParseError::UnbalancedParentheses {
            location: token.location,
        }
    }

    /// The location at which parsing stopped.
    pub fn location(&self) -> Location {
        match self {
            ParseError::Syntax { location, .. } => *location,
            ParseError::UnbalancedParentheses { location } => *location,
        }
    }
}
