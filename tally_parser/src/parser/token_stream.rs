use tally_lexer::{Location, Token};

/// A stream of tokens from the lexer
pub struct TokenStream<'a> {
    /// The tokens being parsed
    tokens: &'a [Token],
    /// Current position in the token stream
    position: usize,
}

impl<'a> TokenStream<'a> {
    /// Create a new token stream from a slice of tokens
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenStream {
            tokens,
            position: 0,
        }
    }

    /// Get the current token without advancing
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    /// Get the current token and advance the position
    pub fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Current position in the stream
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if we're at the end of the token slice
    pub fn is_empty(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// The location just past the final token, used to anchor errors when
    /// the slice runs out without a trailing end marker.
    pub fn end_location(&self) -> Location {
        self.tokens
            .last()
            .map(|t| t.location)
            .unwrap_or_default()
    }
}
