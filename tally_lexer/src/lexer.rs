//! Lexer for arithmetic expressions using the 'logos' crate.
//! Recognizes numeric literals, the four operators, and parentheses.

use log::trace;
use logos::Logos;

use crate::error::LexError;
use crate::token::{Location, Token, TokenType};

/// Raw token type used by the logos lexer
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum RawToken {
    #[regex(r"[0-9]+(\.[0-9]+)?|\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // Literals with a second decimal point, a trailing dot, or no digits
    // at all. Longest-match makes these win over the valid forms above.
    #[regex(r"[0-9.]*\.[0-9.]*\.[0-9.]*")]
    #[regex(r"[0-9]+\.")]
    #[token(".")]
    MalformedNumber,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Streaming lexer over an expression string.
///
/// Wraps the logos lexer and tracks line, column, and byte offset so every
/// token and error carries a precise [`Location`].
pub struct Lexer<'source> {
    /// The logos lexer instance
    raw: logos::Lexer<'source, RawToken>,
    /// Current line number (1-based)
    line: usize,
    /// Current column number (1-based)
    column: usize,
    /// Byte offset of the next unprocessed character
    offset: usize,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given expression text
    pub fn new(source: &'source str) -> Self {
        Self {
            raw: RawToken::lexer(source),
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Advance the line/column counters up to the given byte offset,
    /// covering whitespace that logos skipped between tokens.
    fn advance_to(&mut self, target: usize) {
        let source = self.raw.source();
        for c in source[self.offset..target].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset = target;
    }

    /// The location just past the last processed token.
    fn current_location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.raw.next()?;
        let lexeme = self.raw.slice().to_string();
        let span = self.raw.span();

        self.advance_to(span.start);
        let location = self.current_location();
        self.advance_to(span.end);

        let token_type = match raw {
            Ok(RawToken::Number(value)) if value.is_finite() => TokenType::Number(value),
            Ok(RawToken::Number(_)) | Ok(RawToken::MalformedNumber) => {
                return Some(Err(LexError::MalformedNumber { lexeme, location }));
            }
            Ok(RawToken::Plus) => TokenType::Plus,
            Ok(RawToken::Minus) => TokenType::Minus,
            Ok(RawToken::Star) => TokenType::Star,
            Ok(RawToken::Slash) => TokenType::Slash,
            Ok(RawToken::LParen) => TokenType::LeftParen,
            Ok(RawToken::RParen) => TokenType::RightParen,
            Err(()) => {
                let ch = lexeme.chars().next().unwrap_or('\u{FFFD}');
                return Some(Err(LexError::InvalidCharacter { ch, location }));
            }
        };

        Some(Ok(Token::new(token_type, lexeme, location)))
    }
}

/// Tokenize an entire expression.
///
/// Returns the token sequence with a trailing [`TokenType::Eof`] token, so
/// the parser can detect input exhaustion without out-of-bounds checks.
/// Stops at the first invalid character or malformed literal.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    for item in &mut lexer {
        tokens.push(item?);
    }
    lexer.advance_to(input.len());
    tokens.push(Token::new(TokenType::Eof, "", lexer.current_location()));
    trace!("tokenized {} tokens from {} bytes", tokens.len(), input.len());
    Ok(tokens)
}
