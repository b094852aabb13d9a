pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::{parse, Parser, TokenStream, MAX_NESTING_DEPTH};
