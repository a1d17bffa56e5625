//! SQL Lexer/Tokenizer
//!
//! A hand-written, pull-based lexer for the Spanner dialect. Whitespace and
//! the three comment forms (`#`, `--`, `/* */`) are discarded between tokens.

mod span;
mod token;
mod tokenizer;

pub use span::{Position, Span};
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
