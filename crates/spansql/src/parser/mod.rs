//! SQL Parser
//!
//! A hand-written recursive descent parser with Pratt expression parsing.
//! Query and DDL productions live in their own modules as further
//! `impl Parser` blocks.

mod config;
mod ddl;
mod error;
#[allow(clippy::module_inception)]
mod parser;
mod pratt;
mod query;

pub use config::{ParserConfig, DEFAULT_MAX_DEPTH};
pub use error::{ErrorKind, ParseError};
pub use parser::Parser;
