//! # spansql
//!
//! A parser for the Cloud Spanner SQL dialect.
//!
//! This crate provides:
//! - A hand-written lexer with Spanner's literal and comment forms
//! - A recursive descent parser with Pratt expression parsing
//! - Typed ASTs for `SELECT` queries and schema DDL
//!
//! ## Queries
//!
//! ```rust
//! use spansql::ast::{ComparisonOp, Expr, SelectFrom};
//!
//! let query = spansql::parse_query("SELECT A, B FROM Table WHERE A > 10 LIMIT 5").unwrap();
//! assert_eq!(query.select.from, vec![SelectFrom::table("Table")]);
//! assert_eq!(
//!     query.select.where_clause,
//!     Some(Expr::comparison(Expr::id("A"), ComparisonOp::Gt, Expr::IntegerLiteral(10)))
//! );
//! ```
//!
//! ## Schema DDL
//!
//! ```rust
//! use spansql::ast::DdlStmt;
//!
//! let ddl = spansql::parse_ddl(
//!     "CREATE TABLE Singers (SingerId INT64 NOT NULL, Name STRING(MAX)) PRIMARY KEY (SingerId);
//!      CREATE INDEX SingersByName ON Singers (Name)",
//! )
//! .unwrap();
//! assert_eq!(ddl.list.len(), 2);
//! assert!(matches!(ddl.list[1], DdlStmt::CreateIndex(_)));
//! ```
//!
//! ## Errors
//!
//! Every entry point either returns a complete AST or a [`ParseError`]
//! locating the failure:
//!
//! ```rust
//! use spansql::ErrorKind;
//!
//! let err = spansql::parse_expr(r#""foo" AND "bar""#).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::TypeMismatch);
//! assert_eq!(err.position.column, 7);
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

use tracing::debug;

pub use ast::{Ddl, DdlStmt, Expr, Query};
pub use lexer::{Lexer, Position, Span, Token, TokenKind};
pub use parser::{ErrorKind, ParseError, Parser, ParserConfig};

/// Parses a complete `SELECT` query.
///
/// # Errors
///
/// Returns a `ParseError` if the input is not a single valid query.
pub fn parse_query(input: &str) -> Result<Query, ParseError> {
    let result = parse_all(input, Parser::parse_query);
    match &result {
        Ok(query) => debug!(
            len = input.len(),
            items = query.select.list.len(),
            tables = query.select.from.len(),
            "parsed query"
        ),
        Err(e) => debug!(len = input.len(), error = %e, "failed to parse query"),
    }
    result
}

/// Parses a complete standalone expression, such as a WHERE clause body.
///
/// # Errors
///
/// Returns a `ParseError` if the input is not a single valid expression.
pub fn parse_expr(input: &str) -> Result<Expr, ParseError> {
    let result = parse_all(input, Parser::parse_expr);
    match &result {
        Ok(_) => debug!(len = input.len(), "parsed expression"),
        Err(e) => debug!(len = input.len(), error = %e, "failed to parse expression"),
    }
    result
}

/// Parses a `;`-separated list of DDL statements.
///
/// # Errors
///
/// Returns a `ParseError`, tagged with the index of the failing statement,
/// if any statement is invalid.
pub fn parse_ddl(input: &str) -> Result<Ddl, ParseError> {
    let result = parse_all(input, Parser::parse_ddl);
    match &result {
        Ok(ddl) => debug!(
            len = input.len(),
            statements = ddl.list.len(),
            "parsed DDL"
        ),
        Err(e) => debug!(
            len = input.len(),
            statement = ?e.statement,
            error = %e,
            "failed to parse DDL"
        ),
    }
    result
}

/// Parses exactly one DDL statement with no trailing `;`.
///
/// # Errors
///
/// Returns a `ParseError` if the input is not a single valid DDL statement.
pub fn parse_ddl_stmt(input: &str) -> Result<DdlStmt, ParseError> {
    let result = parse_all(input, Parser::parse_ddl_stmt);
    match &result {
        Ok(_) => debug!(len = input.len(), "parsed DDL statement"),
        Err(e) => debug!(len = input.len(), error = %e, "failed to parse DDL statement"),
    }
    result
}

/// Runs one production over the whole input and rejects leftovers.
fn parse_all<'a, T>(
    input: &'a str,
    production: impl FnOnce(&mut Parser<'a>) -> Result<T, ParseError>,
) -> Result<T, ParseError> {
    let mut parser = Parser::new(input);
    let value = production(&mut parser)?;
    parser.finish()?;
    Ok(value)
}
