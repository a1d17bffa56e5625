#![allow(dead_code)]

use spansql::ast::{Ddl, DdlStmt, Expr, Query};
use spansql::{ParseError, Parser};

pub fn parse_expr(sql: &str) -> Expr {
    spansql::parse_expr(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_query(sql: &str) -> Query {
    spansql::parse_query(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_ddl(sql: &str) -> Ddl {
    spansql::parse_ddl(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_ddl_stmt(sql: &str) -> DdlStmt {
    spansql::parse_ddl_stmt(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn expr_err(sql: &str) -> ParseError {
    spansql::parse_expr(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn query_err(sql: &str) -> ParseError {
    spansql::parse_query(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn ddl_err(sql: &str) -> ParseError {
    spansql::parse_ddl(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

/// Parses one expression and returns it with whatever input is left.
pub fn parse_expr_prefix(sql: &str) -> (Expr, String) {
    let mut parser = Parser::new(sql);
    let expr = parser
        .parse_expr()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"));
    (expr, parser.remaining().to_owned())
}
