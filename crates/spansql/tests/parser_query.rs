//! Tests for SELECT query parsing.

mod common;
use common::*;
use pretty_assertions::assert_eq;
use spansql::ast::{ComparisonOp, Expr, Order, Query, Select, SelectFrom};
use spansql::ErrorKind;

#[test]
fn select_literal() {
    assert_eq!(
        parse_query("SELECT 17"),
        Query {
            select: Select {
                list: vec![Expr::IntegerLiteral(17)],
                ..Select::default()
            },
            ..Query::default()
        }
    );
}

#[test]
fn select_with_all_clauses() {
    let query = parse_query(
        "SELECT Alias FROM Characters WHERE Age < @ageLimit AND Alias IS NOT NULL ORDER BY Age DESC LIMIT @limit\n\t",
    );
    assert_eq!(
        query,
        Query {
            select: Select {
                distinct: false,
                list: vec![Expr::id("Alias")],
                from: vec![SelectFrom::table("Characters")],
                where_clause: Some(Expr::and(
                    Expr::comparison(Expr::id("Age"), ComparisonOp::Lt, Expr::param("ageLimit")),
                    Expr::is(Expr::id("Alias"), true, Expr::NullLiteral),
                )),
            },
            order: vec![Order {
                expr: Expr::id("Age"),
                desc: true,
            }],
            limit: Some(Expr::param("limit")),
            offset: None,
        }
    );
}

#[test]
fn where_clause_matches_standalone_expression() {
    let query = parse_query(
        "SELECT Alias FROM Characters WHERE Age < @ageLimit AND Alias IS NOT NULL ORDER BY Age DESC",
    );
    assert_eq!(
        query.select.where_clause,
        Some(parse_expr("Age < @ageLimit AND Alias IS NOT NULL"))
    );
}

#[test]
fn select_star_and_distinct() {
    let query = parse_query("SELECT DISTINCT *, Name FROM Singers");
    assert!(query.select.distinct);
    assert_eq!(query.select.list, vec![Expr::Star, Expr::id("Name")]);
}

#[test]
fn select_from_multiple_tables() {
    let query = parse_query("SELECT A FROM T1, `T2`, Key");
    assert_eq!(
        query.select.from,
        vec![
            SelectFrom::table("T1"),
            SelectFrom::table("T2"),
            SelectFrom::table("Key"),
        ]
    );
}

#[test]
fn order_by_multiple_keys() {
    let query = parse_query("SELECT A, B FROM T ORDER BY A ASC, B DESC, C");
    assert_eq!(
        query.order,
        vec![
            Order {
                expr: Expr::id("A"),
                desc: false,
            },
            Order {
                expr: Expr::id("B"),
                desc: true,
            },
            Order {
                expr: Expr::id("C"),
                desc: false,
            },
        ]
    );
}

#[test]
fn limit_and_offset() {
    let query = parse_query("SELECT A FROM T LIMIT 10 OFFSET @skip");
    assert_eq!(query.limit, Some(Expr::IntegerLiteral(10)));
    assert_eq!(query.offset, Some(Expr::param("skip")));
}

#[test]
fn trailing_comments_are_consumed() {
    let query = parse_query("SELECT A FROM T -- all of them\n/* done */");
    assert_eq!(query.select.from, vec![SelectFrom::table("T")]);
}

#[test]
fn error_trailing_garbage() {
    let err = query_err("SELECT A FROM T GROUP BY A");
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.expected.as_deref(), Some("end of input"));
    assert_eq!(err.near, "GROUP BY A");
}

#[test]
fn error_chained_comparison_in_where() {
    let err = query_err("SELECT A FROM T WHERE X OR Y > 1 > 2");
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.near, "> 2");
}

#[test]
fn error_alias_is_not_supported() {
    let err = query_err("SELECT A AS B FROM T");
    assert_eq!(err.found, Some(spansql::TokenKind::Keyword(spansql::lexer::Keyword::As)));
}

#[test]
fn error_missing_select_list() {
    let err = query_err("SELECT FROM T");
    assert_eq!(err.kind, ErrorKind::Syntax);
}

#[test]
fn error_reserved_keyword_as_table() {
    let _ = query_err("SELECT A FROM Select");
}

#[test]
fn error_order_without_by() {
    let _ = query_err("SELECT A FROM T ORDER A");
}

#[test]
fn error_offset_without_limit() {
    let _ = query_err("SELECT A FROM T OFFSET 3");
}
