//! Query AST types.

use super::expression::Expr;

/// A complete query: a SELECT plus ordering and paging.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query {
    /// The SELECT body.
    pub select: Select,
    /// ORDER BY entries, in source order.
    pub order: Vec<Order>,
    /// LIMIT count.
    pub limit: Option<Expr>,
    /// OFFSET count; only valid after LIMIT.
    pub offset: Option<Expr>,
}

/// The SELECT body of a query.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Select {
    /// Whether DISTINCT was specified.
    pub distinct: bool,
    /// The select list.
    pub list: Vec<Expr>,
    /// Tables in the FROM clause.
    pub from: Vec<SelectFrom>,
    /// WHERE predicate.
    pub where_clause: Option<Expr>,
}

/// A table referenced in a FROM clause.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectFrom {
    /// Table name.
    pub table: String,
}

impl SelectFrom {
    /// Creates a reference to `table`.
    #[must_use]
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

/// An ORDER BY entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    /// The expression to order by.
    pub expr: Expr,
    /// Whether DESC was specified; ASC and no direction both leave it false.
    pub desc: bool,
}
