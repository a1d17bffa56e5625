//! Abstract Syntax Tree (AST) types for queries and DDL statements.

mod ddl;
mod expression;
mod query;
mod types;

pub use ddl::{
    AlterTable, Alteration, CreateIndex, CreateTable, Ddl, DdlStmt, Interleave, KeyPart, OnDelete,
};
pub use expression::{ComparisonOp, Expr, LogicalOp, UnaryOp};
pub use query::{Order, Query, Select, SelectFrom};
pub use types::{ColumnDef, ColumnOptions, Length, Type, TypeBase};
