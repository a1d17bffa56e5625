//! DDL statement AST types.

use super::types::ColumnDef;

/// A sequence of DDL statements, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ddl {
    /// The statements.
    pub list: Vec<DdlStmt>,
}

/// A single DDL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DdlStmt {
    CreateTable(CreateTable),
    CreateIndex(CreateIndex),
    AlterTable(AlterTable),
    DropIndex {
        /// Index name.
        name: String,
    },
    DropTable {
        /// Table name.
        name: String,
    },
}

/// `CREATE TABLE`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateTable {
    /// Table name.
    pub name: String,
    /// Column definitions.
    pub columns: Vec<ColumnDef>,
    /// Primary key parts; may be empty.
    pub primary_key: Vec<KeyPart>,
    /// `INTERLEAVE IN PARENT` clause.
    pub interleave: Option<Interleave>,
}

/// `INTERLEAVE IN PARENT parent [ON DELETE ...]` on a table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interleave {
    /// Parent table name.
    pub parent: String,
    /// What happens to rows of this table when the parent row is deleted.
    pub on_delete: OnDelete,
}

/// `CREATE [UNIQUE] [NULL_FILTERED] INDEX`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateIndex {
    /// Index name.
    pub name: String,
    /// Indexed table.
    pub table: String,
    /// Key parts.
    pub columns: Vec<KeyPart>,
    /// Whether UNIQUE was specified.
    pub unique: bool,
    /// Whether NULL_FILTERED was specified.
    pub null_filtered: bool,
    /// `STORING (...)` columns.
    pub storing: Vec<String>,
    /// `INTERLEAVE IN table`.
    pub interleave: Option<String>,
}

impl CreateIndex {
    /// Creates a plain index with no options.
    #[must_use]
    pub fn new(name: impl Into<String>, table: impl Into<String>, columns: Vec<KeyPart>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            columns,
            unique: false,
            null_filtered: false,
            storing: Vec::new(),
            interleave: None,
        }
    }
}

/// `ALTER TABLE`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlterTable {
    /// Table name.
    pub name: String,
    /// The change to apply.
    pub alteration: Alteration,
}

/// A change made by `ALTER TABLE`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alteration {
    /// `ADD COLUMN def`
    AddColumn(ColumnDef),
    /// `DROP COLUMN name`
    DropColumn(String),
    /// `ALTER COLUMN def`
    AlterColumn(ColumnDef),
    /// `SET ON DELETE action`
    SetOnDelete(OnDelete),
}

/// Referential action for interleaved rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OnDelete {
    /// `NO ACTION` (default).
    #[default]
    NoAction,
    /// `CASCADE`
    Cascade,
}

impl OnDelete {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Cascade => "CASCADE",
        }
    }
}

/// A column reference with sort direction, used in keys and indexes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyPart {
    /// Column name.
    pub column: String,
    /// Whether DESC was specified.
    pub desc: bool,
}

impl KeyPart {
    /// Creates an ascending key part.
    #[must_use]
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            desc: false,
        }
    }

    /// Creates a descending key part.
    #[must_use]
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            desc: true,
        }
    }
}
