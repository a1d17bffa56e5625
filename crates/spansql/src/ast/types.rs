//! Column type descriptors and column definitions.

use core::fmt;

/// Scalar base types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeBase {
    Bool,
    Int64,
    Float64,
    String,
    Bytes,
    Date,
    Timestamp,
}

impl TypeBase {
    /// Returns the SQL name of the type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "BOOL",
            Self::Int64 => "INT64",
            Self::Float64 => "FLOAT64",
            Self::String => "STRING",
            Self::Bytes => "BYTES",
            Self::Date => "DATE",
            Self::Timestamp => "TIMESTAMP",
        }
    }

    /// Returns true for the types that take a length (`STRING` and `BYTES`).
    #[must_use]
    pub const fn is_sized(&self) -> bool {
        matches!(self, Self::String | Self::Bytes)
    }
}

impl fmt::Display for TypeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The length of a `STRING` or `BYTES` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Length {
    /// `MAX`: the largest length the database allows.
    Max,
    /// An explicit, positive length.
    Fixed(u64),
}

/// A column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Type {
    /// Whether this is `ARRAY<base>`.
    pub array: bool,
    /// The scalar (element) type.
    pub base: TypeBase,
    /// Length; present exactly when `base` is sized.
    pub len: Option<Length>,
}

impl Type {
    /// Creates a non-array type without a length.
    #[must_use]
    pub const fn scalar(base: TypeBase) -> Self {
        Self {
            array: false,
            base,
            len: None,
        }
    }

    /// Creates a `STRING(len)` type.
    #[must_use]
    pub const fn string(len: Length) -> Self {
        Self {
            array: false,
            base: TypeBase::String,
            len: Some(len),
        }
    }

    /// Creates a `BYTES(len)` type.
    #[must_use]
    pub const fn bytes(len: Length) -> Self {
        Self {
            array: false,
            base: TypeBase::Bytes,
            len: Some(len),
        }
    }

    /// Wraps the type in `ARRAY<...>`.
    #[must_use]
    pub const fn array(mut self) -> Self {
        self.array = true;
        self
    }
}

/// Column options set with `OPTIONS (...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnOptions {
    /// `Some(true)` for `allow_commit_timestamp = true`, `Some(false)` for
    /// `= null`, `None` when not given.
    pub allow_commit_timestamp: Option<bool>,
}

/// A column definition for CREATE TABLE and ALTER TABLE.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// Column type.
    pub ty: Type,
    /// Whether NOT NULL was specified.
    pub not_null: bool,
    /// Column options.
    pub options: ColumnOptions,
}

impl ColumnDef {
    /// Creates a new, nullable column definition.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            not_null: false,
            options: ColumnOptions::default(),
        }
    }

    /// Sets the column as NOT NULL.
    #[must_use]
    pub const fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Sets the `allow_commit_timestamp` option.
    #[must_use]
    pub const fn allow_commit_timestamp(mut self, allow: bool) -> Self {
        self.options.allow_commit_timestamp = Some(allow);
        self
    }
}
