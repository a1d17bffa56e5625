//! Token types for the SQL lexer.

use super::Span;

/// Spanner SQL keywords recognized by the parser.
///
/// Reserved keywords can never be used as identifiers. Non-reserved keywords
/// only have meaning in specific positions and are accepted as identifiers
/// everywhere else (a column may be called `Key` or `Date`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    // Reserved
    All,
    And,
    Array,
    /// Reserved so that `AS` is never read as a name. Aliases are not
    /// supported, so no production consumes it.
    As,
    Asc,
    Between,
    By,
    Create,
    Desc,
    Distinct,
    False,
    From,
    In,
    Is,
    Like,
    Limit,
    No,
    Not,
    Null,
    On,
    Or,
    Order,
    Select,
    Set,
    True,
    Where,

    // DDL
    Action,
    Add,
    Alter,
    Cascade,
    Column,
    Delete,
    Drop,
    Index,
    Interleave,
    Key,
    Max,
    NullFiltered,
    Offset,
    Options,
    Parent,
    Primary,
    Storing,
    Table,
    Unique,

    // Base types
    Bool,
    Bytes,
    Date,
    Float64,
    Int64,
    String,
    Timestamp,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ALL" => Some(Self::All),
            "AND" => Some(Self::And),
            "ARRAY" => Some(Self::Array),
            "AS" => Some(Self::As),
            "ASC" => Some(Self::Asc),
            "BETWEEN" => Some(Self::Between),
            "BY" => Some(Self::By),
            "CREATE" => Some(Self::Create),
            "DESC" => Some(Self::Desc),
            "DISTINCT" => Some(Self::Distinct),
            "FALSE" => Some(Self::False),
            "FROM" => Some(Self::From),
            "IN" => Some(Self::In),
            "IS" => Some(Self::Is),
            "LIKE" => Some(Self::Like),
            "LIMIT" => Some(Self::Limit),
            "NO" => Some(Self::No),
            "NOT" => Some(Self::Not),
            "NULL" => Some(Self::Null),
            "ON" => Some(Self::On),
            "OR" => Some(Self::Or),
            "ORDER" => Some(Self::Order),
            "SELECT" => Some(Self::Select),
            "SET" => Some(Self::Set),
            "TRUE" => Some(Self::True),
            "WHERE" => Some(Self::Where),
            "ACTION" => Some(Self::Action),
            "ADD" => Some(Self::Add),
            "ALTER" => Some(Self::Alter),
            "CASCADE" => Some(Self::Cascade),
            "COLUMN" => Some(Self::Column),
            "DELETE" => Some(Self::Delete),
            "DROP" => Some(Self::Drop),
            "INDEX" => Some(Self::Index),
            "INTERLEAVE" => Some(Self::Interleave),
            "KEY" => Some(Self::Key),
            "MAX" => Some(Self::Max),
            "NULL_FILTERED" => Some(Self::NullFiltered),
            "OFFSET" => Some(Self::Offset),
            "OPTIONS" => Some(Self::Options),
            "PARENT" => Some(Self::Parent),
            "PRIMARY" => Some(Self::Primary),
            "STORING" => Some(Self::Storing),
            "TABLE" => Some(Self::Table),
            "UNIQUE" => Some(Self::Unique),
            "BOOL" => Some(Self::Bool),
            "BYTES" => Some(Self::Bytes),
            "DATE" => Some(Self::Date),
            "FLOAT64" => Some(Self::Float64),
            "INT64" => Some(Self::Int64),
            "STRING" => Some(Self::String),
            "TIMESTAMP" => Some(Self::Timestamp),
            _ => None,
        }
    }

    /// Returns the keyword as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::And => "AND",
            Self::Array => "ARRAY",
            Self::As => "AS",
            Self::Asc => "ASC",
            Self::Between => "BETWEEN",
            Self::By => "BY",
            Self::Create => "CREATE",
            Self::Desc => "DESC",
            Self::Distinct => "DISTINCT",
            Self::False => "FALSE",
            Self::From => "FROM",
            Self::In => "IN",
            Self::Is => "IS",
            Self::Like => "LIKE",
            Self::Limit => "LIMIT",
            Self::No => "NO",
            Self::Not => "NOT",
            Self::Null => "NULL",
            Self::On => "ON",
            Self::Or => "OR",
            Self::Order => "ORDER",
            Self::Select => "SELECT",
            Self::Set => "SET",
            Self::True => "TRUE",
            Self::Where => "WHERE",
            Self::Action => "ACTION",
            Self::Add => "ADD",
            Self::Alter => "ALTER",
            Self::Cascade => "CASCADE",
            Self::Column => "COLUMN",
            Self::Delete => "DELETE",
            Self::Drop => "DROP",
            Self::Index => "INDEX",
            Self::Interleave => "INTERLEAVE",
            Self::Key => "KEY",
            Self::Max => "MAX",
            Self::NullFiltered => "NULL_FILTERED",
            Self::Offset => "OFFSET",
            Self::Options => "OPTIONS",
            Self::Parent => "PARENT",
            Self::Primary => "PRIMARY",
            Self::Storing => "STORING",
            Self::Table => "TABLE",
            Self::Unique => "UNIQUE",
            Self::Bool => "BOOL",
            Self::Bytes => "BYTES",
            Self::Date => "DATE",
            Self::Float64 => "FLOAT64",
            Self::Int64 => "INT64",
            Self::String => "STRING",
            Self::Timestamp => "TIMESTAMP",
        }
    }

    /// Returns true if the keyword can never appear as an identifier.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        matches!(
            self,
            Self::All
                | Self::And
                | Self::Array
                | Self::As
                | Self::Asc
                | Self::Between
                | Self::By
                | Self::Create
                | Self::Desc
                | Self::Distinct
                | Self::False
                | Self::From
                | Self::In
                | Self::Is
                | Self::Like
                | Self::Limit
                | Self::No
                | Self::Not
                | Self::Null
                | Self::On
                | Self::Or
                | Self::Order
                | Self::Select
                | Self::Set
                | Self::True
                | Self::Where
        )
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    /// Integer literal magnitude (e.g., 42 or 0xff). Signs are separate tokens.
    Integer(u64),
    /// Float literal (e.g., 1.5, .1e4, 58.)
    Float(f64),
    /// String literal (e.g., "hello" or 'hello')
    String(String),
    /// Bytes literal (e.g., b"\x00abc")
    Bytes(Vec<u8>),
    /// Named query parameter (e.g., @limit), without the `@`.
    Param(String),

    // Identifiers and keywords
    /// Identifier (e.g., `FooBar`), case preserved.
    Identifier(String),
    /// SQL keyword
    Keyword(Keyword),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// =
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,

    // Special
    /// End of input
    Eof,
    /// Lexical error, with a description of what went wrong.
    Error(String),
}

/// A token with its span in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source text.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Keyword::from_str("SELECT"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("select"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("Null_Filtered"), Some(Keyword::NullFiltered));
        assert_eq!(Keyword::from_str("Count"), None);
    }

    #[test]
    fn test_keyword_round_trips_through_as_str() {
        for kw in [
            Keyword::Array,
            Keyword::NullFiltered,
            Keyword::Float64,
            Keyword::Interleave,
        ] {
            assert_eq!(Keyword::from_str(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn test_reserved_keywords() {
        assert!(Keyword::Select.is_reserved());
        assert!(Keyword::Null.is_reserved());
        assert!(!Keyword::Key.is_reserved());
        assert!(!Keyword::Date.is_reserved());
        assert!(!Keyword::Max.is_reserved());
    }

    #[test]
    fn test_token_is_eof() {
        assert!(Token::new(TokenKind::Eof, Span::at(0)).is_eof());
        assert!(!Token::new(TokenKind::Plus, Span::new(0, 1)).is_eof());
    }
}
