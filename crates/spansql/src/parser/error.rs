//! Parser error types.

use crate::lexer::{Position, Span, TokenKind};

/// How many characters of input `ParseError::near` shows.
const NEAR_LEN: usize = 32;

/// Category of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unsupported literal form, unterminated string or comment, stray
    /// character.
    Lexical,
    /// A grammar production failed to match, input ended early, input was
    /// left over, or nesting exceeded the configured depth.
    Syntax,
    /// A logical operator applied to a non-boolean literal, or a length
    /// given to a type that does not take one.
    TypeMismatch,
}

impl ErrorKind {
    /// Returns a short lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lexical => "lexical error",
            Self::Syntax => "syntax error",
            Self::TypeMismatch => "type mismatch",
        }
    }
}

/// A parse error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error(
    "{}: {message} at {position} near `{near}`{}",
    .kind.as_str(),
    .statement.map(|i| format!(" (statement {})", i + 1)).unwrap_or_default()
)]
pub struct ParseError {
    /// The error category.
    pub kind: ErrorKind,
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// Line and column of `span.start`.
    pub position: Position,
    /// The input text at the error location, truncated.
    pub near: String,
    /// Expected tokens (if applicable).
    pub expected: Option<String>,
    /// The actual token found.
    pub found: Option<TokenKind>,
    /// Zero-based index of the failing statement in a DDL list.
    pub statement: Option<usize>,
}

impl ParseError {
    /// Creates a new parse error located in `input`.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>, input: &str, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            position: Position::locate(input, span.start),
            near: near(input, span.start),
            expected: None,
            found: None,
            statement: None,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(
        expected: impl Into<String>,
        found: TokenKind,
        input: &str,
        span: Span,
    ) -> Self {
        let expected_str: String = expected.into();
        let message = if found == TokenKind::Eof {
            format!("unexpected end of input: expected {expected_str}")
        } else {
            format!("unexpected token: expected {expected_str}, found {found:?}")
        };
        Self {
            expected: Some(expected_str),
            found: Some(found),
            ..Self::new(ErrorKind::Syntax, message, input, span)
        }
    }

    /// Records which statement of a DDL list failed.
    #[must_use]
    pub const fn in_statement(mut self, index: usize) -> Self {
        self.statement = Some(index);
        self
    }
}

/// Returns up to [`NEAR_LEN`] characters of `input` starting at `offset`.
fn near(input: &str, offset: usize) -> String {
    let mut offset = offset.min(input.len());
    while !input.is_char_boundary(offset) {
        offset -= 1;
    }
    input[offset..].chars().take(NEAR_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_locates_offset() {
        let input = "SELECT\n  Alias FROM";
        let err = ParseError::new(ErrorKind::Syntax, "boom", input, Span::new(9, 14));
        assert_eq!(err.position, Position { line: 2, column: 3 });
        assert_eq!(err.near, "Alias FROM");
        assert_eq!(
            err.to_string(),
            "syntax error: boom at line 2, column 3 near `Alias FROM`"
        );
    }

    #[test]
    fn test_unexpected_eof_message() {
        let err = ParseError::unexpected("identifier", TokenKind::Eof, "DROP TABLE", Span::at(10));
        assert_eq!(err.message, "unexpected end of input: expected identifier");
        assert_eq!(err.near, "");
        assert_eq!(err.found, Some(TokenKind::Eof));
    }

    #[test]
    fn test_statement_context() {
        let err = ParseError::new(ErrorKind::Lexical, "bad", "x", Span::at(0)).in_statement(2);
        assert!(err.to_string().ends_with("(statement 3)"));
    }

    #[test]
    fn test_near_is_truncated() {
        let input = "x".repeat(100);
        let err = ParseError::new(ErrorKind::Syntax, "long", &input, Span::at(0));
        assert_eq!(err.near.len(), NEAR_LEN);
    }
}
