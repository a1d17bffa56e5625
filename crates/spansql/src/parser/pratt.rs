//! Binding powers for the Pratt expression parser.
//!
//! Lowest to highest: `OR` < `AND` < prefix `NOT` < comparisons < sign.

use crate::ast::{ComparisonOp, LogicalOp, UnaryOp};
use crate::lexer::{Keyword, TokenKind};

/// Minimum binding power of the operand of a prefix `NOT`: it takes in
/// comparisons but stops at `AND`/`OR`.
pub const NOT_OPERAND_BP: u8 = 5;

/// Left binding power shared by every comparison operator.
pub const COMPARISON_BP: u8 = 5;

/// Minimum binding power of the operand of a sign.
pub const SIGN_OPERAND_BP: u8 = 9;

/// Returns the prefix binding power for a token.
///
/// Returns `None` if the token cannot start an expression.
#[must_use]
pub const fn prefix_binding_power(kind: &TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Minus | TokenKind::Plus => Some(SIGN_OPERAND_BP),
        TokenKind::Keyword(Keyword::Not) => Some(NOT_OPERAND_BP),
        TokenKind::Integer(_)
        | TokenKind::Float(_)
        | TokenKind::String(_)
        | TokenKind::Bytes(_)
        | TokenKind::Param(_)
        | TokenKind::Identifier(_)
        | TokenKind::LeftParen
        | TokenKind::Keyword(Keyword::True | Keyword::False | Keyword::Null) => Some(0),
        // Non-reserved keywords double as identifiers.
        TokenKind::Keyword(kw) if !kw.is_reserved() => Some(0),
        _ => None,
    }
}

/// Returns the infix binding power for a token.
///
/// Returns `(left_bp, right_bp)` where:
/// - Higher binding power = binds tighter
/// - Left associative: `left_bp` < `right_bp`
///
/// `NOT` is listed because it introduces `NOT LIKE` and `NOT BETWEEN` in
/// infix position. Returns `None` if the token is not an infix operator.
#[must_use]
pub const fn infix_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::Keyword(Keyword::Or) => Some((1, 2)),
        TokenKind::Keyword(Keyword::And) => Some((3, 4)),
        TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::LtEq
        | TokenKind::Gt
        | TokenKind::GtEq
        | TokenKind::Keyword(Keyword::Like | Keyword::Is | Keyword::Between | Keyword::Not) => {
            Some((COMPARISON_BP, COMPARISON_BP + 1))
        }
        _ => None,
    }
}

/// Converts a token to a comparison operator.
///
/// `NOT LIKE` spans two tokens and is handled by the parser.
#[must_use]
pub const fn token_to_comparison_op(kind: &TokenKind) -> Option<ComparisonOp> {
    match kind {
        TokenKind::Lt => Some(ComparisonOp::Lt),
        TokenKind::LtEq => Some(ComparisonOp::Le),
        TokenKind::Gt => Some(ComparisonOp::Gt),
        TokenKind::GtEq => Some(ComparisonOp::Ge),
        TokenKind::Eq => Some(ComparisonOp::Eq),
        TokenKind::NotEq => Some(ComparisonOp::Ne),
        TokenKind::Keyword(Keyword::Like) => Some(ComparisonOp::Like),
        _ => None,
    }
}

/// Converts a token to a binary logical operator.
#[must_use]
pub const fn token_to_logical_op(kind: &TokenKind) -> Option<LogicalOp> {
    match kind {
        TokenKind::Keyword(Keyword::And) => Some(LogicalOp::And),
        TokenKind::Keyword(Keyword::Or) => Some(LogicalOp::Or),
        _ => None,
    }
}

/// Converts a token to a sign operator.
#[must_use]
pub const fn token_to_unary_op(kind: &TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Minus => Some(UnaryOp::Neg),
        TokenKind::Plus => Some(UnaryOp::Plus),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_ordering() {
        let or_bp = infix_binding_power(&TokenKind::Keyword(Keyword::Or)).unwrap();
        let and_bp = infix_binding_power(&TokenKind::Keyword(Keyword::And)).unwrap();
        let lt_bp = infix_binding_power(&TokenKind::Lt).unwrap();

        // AND binds tighter than OR.
        assert!(and_bp.0 > or_bp.0);
        // NOT takes in comparisons but not AND.
        assert!(NOT_OPERAND_BP > and_bp.0);
        assert!(NOT_OPERAND_BP <= lt_bp.0);
        // Signs bind tighter than comparisons.
        assert!(SIGN_OPERAND_BP > lt_bp.1);
    }

    #[test]
    fn test_left_associativity() {
        let (left, right) = infix_binding_power(&TokenKind::Keyword(Keyword::And)).unwrap();
        assert!(left < right);
    }

    #[test]
    fn test_prefix_tokens() {
        assert_eq!(
            prefix_binding_power(&TokenKind::Keyword(Keyword::Not)),
            Some(NOT_OPERAND_BP)
        );
        assert_eq!(prefix_binding_power(&TokenKind::Param(String::from("p"))), Some(0));
        assert_eq!(prefix_binding_power(&TokenKind::Keyword(Keyword::Key)), Some(0));
        assert_eq!(prefix_binding_power(&TokenKind::Keyword(Keyword::Select)), None);
        assert_eq!(prefix_binding_power(&TokenKind::RightParen), None);
    }

    #[test]
    fn test_token_conversions() {
        assert_eq!(token_to_comparison_op(&TokenKind::NotEq), Some(ComparisonOp::Ne));
        assert_eq!(
            token_to_comparison_op(&TokenKind::Keyword(Keyword::Like)),
            Some(ComparisonOp::Like)
        );
        assert_eq!(token_to_comparison_op(&TokenKind::Plus), None);
        assert_eq!(
            token_to_logical_op(&TokenKind::Keyword(Keyword::Or)),
            Some(LogicalOp::Or)
        );
        assert_eq!(token_to_unary_op(&TokenKind::Minus), Some(UnaryOp::Neg));
        assert_eq!(token_to_unary_op(&TokenKind::Star), None);
    }
}
