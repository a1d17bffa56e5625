//! Parser cursor and expression parsing.

use super::config::ParserConfig;
use super::error::{ErrorKind, ParseError};
use super::pratt::{
    infix_binding_power, prefix_binding_power, token_to_comparison_op, token_to_logical_op,
    token_to_unary_op, COMPARISON_BP,
};
use crate::ast::{ComparisonOp, Expr, LogicalOp, UnaryOp};
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};

/// Spanner SQL parser.
///
/// A parser owns a cursor over a single input string and pulls tokens from
/// the lexer as it needs them. Each `parse_*` method consumes one grammar
/// production and leaves the cursor after it; [`Parser::remaining`] shows
/// what is left. Parsers are cheap to create and are never shared.
pub struct Parser<'a> {
    pub(super) lexer: Lexer<'a>,
    pub(super) current: Token,
    config: ParserConfig,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    /// Creates a new parser with explicit settings.
    #[must_use]
    pub fn with_config(input: &'a str, config: ParserConfig) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            config,
            depth: 0,
        }
    }

    /// Returns the input that has not been parsed yet, starting at the next
    /// token. Trailing whitespace and comments count as parsed.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        if self.current.is_eof() {
            ""
        } else {
            &self.lexer.input()[self.current.span.start..]
        }
    }

    /// Returns true once all input has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.current.is_eof()
    }

    /// Fails unless all input has been consumed.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` pointing at the first unparsed token.
    pub fn finish(&self) -> Result<(), ParseError> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected("end of input"))
        }
    }

    /// Parses one expression, leaving any following input unparsed.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if no valid expression starts at the cursor.
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_expression(0)
    }

    /// Parses an expression using Pratt parsing.
    pub(super) fn parse_expression(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(self.error(
                ErrorKind::Syntax,
                format!(
                    "expression nested more than {} levels deep",
                    self.config.max_depth
                ),
                self.current.span,
            ));
        }
        self.depth += 1;
        let result = self.parse_infix(min_bp);
        self.depth -= 1;
        result
    }

    /// Parses a prefix expression followed by any infix operators binding at
    /// least as tightly as `min_bp`.
    fn parse_infix(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        // A prefix NOT has already taken in the comparison that follows it.
        let mut compared = self.check_keyword(Keyword::Not);
        let mut lhs = self.parse_prefix(min_bp)?;

        loop {
            let Some((l_bp, r_bp)) = infix_binding_power(&self.current.kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            if l_bp == COMPARISON_BP {
                // Comparisons do not chain.
                if compared {
                    break;
                }
                compared = true;
            }

            let op_span = self.current.span;
            if let Some(op) = token_to_logical_op(&self.current.kind) {
                self.advance();
                let rhs = self.parse_expression(r_bp)?;
                lhs = self.logical(Some(lhs), op, rhs, op_span)?;
                // A comparison left over after AND/OR would bind looser than it.
                compared = true;
                continue;
            }

            lhs = match &self.current.kind {
                TokenKind::Keyword(Keyword::Is) => {
                    self.advance();
                    let negated = self.eat_keyword(Keyword::Not);
                    let value = self.parse_primary()?;
                    Expr::is(lhs, negated, value)
                }
                TokenKind::Keyword(Keyword::Between) => {
                    self.advance();
                    self.parse_between(lhs, false, r_bp)?
                }
                TokenKind::Keyword(Keyword::Not) => match self.peek().kind {
                    TokenKind::Keyword(Keyword::Like) => {
                        self.advance();
                        self.advance();
                        let rhs = self.parse_expression(r_bp)?;
                        Expr::comparison(lhs, ComparisonOp::NotLike, rhs)
                    }
                    TokenKind::Keyword(Keyword::Between) => {
                        self.advance();
                        self.advance();
                        self.parse_between(lhs, true, r_bp)?
                    }
                    _ => break,
                },
                kind => {
                    let Some(op) = token_to_comparison_op(kind) else {
                        break;
                    };
                    self.advance();
                    let rhs = self.parse_expression(r_bp)?;
                    Expr::comparison(lhs, op, rhs)
                }
            };
        }

        Ok(lhs)
    }

    /// Parses the bounds of `[NOT] BETWEEN low AND high`.
    fn parse_between(&mut self, expr: Expr, negated: bool, bp: u8) -> Result<Expr, ParseError> {
        let low = self.parse_expression(bp)?;
        self.expect_keyword(Keyword::And)?;
        let high = self.parse_expression(bp)?;
        Ok(Expr::Between {
            expr: Box::new(expr),
            low: Box::new(low),
            high: Box::new(high),
            negated,
        })
    }

    /// Builds a logical operation, rejecting non-boolean literal operands.
    fn logical(
        &self,
        left: Option<Expr>,
        op: LogicalOp,
        right: Expr,
        span: Span,
    ) -> Result<Expr, ParseError> {
        if let Some(operand) = left
            .iter()
            .chain(core::iter::once(&right))
            .find(|e| e.is_non_boolean_literal())
        {
            return Err(self.error(
                ErrorKind::TypeMismatch,
                format!("{} requires boolean operands, got {operand:?}", op.as_str()),
                span,
            ));
        }
        Ok(Expr::Logical {
            left: left.map(Box::new),
            op,
            right: Box::new(right),
        })
    }

    /// Parses a prefix expression.
    fn parse_prefix(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let span = self.current.span;
        let Some(bp) = prefix_binding_power(&self.current.kind) else {
            return Err(self.unexpected("expression"));
        };

        if self.check_keyword(Keyword::Not) {
            if min_bp > bp {
                return Err(self.error(
                    ErrorKind::Syntax,
                    "NOT cannot be used as an operand here without parentheses",
                    span,
                ));
            }
            self.advance();
            let operand = self.parse_expression(bp)?;
            return self.logical(None, LogicalOp::Not, operand, span);
        }

        if let Some(op) = token_to_unary_op(&self.current.kind) {
            self.advance();
            // A sign directly before a numeric literal is part of the literal.
            match &self.current.kind {
                TokenKind::Integer(n) => {
                    let value = self.integer_value(op == UnaryOp::Neg, *n, span)?;
                    self.advance();
                    return Ok(Expr::IntegerLiteral(value));
                }
                TokenKind::Float(f) => {
                    let value = if op == UnaryOp::Neg { -*f } else { *f };
                    self.advance();
                    return Ok(Expr::FloatLiteral(value));
                }
                _ => {}
            }
            let operand = self.parse_expression(bp)?;
            return Ok(Expr::Unary {
                op,
                operand: Box::new(operand),
            });
        }

        self.parse_primary()
    }

    /// Parses an atom: a literal, identifier, parameter, or parenthesized
    /// expression.
    pub(super) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let expr = match &self.current.kind {
            TokenKind::Integer(n) => {
                Expr::IntegerLiteral(self.integer_value(false, *n, self.current.span)?)
            }
            TokenKind::Float(f) => Expr::FloatLiteral(*f),
            TokenKind::String(s) => Expr::StringLiteral(s.clone()),
            TokenKind::Bytes(b) => Expr::BytesLiteral(b.clone()),
            TokenKind::Param(name) => Expr::Param(name.clone()),
            TokenKind::Identifier(name) => Expr::Id(name.clone()),
            TokenKind::Keyword(Keyword::True) => Expr::BoolLiteral(true),
            TokenKind::Keyword(Keyword::False) => Expr::BoolLiteral(false),
            TokenKind::Keyword(Keyword::Null) => Expr::NullLiteral,
            TokenKind::Keyword(kw) if !kw.is_reserved() => {
                Expr::Id(self.lexer.slice(self.current.span).to_owned())
            }
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.parse_expression(0)?;
                self.expect(&TokenKind::RightParen)?;
                return Ok(expr);
            }
            _ => return Err(self.unexpected("expression")),
        };
        self.advance();
        Ok(expr)
    }

    /// Applies a sign to an integer literal magnitude.
    fn integer_value(&self, negative: bool, magnitude: u64, span: Span) -> Result<i64, ParseError> {
        let value = if negative {
            0_i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        };
        value.ok_or_else(|| {
            self.error(
                ErrorKind::Lexical,
                "integer literal out of range for INT64",
                span,
            )
        })
    }

    // --- Helper methods ---

    /// Advances to the next token.
    pub(super) fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Returns the token after the current one without consuming anything.
    pub(super) fn peek(&self) -> Token {
        self.lexer.clone().next_token()
    }

    /// Checks if the current token matches the given kind.
    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current.kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    pub(super) fn check_keyword(&self, keyword: Keyword) -> bool {
        matches!(&self.current.kind, TokenKind::Keyword(kw) if *kw == keyword)
    }

    /// Consumes the current token if it matches the given kind.
    pub(super) fn eat(&mut self, kind: &TokenKind) -> bool {
        let matched = self.check(kind);
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes the current token if it is the given keyword.
    pub(super) fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        let matched = self.check_keyword(keyword);
        if matched {
            self.advance();
        }
        matched
    }

    /// Expects the current token to be the given kind.
    pub(super) fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected(format!("{kind:?}")))
        }
    }

    /// Expects the current token to be the given keyword.
    pub(super) fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    /// Expects and returns an identifier. Non-reserved keywords are accepted
    /// with their original spelling.
    pub(super) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        let name = match &self.current.kind {
            TokenKind::Identifier(name) => name.clone(),
            TokenKind::Keyword(kw) if !kw.is_reserved() => {
                self.lexer.slice(self.current.span).to_owned()
            }
            _ => return Err(self.unexpected("identifier")),
        };
        self.advance();
        Ok(name)
    }

    /// Builds an error for the current token. A lexer error token is
    /// reported as the lexical error it carries.
    pub(super) fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        if let TokenKind::Error(message) = &self.current.kind {
            return self.error(ErrorKind::Lexical, message.clone(), self.current.span);
        }
        ParseError::unexpected(
            expected,
            self.current.kind.clone(),
            self.lexer.input(),
            self.current.span,
        )
    }

    /// Builds an error located in this parser's input.
    pub(super) fn error(&self, kind: ErrorKind, message: impl Into<String>, span: Span) -> ParseError {
        ParseError::new(kind, message, self.lexer.input(), span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Expr, ParseError> {
        let mut parser = Parser::new(input);
        let expr = parser.parse_expr()?;
        parser.finish()?;
        Ok(expr)
    }

    #[test]
    fn test_remaining_after_partial_parse() {
        let mut parser = Parser::new("A = 1 ORDER BY A");
        let expr = parser.parse_expr().unwrap();
        assert_eq!(
            expr,
            Expr::comparison(Expr::id("A"), ComparisonOp::Eq, Expr::IntegerLiteral(1))
        );
        assert_eq!(parser.remaining(), "ORDER BY A");
        assert!(parser.finish().is_err());
    }

    #[test]
    fn test_trailing_comment_is_consumed() {
        let mut parser = Parser::new("A -- done\n");
        parser.parse_expr().unwrap();
        assert_eq!(parser.remaining(), "");
        assert!(parser.is_at_end());
    }

    #[test]
    fn test_non_reserved_keyword_as_identifier() {
        assert_eq!(parse("Key").unwrap(), Expr::id("Key"));
        assert_eq!(parse("date").unwrap(), Expr::id("date"));
    }

    #[test]
    fn test_comparisons_do_not_chain() {
        let mut parser = Parser::new("A < B < C");
        parser.parse_expr().unwrap();
        assert_eq!(parser.remaining(), "< C");

        let mut parser = Parser::new("NOT A = B = C");
        parser.parse_expr().unwrap();
        assert_eq!(parser.remaining(), "= C");
    }

    #[test]
    fn test_comparison_after_logical_is_left_over() {
        let mut parser = Parser::new("A OR B < C < D");
        assert_eq!(
            parser.parse_expr().unwrap(),
            Expr::or(
                Expr::id("A"),
                Expr::comparison(Expr::id("B"), ComparisonOp::Lt, Expr::id("C"))
            )
        );
        assert_eq!(parser.remaining(), "< D");

        let mut parser = Parser::new("A AND B = C = D");
        parser.parse_expr().unwrap();
        assert_eq!(parser.remaining(), "= D");
    }

    #[test]
    fn test_not_is_not_a_comparison_operand() {
        let err = parse("A = NOT B").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
    }

    #[test]
    fn test_sign_on_non_literal() {
        assert_eq!(
            parse("-A").unwrap(),
            Expr::Unary {
                op: UnaryOp::Neg,
                operand: Box::new(Expr::id("A")),
            }
        );
        assert_eq!(parse("+7").unwrap(), Expr::IntegerLiteral(7));
    }

    #[test]
    fn test_integer_range() {
        assert_eq!(
            parse("-9223372036854775808").unwrap(),
            Expr::IntegerLiteral(i64::MIN)
        );
        let err = parse("9223372036854775808").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
    }

    #[test]
    fn test_depth_limit() {
        let config = ParserConfig::default().with_max_depth(8);
        let nested = format!("{}A{}", "(".repeat(20), ")".repeat(20));
        let mut parser = Parser::with_config(&nested, config);
        let err = parser.parse_expr().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert!(err.message.contains("nested"));

        let shallow = format!("{}A{}", "(".repeat(4), ")".repeat(4));
        let mut parser = Parser::with_config(&shallow, config);
        assert_eq!(parser.parse_expr().unwrap(), Expr::id("A"));
    }

    #[test]
    fn test_lexer_error_surfaces_as_lexical() {
        let err = parse("A = 0b101").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert!(err.message.contains("binary"));
        assert_eq!(err.span.start, 4);
    }
}
