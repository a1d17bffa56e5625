//! Expression AST types.

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonOp {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `=`
    Eq,
    /// `!=` or `<>`
    Ne,
    /// `LIKE`
    Like,
    /// `NOT LIKE`
    NotLike,
}

impl ComparisonOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
        }
    }
}

/// Logical connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogicalOp {
    And,
    Or,
    /// Unary; the only operator without a left operand.
    Not,
}

impl LogicalOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }
}

/// Arithmetic sign operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `+`
    Plus,
}

/// A scalar expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    IntegerLiteral(i64),
    FloatLiteral(f64),
    StringLiteral(String),
    BytesLiteral(Vec<u8>),
    BoolLiteral(bool),
    NullLiteral,

    /// `*` in a select list.
    Star,

    /// A column or other identifier reference.
    Id(String),

    /// A named query parameter (`@name`), without the `@`.
    Param(String),

    /// A sign applied to something other than a numeric literal.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },

    /// A binary comparison.
    Comparison {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: ComparisonOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// `expr [NOT] BETWEEN low AND high`.
    Between {
        /// The expression to check.
        expr: Box<Expr>,
        /// Lower bound.
        low: Box<Expr>,
        /// Upper bound.
        high: Box<Expr>,
        /// Whether this is NOT BETWEEN.
        negated: bool,
    },

    /// `AND`, `OR`, or `NOT`.
    Logical {
        /// Left operand, absent exactly when `op` is [`LogicalOp::Not`].
        left: Option<Box<Expr>>,
        /// Operator.
        op: LogicalOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// `expr IS [NOT] value`.
    Is {
        /// The expression to check.
        expr: Box<Expr>,
        /// Whether this is IS NOT.
        negated: bool,
        /// The value compared against, usually NULL.
        value: Box<Expr>,
    },
}

impl Expr {
    /// Creates an identifier reference.
    #[must_use]
    pub fn id(name: impl Into<String>) -> Self {
        Self::Id(name.into())
    }

    /// Creates a parameter reference.
    #[must_use]
    pub fn param(name: impl Into<String>) -> Self {
        Self::Param(name.into())
    }

    /// Creates a string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::StringLiteral(value.into())
    }

    /// Creates a comparison.
    #[must_use]
    pub fn comparison(left: Self, op: ComparisonOp, right: Self) -> Self {
        Self::Comparison {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates `left AND right`.
    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::Logical {
            left: Some(Box::new(left)),
            op: LogicalOp::And,
            right: Box::new(right),
        }
    }

    /// Creates `left OR right`.
    #[must_use]
    pub fn or(left: Self, right: Self) -> Self {
        Self::Logical {
            left: Some(Box::new(left)),
            op: LogicalOp::Or,
            right: Box::new(right),
        }
    }

    /// Creates `NOT operand`.
    #[must_use]
    pub fn not(operand: Self) -> Self {
        Self::Logical {
            left: None,
            op: LogicalOp::Not,
            right: Box::new(operand),
        }
    }

    /// Creates `expr IS [NOT] value`.
    #[must_use]
    pub fn is(expr: Self, negated: bool, value: Self) -> Self {
        Self::Is {
            expr: Box::new(expr),
            negated,
            value: Box::new(value),
        }
    }

    /// Returns true for literals that can never be boolean-valued.
    #[must_use]
    pub const fn is_non_boolean_literal(&self) -> bool {
        matches!(
            self,
            Self::IntegerLiteral(_)
                | Self::FloatLiteral(_)
                | Self::StringLiteral(_)
                | Self::BytesLiteral(_)
        )
    }

    /// Returns true for any literal, including TRUE/FALSE/NULL.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        self.is_non_boolean_literal() || matches!(self, Self::BoolLiteral(_) | Self::NullLiteral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_classification() {
        assert!(Expr::IntegerLiteral(1).is_non_boolean_literal());
        assert!(Expr::string("x").is_non_boolean_literal());
        assert!(!Expr::BoolLiteral(true).is_non_boolean_literal());
        assert!(!Expr::NullLiteral.is_non_boolean_literal());
        assert!(Expr::NullLiteral.is_literal());
        assert!(!Expr::id("A").is_literal());
        assert!(!Expr::param("p").is_literal());
    }

    #[test]
    fn test_not_has_no_left_operand() {
        let Expr::Logical { left, op, .. } = Expr::not(Expr::id("B")) else {
            panic!("Expected logical expression");
        };
        assert!(left.is_none());
        assert_eq!(op, LogicalOp::Not);
    }
}
