//! SELECT query parsing.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{Expr, Order, Query, Select, SelectFrom};
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    /// Parses a query, leaving any following input unparsed.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input does not start with a valid query.
    pub fn parse_query(&mut self) -> Result<Query, ParseError> {
        let select = self.parse_select()?;

        let order = if self.eat_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            self.parse_order_list()?
        } else {
            vec![]
        };

        let (limit, offset) = if self.eat_keyword(Keyword::Limit) {
            let limit = self.parse_expression(0)?;
            let offset = if self.eat_keyword(Keyword::Offset) {
                Some(self.parse_expression(0)?)
            } else {
                None
            };
            (Some(limit), offset)
        } else {
            (None, None)
        };

        Ok(Query {
            select,
            order,
            limit,
            offset,
        })
    }

    /// Parses `SELECT [DISTINCT] list [FROM tables] [WHERE expr]`.
    fn parse_select(&mut self) -> Result<Select, ParseError> {
        self.expect_keyword(Keyword::Select)?;

        let distinct = if self.eat_keyword(Keyword::Distinct) {
            true
        } else {
            self.eat_keyword(Keyword::All);
            false
        };

        let mut list = vec![];
        loop {
            if self.eat(&TokenKind::Star) {
                list.push(Expr::Star);
            } else {
                list.push(self.parse_expression(0)?);
            }
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }

        let mut from = vec![];
        if self.eat_keyword(Keyword::From) {
            loop {
                from.push(SelectFrom {
                    table: self.expect_identifier()?,
                });
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }

        let where_clause = if self.eat_keyword(Keyword::Where) {
            Some(self.parse_expression(0)?)
        } else {
            None
        };

        Ok(Select {
            distinct,
            list,
            from,
            where_clause,
        })
    }

    /// Parses an ORDER BY list.
    fn parse_order_list(&mut self) -> Result<Vec<Order>, ParseError> {
        let mut items = vec![];
        loop {
            let expr = self.parse_expression(0)?;
            let desc = if self.eat_keyword(Keyword::Desc) {
                true
            } else {
                self.eat_keyword(Keyword::Asc);
                false
            };
            items.push(Order { expr, desc });

            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }
}
