//! DDL statement parsing.

use tracing::trace;

use super::error::{ErrorKind, ParseError};
use super::parser::Parser;
use crate::ast::{
    AlterTable, Alteration, ColumnDef, ColumnOptions, CreateIndex, CreateTable, Ddl, DdlStmt,
    Interleave, KeyPart, Length, OnDelete, Type, TypeBase,
};
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    /// Parses a `;`-separated list of DDL statements up to the end of input.
    ///
    /// A trailing `;` is optional. Errors record the index of the statement
    /// that failed.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if any statement is invalid or input is left
    /// over after the last statement.
    pub fn parse_ddl(&mut self) -> Result<Ddl, ParseError> {
        let mut list = vec![];
        while !self.is_at_end() {
            let index = list.len();
            let stmt = self.parse_ddl_stmt().map_err(|e| e.in_statement(index))?;
            trace!(index, ?stmt, "parsed DDL statement");
            list.push(stmt);

            if !self.eat(&TokenKind::Semicolon) && !self.is_at_end() {
                return Err(self.unexpected("';' or end of input").in_statement(index));
            }
        }
        Ok(Ddl { list })
    }

    /// Parses a single DDL statement, leaving any following input unparsed.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input does not start with a valid DDL
    /// statement.
    pub fn parse_ddl_stmt(&mut self) -> Result<DdlStmt, ParseError> {
        if self.eat_keyword(Keyword::Create) {
            if self.eat_keyword(Keyword::Table) {
                return Ok(DdlStmt::CreateTable(self.parse_create_table()?));
            }
            let unique = self.eat_keyword(Keyword::Unique);
            let null_filtered = self.eat_keyword(Keyword::NullFiltered);
            if !self.eat_keyword(Keyword::Index) {
                let expected = if unique || null_filtered {
                    "INDEX"
                } else {
                    "TABLE or INDEX"
                };
                return Err(self.unexpected(expected));
            }
            let mut index = self.parse_create_index()?;
            index.unique = unique;
            index.null_filtered = null_filtered;
            return Ok(DdlStmt::CreateIndex(index));
        }

        if self.eat_keyword(Keyword::Alter) {
            self.expect_keyword(Keyword::Table)?;
            return Ok(DdlStmt::AlterTable(self.parse_alter_table()?));
        }

        if self.eat_keyword(Keyword::Drop) {
            if self.eat_keyword(Keyword::Table) {
                let name = self.expect_identifier()?;
                return Ok(DdlStmt::DropTable { name });
            }
            if self.eat_keyword(Keyword::Index) {
                let name = self.expect_identifier()?;
                return Ok(DdlStmt::DropIndex { name });
            }
            return Err(self.unexpected("TABLE or INDEX"));
        }

        Err(self.unexpected("CREATE, ALTER, or DROP"))
    }

    /// Parses the rest of `CREATE TABLE`.
    fn parse_create_table(&mut self) -> Result<CreateTable, ParseError> {
        let name = self.expect_identifier()?;

        self.expect(&TokenKind::LeftParen)?;
        let mut columns = vec![];
        while !self.check(&TokenKind::RightParen) {
            columns.push(self.parse_column_def()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RightParen)?;

        self.expect_keyword(Keyword::Primary)?;
        self.expect_keyword(Keyword::Key)?;
        let primary_key = self.parse_key_parts()?;

        let interleave = if self.eat(&TokenKind::Comma) {
            self.expect_keyword(Keyword::Interleave)?;
            self.expect_keyword(Keyword::In)?;
            self.expect_keyword(Keyword::Parent)?;
            let parent = self.expect_identifier()?;
            let on_delete = if self.eat_keyword(Keyword::On) {
                self.expect_keyword(Keyword::Delete)?;
                self.parse_on_delete()?
            } else {
                OnDelete::default()
            };
            Some(Interleave { parent, on_delete })
        } else {
            None
        };

        Ok(CreateTable {
            name,
            columns,
            primary_key,
            interleave,
        })
    }

    /// Parses the rest of `CREATE ... INDEX`.
    fn parse_create_index(&mut self) -> Result<CreateIndex, ParseError> {
        let name = self.expect_identifier()?;
        self.expect_keyword(Keyword::On)?;
        let table = self.expect_identifier()?;

        let columns_span = self.current.span;
        let columns = self.parse_key_parts()?;
        if columns.is_empty() {
            return Err(self.error(
                ErrorKind::Syntax,
                "index must have at least one key column",
                columns_span,
            ));
        }

        let mut index = CreateIndex::new(name, table, columns);

        if self.eat_keyword(Keyword::Storing) {
            self.expect(&TokenKind::LeftParen)?;
            loop {
                index.storing.push(self.expect_identifier()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(&TokenKind::RightParen)?;
        }

        if self.eat(&TokenKind::Comma) {
            self.expect_keyword(Keyword::Interleave)?;
            self.expect_keyword(Keyword::In)?;
            index.interleave = Some(self.expect_identifier()?);
        }

        Ok(index)
    }

    /// Parses the rest of `ALTER TABLE`.
    fn parse_alter_table(&mut self) -> Result<AlterTable, ParseError> {
        let name = self.expect_identifier()?;

        let alteration = if self.eat_keyword(Keyword::Add) {
            self.expect_keyword(Keyword::Column)?;
            Alteration::AddColumn(self.parse_column_def()?)
        } else if self.eat_keyword(Keyword::Drop) {
            self.expect_keyword(Keyword::Column)?;
            Alteration::DropColumn(self.expect_identifier()?)
        } else if self.eat_keyword(Keyword::Alter) {
            self.expect_keyword(Keyword::Column)?;
            Alteration::AlterColumn(self.parse_column_def()?)
        } else if self.eat_keyword(Keyword::Set) {
            self.expect_keyword(Keyword::On)?;
            self.expect_keyword(Keyword::Delete)?;
            Alteration::SetOnDelete(self.parse_on_delete()?)
        } else {
            return Err(self.unexpected("ADD, DROP, ALTER, or SET"));
        };

        Ok(AlterTable { name, alteration })
    }

    /// Parses `CASCADE` or `NO ACTION`.
    fn parse_on_delete(&mut self) -> Result<OnDelete, ParseError> {
        if self.eat_keyword(Keyword::Cascade) {
            Ok(OnDelete::Cascade)
        } else if self.eat_keyword(Keyword::No) {
            self.expect_keyword(Keyword::Action)?;
            Ok(OnDelete::NoAction)
        } else {
            Err(self.unexpected("CASCADE or NO ACTION"))
        }
    }

    /// Parses `name type [NOT NULL] [OPTIONS (...)]`.
    fn parse_column_def(&mut self) -> Result<ColumnDef, ParseError> {
        let name = self.expect_identifier()?;
        let ty = self.parse_type()?;
        let not_null = if self.eat_keyword(Keyword::Not) {
            self.expect_keyword(Keyword::Null)?;
            true
        } else {
            false
        };
        let options = if self.eat_keyword(Keyword::Options) {
            self.parse_column_options()?
        } else {
            ColumnOptions::default()
        };
        Ok(ColumnDef {
            name,
            ty,
            not_null,
            options,
        })
    }

    /// Parses `( allow_commit_timestamp = { true | null } )`.
    fn parse_column_options(&mut self) -> Result<ColumnOptions, ParseError> {
        self.expect(&TokenKind::LeftParen)?;

        let option_span = self.current.span;
        let option = self.expect_identifier()?;
        if !option.eq_ignore_ascii_case("allow_commit_timestamp") {
            return Err(self.error(
                ErrorKind::Syntax,
                format!("unknown column option {option}"),
                option_span,
            ));
        }
        self.expect(&TokenKind::Eq)?;
        let allow = if self.eat_keyword(Keyword::True) {
            true
        } else if self.eat_keyword(Keyword::Null) {
            false
        } else {
            return Err(self.unexpected("true or null"));
        };

        self.expect(&TokenKind::RightParen)?;
        Ok(ColumnOptions {
            allow_commit_timestamp: Some(allow),
        })
    }

    /// Parses a column type, optionally wrapped in `ARRAY<...>`.
    fn parse_type(&mut self) -> Result<Type, ParseError> {
        if self.eat_keyword(Keyword::Array) {
            self.expect(&TokenKind::Lt)?;
            let element = self.parse_scalar_type()?;
            self.expect(&TokenKind::Gt)?;
            return Ok(element.array());
        }
        self.parse_scalar_type()
    }

    /// Parses a base type name with its length, if it takes one.
    fn parse_scalar_type(&mut self) -> Result<Type, ParseError> {
        let span = self.current.span;
        let base = match &self.current.kind {
            TokenKind::Keyword(Keyword::Bool) => TypeBase::Bool,
            TokenKind::Keyword(Keyword::Int64) => TypeBase::Int64,
            TokenKind::Keyword(Keyword::Float64) => TypeBase::Float64,
            TokenKind::Keyword(Keyword::String) => TypeBase::String,
            TokenKind::Keyword(Keyword::Bytes) => TypeBase::Bytes,
            TokenKind::Keyword(Keyword::Date) => TypeBase::Date,
            TokenKind::Keyword(Keyword::Timestamp) => TypeBase::Timestamp,
            _ => return Err(self.unexpected("type name")),
        };
        self.advance();

        let len_span = self.current.span;
        let len = if self.eat(&TokenKind::LeftParen) {
            let len = self.parse_length()?;
            self.expect(&TokenKind::RightParen)?;
            Some(len)
        } else {
            None
        };

        match (base.is_sized(), len) {
            (true, None) => Err(self.error(
                ErrorKind::Syntax,
                format!("{base} requires a length, such as {base}(MAX)"),
                span,
            )),
            (false, Some(_)) => Err(self.error(
                ErrorKind::TypeMismatch,
                format!("{base} does not take a length; only STRING and BYTES do"),
                len_span,
            )),
            _ => Ok(Type {
                array: false,
                base,
                len,
            }),
        }
    }

    /// Parses a positive integer length or `MAX`.
    fn parse_length(&mut self) -> Result<Length, ParseError> {
        let span = self.current.span;
        let len = match &self.current.kind {
            TokenKind::Keyword(Keyword::Max) => Length::Max,
            TokenKind::Integer(0) => {
                return Err(self.error(ErrorKind::Syntax, "length must be positive", span));
            }
            TokenKind::Integer(n) => Length::Fixed(*n),
            _ => return Err(self.unexpected("length or MAX")),
        };
        self.advance();
        Ok(len)
    }

    /// Parses `( [column [ASC|DESC] [, ...]] [,] )`.
    fn parse_key_parts(&mut self) -> Result<Vec<KeyPart>, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let mut parts = vec![];
        while !self.check(&TokenKind::RightParen) {
            let column = self.expect_identifier()?;
            let desc = if self.eat_keyword(Keyword::Desc) {
                true
            } else {
                self.eat_keyword(Keyword::Asc);
                false
            };
            parts.push(KeyPart { column, desc });
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_type(input: &str) -> Result<Type, ParseError> {
        Parser::new(input).parse_type()
    }

    #[test]
    fn test_scalar_types() {
        assert_eq!(parse_type("BOOL").unwrap(), Type::scalar(TypeBase::Bool));
        assert_eq!(parse_type("float64").unwrap(), Type::scalar(TypeBase::Float64));
        assert_eq!(parse_type("DATE").unwrap(), Type::scalar(TypeBase::Date));
        assert_eq!(
            parse_type("BYTES(0x10)").unwrap(),
            Type::bytes(Length::Fixed(16))
        );
    }

    #[test]
    fn test_array_types() {
        assert_eq!(
            parse_type("ARRAY<TIMESTAMP>").unwrap(),
            Type::scalar(TypeBase::Timestamp).array()
        );
        assert_eq!(
            parse_type("ARRAY<STRING(MAX)>").unwrap(),
            Type::string(Length::Max).array()
        );
        assert!(parse_type("ARRAY<ARRAY<INT64>>").is_err());
    }

    #[test]
    fn test_length_errors() {
        assert_eq!(parse_type("INT64(MAX)").unwrap_err().kind, ErrorKind::TypeMismatch);
        assert_eq!(parse_type("DATE(10)").unwrap_err().kind, ErrorKind::TypeMismatch);
        assert_eq!(parse_type("STRING").unwrap_err().kind, ErrorKind::Syntax);
        assert_eq!(parse_type("STRING(0)").unwrap_err().kind, ErrorKind::Syntax);
        assert_eq!(parse_type("STRING(-1)").unwrap_err().kind, ErrorKind::Syntax);
    }

    #[test]
    fn test_key_parts_tolerate_trailing_comma() {
        let parts = Parser::new("(A, B DESC, C ASC,)").parse_key_parts().unwrap();
        assert_eq!(
            parts,
            vec![KeyPart::asc("A"), KeyPart::desc("B"), KeyPart::asc("C")]
        );
        assert!(Parser::new("()").parse_key_parts().unwrap().is_empty());
    }

    #[test]
    fn test_commit_timestamp_option_values() {
        let options = |input| Parser::new(input).parse_column_options();
        assert_eq!(
            options("(allow_commit_timestamp = true)").unwrap().allow_commit_timestamp,
            Some(true)
        );
        assert_eq!(
            options("(allow_commit_timestamp = null)").unwrap().allow_commit_timestamp,
            Some(false)
        );
        let err = options("(allow_commit_timestamp = false)").unwrap_err();
        assert_eq!(err.expected.as_deref(), Some("true or null"));
    }

    #[test]
    fn test_statement_index_in_error() {
        let err = Parser::new("DROP TABLE A; DROP VIEW B")
            .parse_ddl()
            .unwrap_err();
        assert_eq!(err.statement, Some(1));
        assert_eq!(err.near, "VIEW B");
    }
}
