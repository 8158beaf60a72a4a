use std::iter::Peekable;

use crate::error::{Error, Result};
use crate::sql::parser::ast::{OrderDirection, Statement};
use crate::sql::parser::lexer::{Keyword, Lexer, Token};
use crate::sql::schema::Column;
use crate::sql::types::DataType;

pub mod ast;
mod lexer;

/// SQL Parser - converts one statement's tokens into a command value
///
/// Each statement kind has its own routine; a structural mismatch anywhere
/// fails the whole parse. All token access goes through the cursor helpers
/// below, so running past the end of the statement reports a normal
/// "unexpected end of statement" failure instead of an out-of-range fault.
pub struct Parser<'a> {
    lexer: Peekable<Lexer<'a>>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given statement text
    pub fn new(input: &'a str) -> Self {
        Parser {
            lexer: Lexer::new(input).peekable(),
        }
    }

    /// Parses the statement into a command
    pub fn parse(&mut self) -> Result<Statement> {
        let stmt = match self.peek() {
            Some(Token::Keyword(Keyword::Create)) => self.parse_create()?,
            Some(Token::Keyword(Keyword::Insert)) => self.parse_insert()?,
            Some(Token::Keyword(Keyword::Select)) => self.parse_select()?,
            Some(token) => {
                return Err(Error::Parse(format!("[Parser] Unexpected token {}", token)));
            }
            None => {
                return Err(Error::Parse(
                    "[Parser] Unexpected end of statement".to_string(),
                ));
            }
        };

        // Terminating semicolon is optional; nothing may follow it
        self.next_if_token(Token::Semicolon);
        if let Some(token) = self.peek() {
            return Err(Error::Parse(format!("[Parser] Unexpected token {}", token)));
        }
        Ok(stmt)
    }

    /// Parses CREATE [TABLE] <name> ( <column> <type> [INDEXED], ... )
    ///
    /// The TABLE keyword is accepted and skipped when present, so both the
    /// bare and the keyword form parse.
    fn parse_create(&mut self) -> Result<Statement> {
        self.next_expect(Token::Keyword(Keyword::Create))?;
        self.next_if_token(Token::Keyword(Keyword::Table));

        let name = self.next_ident()?;
        self.next_expect(Token::OpenParen)?;

        let mut columns = Vec::new();
        loop {
            columns.push(self.parse_column()?);
            if self.next_if_token(Token::Comma).is_none() {
                break;
            }
        }
        self.next_expect(Token::CloseParen)?;
        Ok(Statement::CreateTable { name, columns })
    }

    /// Parses one column definition in CREATE
    ///
    /// The declared type is any identifier; it is resolved to a DataType
    /// here, once, at schema-definition time.
    fn parse_column(&mut self) -> Result<Column> {
        let name = self.next_ident()?;
        let datatype = DataType::from_name(&self.next_ident()?);
        let indexed = self
            .next_if_token(Token::Keyword(Keyword::Indexed))
            .is_some();
        Ok(Column {
            name,
            datatype,
            indexed,
        })
    }

    /// Parses INSERT INTO <name> ( <value>, ... )
    ///
    /// Only string and number tokens are collected as values; any other
    /// token between the parentheses is skipped. Arity and cell types are
    /// checked later, when the catalog accepts the row.
    fn parse_insert(&mut self) -> Result<Statement> {
        self.next_expect(Token::Keyword(Keyword::Insert))?;
        self.next_expect(Token::Keyword(Keyword::Into))?;

        let table_name = self.next_ident()?;
        self.next_expect(Token::OpenParen)?;

        let mut values = Vec::new();
        loop {
            match self.next()? {
                Token::CloseParen => break,
                Token::String(s) => values.push(s),
                Token::Number(n) => values.push(n),
                _ => {}
            }
        }
        Ok(Statement::Insert { table_name, values })
    }

    /// Parses SELECT <cols> FROM <name> [WHERE ...] [ORDER_BY ...]
    fn parse_select(&mut self) -> Result<Statement> {
        self.next_expect(Token::Keyword(Keyword::Select))?;

        // Column list: the text of every token before FROM, commas skipped
        let mut columns = Vec::new();
        loop {
            match self.peek() {
                Some(Token::Keyword(Keyword::From)) => break,
                Some(_) => match self.next()? {
                    Token::Comma => {}
                    token => columns.push(token.to_string()),
                },
                None => {
                    return Err(Error::Parse(
                        "[Parser] Unexpected end of statement".to_string(),
                    ));
                }
            }
        }
        self.next_expect(Token::Keyword(Keyword::From))?;
        let table_name = self.next_ident()?;

        // The WHERE clause is reassembled into one whitespace-joined raw
        // string, not an expression tree; the executor re-splits it.
        let mut where_condition = None;
        if self
            .next_if_token(Token::Keyword(Keyword::Where))
            .is_some()
        {
            let mut parts = Vec::new();
            while let Some(token) = self.peek() {
                if matches!(
                    token,
                    Token::Keyword(Keyword::OrderBy) | Token::Semicolon
                ) {
                    break;
                }
                parts.push(self.next()?.to_string());
            }
            where_condition = Some(parts.join(" "));
        }

        let mut order_by = Vec::new();
        if self
            .next_if_token(Token::Keyword(Keyword::OrderBy))
            .is_some()
        {
            loop {
                let column = self.next_ident()?;
                let direction = if self
                    .next_if_token(Token::Keyword(Keyword::Asc))
                    .is_some()
                {
                    OrderDirection::Asc
                } else if self
                    .next_if_token(Token::Keyword(Keyword::Desc))
                    .is_some()
                {
                    OrderDirection::Desc
                } else {
                    OrderDirection::Asc
                };
                order_by.push((column, direction));
                if self.next_if_token(Token::Comma).is_none() {
                    break;
                }
            }
        }

        Ok(Statement::Select {
            table_name,
            columns,
            where_condition,
            order_by,
        })
    }

    /// Peeks at the next token
    fn peek(&mut self) -> Option<Token> {
        self.lexer.peek().cloned()
    }

    /// Consumes and returns the next token
    fn next(&mut self) -> Result<Token> {
        self.lexer.next().ok_or_else(|| {
            Error::Parse("[Parser] Unexpected end of statement".to_string())
        })
    }

    /// Expects and consumes an identifier
    fn next_ident(&mut self) -> Result<String> {
        match self.next()? {
            Token::Ident(ident) => Ok(ident),
            token => Err(Error::Parse(format!(
                "[Parser] Expected identifier, got token {}",
                token
            ))),
        }
    }

    /// Expects a specific token, returns error if different
    fn next_expect(&mut self, expect: Token) -> Result<()> {
        let token = self.next()?;
        if token != expect {
            return Err(Error::Parse(format!(
                "[Parser] Expected token {}, got {}",
                expect, token
            )));
        }
        Ok(())
    }

    /// Consumes next token if it satisfies the predicate
    fn next_if<F: Fn(&Token) -> bool>(&mut self, predicate: F) -> Option<Token> {
        self.peek().filter(|t| predicate(t))?;
        self.next().ok()
    }

    /// Consumes next token if it matches the given token
    fn next_if_token(&mut self, token: Token) -> Option<Token> {
        self.next_if(|t| t == &token)
    }
}
