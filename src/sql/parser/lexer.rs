//! SQL Lexer - Tokenizes one statement's text into a stream of tokens
//!
//! The lexer never fails: characters that match no recognized token shape
//! are silently skipped, so malformed input only surfaces later, in the
//! parser or the executor.

use std::{fmt::Display, iter::Peekable, str::Chars};

/// Represents a single lexical token in the SQL input
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// SQL reserved keyword
    Keyword(Keyword),
    /// Identifier such as table name, column name or declared column type
    Ident(String),
    /// String literal, single- or double-quoted; delimiters already stripped
    String(String),
    /// Integer literal, kept as its digit text
    Number(String),
    /// Comparison operators
    Equal,
    LessThan,
    GreaterThan,
    /// Structural symbols
    OpenParen,
    CloseParen,
    Comma,
    Semicolon,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Token::Keyword(keyword) => keyword.to_str(),
            Token::Ident(ident) => ident,
            Token::String(v) => v,
            Token::Number(n) => n,
            Token::Equal => "=",
            Token::LessThan => "<",
            Token::GreaterThan => ">",
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::Comma => ",",
            Token::Semicolon => ";",
        })
    }
}

/// SQL reserved keywords
///
/// Keywords are a reserved subset of the identifier grammar and outrank
/// identifiers when the spans coincide. Declared column types (INT, TEXT,
/// ...) are deliberately not keywords: the type position accepts any
/// identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Keyword {
    Create,
    Table,
    Insert,
    Into,
    Select,
    From,
    Where,
    OrderBy,
    Indexed,
    Asc,
    Desc,
}

impl Keyword {
    /// Attempts to parse a string as a keyword (case-insensitive)
    pub fn from_str(ident: &str) -> Option<Keyword> {
        Some(match ident.to_uppercase().as_ref() {
            "CREATE" => Keyword::Create,
            "TABLE" => Keyword::Table,
            "INSERT" => Keyword::Insert,
            "INTO" => Keyword::Into,
            "SELECT" => Keyword::Select,
            "FROM" => Keyword::From,
            "WHERE" => Keyword::Where,
            "ORDER_BY" => Keyword::OrderBy,
            "INDEXED" => Keyword::Indexed,
            "ASC" => Keyword::Asc,
            "DESC" => Keyword::Desc,
            _ => return None,
        })
    }

    /// Returns the uppercase string representation of the keyword
    pub fn to_str(&self) -> &str {
        match self {
            Keyword::Create => "CREATE",
            Keyword::Table => "TABLE",
            Keyword::Insert => "INSERT",
            Keyword::Into => "INTO",
            Keyword::Select => "SELECT",
            Keyword::From => "FROM",
            Keyword::Where => "WHERE",
            Keyword::OrderBy => "ORDER_BY",
            Keyword::Indexed => "INDEXED",
            Keyword::Asc => "ASC",
            Keyword::Desc => "DESC",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// SQL lexical analyzer (lexer/tokenizer)
pub struct Lexer<'a> {
    iter: Peekable<Chars<'a>>,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan()
    }
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given statement text
    pub fn new(sql_text: &'a str) -> Self {
        Self {
            iter: sql_text.chars().peekable(),
        }
    }

    /// Consumes the next character if it satisfies the predicate
    fn next_if<F: Fn(char) -> bool>(&mut self, predicate: F) -> Option<char> {
        self.iter.peek().filter(|&c| predicate(*c))?;
        self.iter.next()
    }

    /// Consumes consecutive characters while they satisfy the predicate
    fn next_while<F: Fn(char) -> bool>(&mut self, predicate: F) -> Option<String> {
        let mut value = String::new();
        while let Some(c) = self.next_if(&predicate) {
            value.push(c);
        }
        Some(value).filter(|v| !v.is_empty())
    }

    /// Peeks and consumes if the character maps to a token (for single-char tokens)
    fn next_if_token<F: Fn(char) -> Option<Token>>(&mut self, predicate: F) -> Option<Token> {
        let token = self.iter.peek().and_then(|c| predicate(*c))?;
        self.iter.next();
        Some(token)
    }

    /// Removes whitespace from the input stream
    fn erase_whitespace(&mut self) {
        self.next_while(|c| c.is_whitespace());
    }

    /// Scans and returns the next token
    ///
    /// Token shapes are tried in a fixed priority at each position: quoted
    /// string, integer literal, word (keyword outranking identifier), then
    /// operator/symbol. A character matching none of them is dropped and
    /// scanning continues.
    fn scan(&mut self) -> Option<Token> {
        loop {
            self.erase_whitespace();
            let token = match *self.iter.peek()? {
                quote @ ('\'' | '"') => Some(self.scan_string(quote)),
                c if c.is_ascii_digit() => self.scan_number(),
                c if c.is_alphabetic() || c == '_' => self.scan_word(),
                _ => self.scan_symbol(),
            };
            match token {
                Some(token) => return Some(token),
                None => {
                    // unrecognized character, skip it
                    self.iter.next();
                }
            }
        }
    }

    /// Scans a string literal enclosed in single or double quotes
    ///
    /// The text between the delimiters is copied verbatim, without escape
    /// processing. A literal missing its closing delimiter runs to the end
    /// of the statement.
    fn scan_string(&mut self, quote: char) -> Token {
        self.iter.next();
        let mut val = String::new();
        loop {
            match self.iter.next() {
                Some(c) if c == quote => break,
                Some(c) => val.push(c),
                None => break,
            }
        }
        Token::String(val)
    }

    /// Scans an integer literal (a run of ASCII digits)
    fn scan_number(&mut self) -> Option<Token> {
        self.next_while(|c| c.is_ascii_digit()).map(Token::Number)
    }

    /// Scans an identifier or keyword
    fn scan_word(&mut self) -> Option<Token> {
        let mut val = self
            .next_if(|c| c.is_alphabetic() || c == '_')?
            .to_string();
        while let Some(c) = self.next_if(|c| c.is_alphanumeric() || c == '_') {
            val.push(c);
        }
        // Returns Keyword if matched, otherwise returns as a regular Ident
        Some(Keyword::from_str(&val).map_or(Token::Ident(val), Token::Keyword))
    }

    /// Scans a single-character operator or symbol token
    fn scan_symbol(&mut self) -> Option<Token> {
        self.next_if_token(|c| match c {
            '=' => Some(Token::Equal),
            '<' => Some(Token::LessThan),
            '>' => Some(Token::GreaterThan),
            '(' => Some(Token::OpenParen),
            ')' => Some(Token::CloseParen),
            ',' => Some(Token::Comma),
            ';' => Some(Token::Semicolon),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Keyword, Lexer, Token};

    #[test]
    fn test_lexer_create_table() {
        let tokens = Lexer::new(
            "CREATE TABLE Users
                (
                    id INT INDEXED,
                    name TEXT
                );
                ",
        )
        .collect::<Vec<_>>();

        assert_eq!(
            tokens,
            vec![
                Token::Keyword(Keyword::Create),
                Token::Keyword(Keyword::Table),
                Token::Ident("Users".to_string()),
                Token::OpenParen,
                Token::Ident("id".to_string()),
                Token::Ident("INT".to_string()),
                Token::Keyword(Keyword::Indexed),
                Token::Comma,
                Token::Ident("name".to_string()),
                Token::Ident("TEXT".to_string()),
                Token::CloseParen,
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_lexer_keywords_case_insensitive() {
        let tokens = Lexer::new("select from users order_by name desc").collect::<Vec<_>>();

        assert_eq!(
            tokens,
            vec![
                Token::Keyword(Keyword::Select),
                Token::Keyword(Keyword::From),
                Token::Ident("users".to_string()),
                Token::Keyword(Keyword::OrderBy),
                Token::Ident("name".to_string()),
                Token::Keyword(Keyword::Desc),
            ]
        );
    }

    #[test]
    fn test_lexer_insert_into() {
        let tokens = Lexer::new("INSERT INTO Users (1, 'Bob');").collect::<Vec<_>>();

        assert_eq!(
            tokens,
            vec![
                Token::Keyword(Keyword::Insert),
                Token::Keyword(Keyword::Into),
                Token::Ident("Users".to_string()),
                Token::OpenParen,
                Token::Number("1".to_string()),
                Token::Comma,
                Token::String("Bob".to_string()),
                Token::CloseParen,
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_lexer_strips_both_quote_styles() {
        let tokens = Lexer::new(r#"('single', "double")"#).collect::<Vec<_>>();

        assert_eq!(
            tokens,
            vec![
                Token::OpenParen,
                Token::String("single".to_string()),
                Token::Comma,
                Token::String("double".to_string()),
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_lexer_comparison_operators() {
        let tokens = Lexer::new("age > 18 = < ").collect::<Vec<_>>();

        assert_eq!(
            tokens,
            vec![
                Token::Ident("age".to_string()),
                Token::GreaterThan,
                Token::Number("18".to_string()),
                Token::Equal,
                Token::LessThan,
            ]
        );
    }

    #[test]
    fn test_lexer_skips_unrecognized_characters() {
        // `*`, `!` and `.` match no token shape and are dropped without error
        let tokens = Lexer::new("SELECT * FROM t! WHERE x = 1.5").collect::<Vec<_>>();

        assert_eq!(
            tokens,
            vec![
                Token::Keyword(Keyword::Select),
                Token::Keyword(Keyword::From),
                Token::Ident("t".to_string()),
                Token::Keyword(Keyword::Where),
                Token::Ident("x".to_string()),
                Token::Equal,
                Token::Number("1".to_string()),
                Token::Number("5".to_string()),
            ]
        );
    }

    #[test]
    fn test_lexer_unterminated_string_runs_to_end() {
        let tokens = Lexer::new("'no closing quote").collect::<Vec<_>>();
        assert_eq!(tokens, vec![Token::String("no closing quote".to_string())]);
    }

    #[test]
    fn test_lexer_empty_input() {
        assert_eq!(Lexer::new("   \t\n ").collect::<Vec<_>>(), vec![]);
    }
}
