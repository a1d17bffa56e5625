//! SQL tokenizer implementation.

use super::{Keyword, Span, Token, TokenKind};

/// A lexer that tokenizes Spanner SQL input on demand.
///
/// The lexer is a cheap cursor over borrowed input; cloning it gives an
/// independent lookahead.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input source text.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the full input.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Returns the input not yet consumed by [`Lexer::next_token`].
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns the source text covered by `span`.
    #[must_use]
    pub fn slice(&self, span: Span) -> &'a str {
        &self.input[span.start..span.end]
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_line(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    /// Skips whitespace and comments.
    ///
    /// Returns an error token if a block comment is never closed.
    fn skip_whitespace_and_comments(&mut self) -> Option<Token> {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            match (self.peek(), self.peek_next()) {
                (Some('#'), _) | (Some('-'), Some('-')) => self.skip_line(),
                (Some('/'), Some('*')) => {
                    self.start = self.pos;
                    self.advance(); // /
                    self.advance(); // *
                    loop {
                        match self.advance() {
                            Some('*') if self.peek() == Some('/') => {
                                self.advance();
                                break;
                            }
                            Some(_) => {}
                            None => return Some(self.error("unterminated block comment")),
                        }
                    }
                }
                _ => return None,
            }
        }
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token with the current span.
    const fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.make_span())
    }

    fn error(&self, message: impl Into<String>) -> Token {
        self.make_token(TokenKind::Error(message.into()))
    }

    fn is_ident_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_'
    }

    fn is_ident_continue(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    fn skip_word(&mut self) {
        while self.peek().is_some_and(Self::is_ident_continue) {
            self.advance();
        }
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        self.skip_word();
        let text = &self.input[self.start..self.pos];
        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier(String::from(text))),
        }
    }

    /// Scans a back-quoted identifier (e.g., `` `Order` ``).
    fn scan_quoted_identifier(&mut self) -> Token {
        self.advance(); // consume opening quote
        let content_start = self.pos;
        loop {
            match self.peek() {
                Some('`') => break,
                Some('\n') | None => return self.error("unterminated quoted identifier"),
                Some(_) => {
                    self.advance();
                }
            }
        }
        let content = &self.input[content_start..self.pos];
        self.advance(); // consume closing quote
        if content.is_empty() {
            return self.error("empty quoted identifier");
        }
        self.make_token(TokenKind::Identifier(String::from(content)))
    }

    /// Scans a named parameter (`@name`).
    fn scan_param(&mut self) -> Token {
        self.advance(); // consume @
        if !self.peek().is_some_and(Self::is_ident_start) {
            return self.error("expected parameter name after '@'");
        }
        let name_start = self.pos;
        self.skip_word();
        self.make_token(TokenKind::Param(String::from(&self.input[name_start..self.pos])))
    }

    /// Consumes digits in the given radix, returning how many were consumed.
    fn scan_digits(&mut self, radix: u32) -> usize {
        let mut count = 0;
        while self.peek().is_some_and(|c| c.is_digit(radix)) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Fails the literal if it runs straight into an identifier character.
    fn reject_trailing_word(&mut self) -> Option<Token> {
        if self.peek().is_some_and(Self::is_ident_continue) {
            self.skip_word();
            return Some(self.error(format!(
                "invalid numeric literal: {}",
                &self.input[self.start..self.pos]
            )));
        }
        None
    }

    /// Scans a number (integer or float).
    fn scan_number(&mut self) -> Token {
        if self.peek() == Some('0') {
            match self.peek_next() {
                Some('x' | 'X') => return self.scan_hex(),
                Some('b' | 'B') => {
                    self.skip_word();
                    return self.error(format!(
                        "binary literals are not supported: {}",
                        &self.input[self.start..self.pos]
                    ));
                }
                _ => {}
            }
        }

        let mut is_float = false;
        self.scan_digits(10);

        if self.peek() == Some('.') {
            is_float = true;
            self.advance(); // consume .
            self.scan_digits(10);
        }

        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            is_float = true;
            self.advance(); // consume e/E
            if self.peek().is_some_and(|c| c == '+' || c == '-') {
                self.advance();
            }
            if self.scan_digits(10) == 0 {
                return self.error("missing digits in float exponent");
            }
        }

        if let Some(err) = self.reject_trailing_word() {
            return err;
        }

        let text = &self.input[self.start..self.pos];
        if is_float {
            match text.parse::<f64>() {
                Ok(f) => self.make_token(TokenKind::Float(f)),
                Err(e) => self.error(format!("invalid float literal {text}: {e}")),
            }
        } else {
            match text.parse::<u64>() {
                Ok(n) => self.make_token(TokenKind::Integer(n)),
                Err(e) => self.error(format!("invalid integer literal {text}: {e}")),
            }
        }
    }

    /// Scans a hexadecimal integer (`0x...`).
    fn scan_hex(&mut self) -> Token {
        self.advance(); // 0
        self.advance(); // x
        let digits_start = self.pos;
        if self.scan_digits(16) == 0 {
            return self.error("missing digits in hexadecimal literal");
        }
        if let Some(err) = self.reject_trailing_word() {
            return err;
        }
        let digits = &self.input[digits_start..self.pos];
        match u64::from_str_radix(digits, 16) {
            Ok(n) => self.make_token(TokenKind::Integer(n)),
            Err(e) => self.error(format!("invalid hexadecimal literal 0x{digits}: {e}")),
        }
    }

    /// Reads exactly `count` digits in `radix` and returns their value.
    fn read_escape_digits(&mut self, count: usize, radix: u32) -> Result<u32, String> {
        let mut value: u32 = 0;
        for _ in 0..count {
            let digit = self
                .advance()
                .and_then(|c| c.to_digit(radix))
                .ok_or_else(|| String::from("invalid escape sequence"))?;
            value = value * radix + digit;
        }
        Ok(value)
    }

    /// Decodes one escape sequence (after the backslash) into `out`.
    fn scan_escape(&mut self, out: &mut Vec<u8>) -> Result<(), String> {
        let Some(c) = self.advance() else {
            return Err(String::from("unterminated string literal"));
        };
        match c {
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0c),
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'v' => out.push(0x0b),
            '\\' => out.push(b'\\'),
            '?' => out.push(b'?'),
            '"' => out.push(b'"'),
            '\'' => out.push(b'\''),
            '`' => out.push(b'`'),
            '0'..='7' => {
                let high = c.to_digit(8).unwrap_or_default();
                let low = self.read_escape_digits(2, 8)?;
                let byte = u8::try_from(high * 64 + low)
                    .map_err(|_| String::from("octal escape out of range"))?;
                out.push(byte);
            }
            'x' | 'X' => {
                let value = self.read_escape_digits(2, 16)?;
                out.push(u8::try_from(value).map_err(|_| String::from("invalid hex escape"))?);
            }
            'u' | 'U' => {
                let width = if c == 'u' { 4 } else { 8 };
                let value = self.read_escape_digits(width, 16)?;
                let ch = char::from_u32(value)
                    .ok_or_else(|| format!("invalid code point in escape: {value:#x}"))?;
                let mut buf = [0; 4];
                out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            }
            other => return Err(format!("invalid escape sequence: \\{other}")),
        }
        Ok(())
    }

    /// Scans the body of a quoted literal, the cursor sitting on the opening
    /// quote. Returns the decoded bytes.
    fn scan_quoted(&mut self) -> Result<Vec<u8>, String> {
        let Some(quote) = self.advance() else {
            return Err(String::from("unterminated string literal"));
        };
        let mut value = Vec::new();
        loop {
            match self.advance() {
                Some(c) if c == quote => return Ok(value),
                Some('\\') => self.scan_escape(&mut value)?,
                Some('\n') | None => return Err(String::from("unterminated string literal")),
                Some(c) => {
                    let mut buf = [0; 4];
                    value.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                }
            }
        }
    }

    /// Scans a string literal.
    fn scan_string(&mut self) -> Token {
        match self.scan_quoted() {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(value) => self.make_token(TokenKind::String(value)),
                Err(_) => self.error("string literal is not valid UTF-8"),
            },
            Err(message) => self.error(message),
        }
    }

    /// Scans a bytes literal (`b"..."` or `B'...'`).
    fn scan_bytes(&mut self) -> Token {
        self.advance(); // consume b/B
        match self.scan_quoted() {
            Ok(bytes) => self.make_token(TokenKind::Bytes(bytes)),
            Err(message) => self.error(message),
        }
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        if let Some(err) = self.skip_whitespace_and_comments() {
            return err;
        }
        self.start = self.pos;

        let Some(c) = self.peek() else {
            return Token::new(TokenKind::Eof, Span::at(self.pos));
        };

        match c {
            '"' | '\'' => return self.scan_string(),
            '`' => return self.scan_quoted_identifier(),
            '@' => return self.scan_param(),
            'b' | 'B' if matches!(self.peek_next(), Some('"' | '\'')) => {
                return self.scan_bytes();
            }
            '.' if self.peek_next().is_some_and(|n| n.is_ascii_digit()) => {
                return self.scan_number();
            }
            c if c.is_ascii_digit() => return self.scan_number(),
            c if Self::is_ident_start(c) => return self.scan_identifier(),
            _ => {}
        }

        self.advance();
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '=' => TokenKind::Eq,
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    TokenKind::LtEq
                }
                Some('>') => {
                    self.advance();
                    TokenKind::NotEq
                }
                _ => TokenKind::Lt,
            },
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                }
            }
            '!' if self.peek() == Some('=') => {
                self.advance();
                TokenKind::NotEq
            }
            _ => TokenKind::Error(format!("unexpected character: {c}")),
        };
        self.make_token(kind)
    }

    /// Tokenizes the rest of the input.
    ///
    /// The returned tokens end with either an EOF or an error token.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = matches!(token.kind, TokenKind::Eof | TokenKind::Error(_));
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }
}
