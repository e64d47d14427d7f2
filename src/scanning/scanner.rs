//! Lexical analysis of SimpCalc source text

use std::fmt;

use tracing::trace;

use crate::language::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    InvalidNumber(usize, String),
    UnterminatedString(usize, String),
    IllegalCharacter(usize, String),
}

impl LexicalError {
    pub fn offset(&self) -> usize {
        match self {
            LexicalError::InvalidNumber(offset, _) => *offset,
            LexicalError::UnterminatedString(offset, _) => *offset,
            LexicalError::IllegalCharacter(offset, _) => *offset,
        }
    }

    /// The source text that was discarded.
    pub fn text(&self) -> &str {
        match self {
            LexicalError::InvalidNumber(_, text) => text,
            LexicalError::UnterminatedString(_, text) => text,
            LexicalError::IllegalCharacter(_, text) => text,
        }
    }

    pub fn message(&self) -> String {
        match self {
            LexicalError::InvalidNumber(_, _) => "Invalid number format".to_string(),
            LexicalError::UnterminatedString(_, _) => "Unterminated string".to_string(),
            LexicalError::IllegalCharacter(_, _) => {
                "Illegal character/character sequence".to_string()
            }
        }
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lexical Error: {}", self.message())
    }
}

/// Longest-match scanner over a single source text. Yields tokens and
/// lexical errors in source order, finishing with exactly one EndofFile.
#[derive(Debug)]
pub struct Scanner<'i> {
    source: &'i str,
    offset: usize,
    finished: bool,
}

impl<'i> Scanner<'i> {
    pub fn new(source: &'i str) -> Scanner<'i> {
        Scanner {
            source,
            offset: 0,
            finished: false,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    fn peek(&self) -> Option<char> {
        self.source[self.offset..]
            .chars()
            .next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.source[self.offset..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self, c: char) {
        self.offset += c.len_utf8();
    }

    fn next_is_digit(&self) -> bool {
        matches!(self.peek(), Some(c) if c.is_ascii_digit())
    }

    fn since(&self, start: usize) -> &'i str {
        &self.source[start..self.offset]
    }

    fn trim_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.advance(c);
        }
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.peek() {
            self.advance(c);
            if c == '\n' {
                break;
            }
        }
    }

    fn take_digits(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.advance(c);
        }
    }

    fn read_token(&mut self, c: char) -> Result<Token, LexicalError> {
        let start = self.offset;

        if c.is_ascii_alphabetic() || c == '_' {
            return Ok(self.read_identifier(start));
        }
        if c.is_ascii_digit() {
            return self.read_number(start);
        }
        if c == '"' {
            return self.read_string(start);
        }

        self.advance(c);

        let kind = match c {
            ':' => self.either('=', TokenKind::Assign, TokenKind::Colon),
            '*' => self.either('*', TokenKind::Raise, TokenKind::Multiply),
            '<' => self.either('=', TokenKind::LTEqual, TokenKind::LessThan),
            '>' => self.either('=', TokenKind::GTEqual, TokenKind::GreaterThan),
            '!' => {
                if self.peek() == Some('=') {
                    self.advance('=');
                    TokenKind::NotEqual
                } else {
                    return Err(LexicalError::IllegalCharacter(
                        start,
                        self.since(start)
                            .to_string(),
                    ));
                }
            }
            '/' => TokenKind::Divide,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '=' => TokenKind::Equal,
            _ => {
                return Err(LexicalError::IllegalCharacter(
                    start,
                    self.since(start)
                        .to_string(),
                ))
            }
        };

        Ok(Token::new(kind, self.since(start)))
    }

    // one character of lookahead, falling back to the single character form
    fn either(&mut self, second: char, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek() == Some(second) {
            self.advance(second);
            double
        } else {
            single
        }
    }

    fn read_identifier(&mut self, start: usize) -> Token {
        while let Some(c) = self.peek() {
            if !(c.is_ascii_alphanumeric() || c == '_') {
                break;
            }
            self.advance(c);
        }

        let text = self.since(start);
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Identifier);

        Token::new(kind, text)
    }

    fn read_number(&mut self, start: usize) -> Result<Token, LexicalError> {
        self.take_digits();

        if self.peek() == Some('.') {
            self.advance('.');
            if !self.next_is_digit() {
                return Err(self.invalid_number(start));
            }
            self.take_digits();
        }

        if let Some(e @ ('e' | 'E')) = self.peek() {
            self.advance(e);
            if let Some(sign @ ('+' | '-')) = self.peek() {
                self.advance(sign);
            }
            if !self.next_is_digit() {
                return Err(self.invalid_number(start));
            }
            self.take_digits();
        }

        Ok(Token::new(TokenKind::Number, self.since(start)))
    }

    fn invalid_number(&self, start: usize) -> LexicalError {
        LexicalError::InvalidNumber(
            start,
            self.since(start)
                .to_string(),
        )
    }

    fn read_string(&mut self, start: usize) -> Result<Token, LexicalError> {
        self.advance('"');
        let contents = self.offset;

        loop {
            match self.peek() {
                Some('"') => {
                    let text = self.since(contents);
                    self.advance('"');
                    return Ok(Token::new(TokenKind::String, text));
                }
                Some('\n') | None => {
                    return Err(LexicalError::UnterminatedString(
                        start,
                        self.since(start)
                            .to_string(),
                    ));
                }
                Some(c) => self.advance(c),
            }
        }
    }
}

impl<'i> Iterator for Scanner<'i> {
    type Item = Result<Token, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            self.trim_whitespace();

            let c = match self.peek() {
                Some(c) => c,
                None => {
                    self.finished = true;
                    return Some(Ok(Token::end()));
                }
            };

            if c == '/' && self.peek_second() == Some('/') {
                self.skip_comment();
                continue;
            }

            let result = self.read_token(c);
            trace!(offset = self.offset, ?result);
            return Some(result);
        }
    }
}
