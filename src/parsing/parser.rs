use std::fmt;

use tracing::{debug, trace};

use crate::language::{Token, TokenKind};
use crate::output::{self, Transcript};
use crate::parsing::stream::TokenStream;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    Expected(TokenKind, Token),
    InvalidStatement(Token),
    IncompleteIf(Token),
    UnsupportedOperator(Token),
    SymbolExpected(Token),
    MissingRelation(Token),
}

impl ParsingError {
    /// The token that was sitting in the lookahead when parsing failed.
    pub fn found(&self) -> &Token {
        match self {
            ParsingError::Expected(_, token) => token,
            ParsingError::InvalidStatement(token) => token,
            ParsingError::IncompleteIf(token) => token,
            ParsingError::UnsupportedOperator(token) => token,
            ParsingError::SymbolExpected(token) => token,
            ParsingError::MissingRelation(token) => token,
        }
    }

    /// The diagnostic line written to the transcript.
    pub fn message(&self) -> String {
        match self {
            ParsingError::Expected(kind, _) => format!("Parse Error: {} expected.", kind),
            ParsingError::InvalidStatement(_) => "Invalid Statement".to_string(),
            ParsingError::IncompleteIf(_) => "Incomplete if Statement".to_string(),
            // there are no boolean operators, so a condition is followed by ':'
            ParsingError::UnsupportedOperator(_) => "Parse Error: Colon expected.".to_string(),
            ParsingError::SymbolExpected(_) => "Symbol expected".to_string(),
            ParsingError::MissingRelation(_) => "Missing relational operator".to_string(),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Predictive recursive descent recognizer. Every rule decides what to do
/// from the single token in the lookahead. The first failure is returned
/// up through every active rule, after which nothing further is consumed
/// or written.
#[derive(Debug)]
pub struct Parser<'t> {
    stream: TokenStream,
    transcript: &'t mut Transcript,
}

impl<'t> Parser<'t> {
    pub fn new(transcript: &'t mut Transcript) -> Parser<'t> {
        Parser {
            stream: TokenStream::new(vec![]),
            transcript,
        }
    }

    pub fn initialize(&mut self, tokens: Vec<Token>) {
        self.stream = TokenStream::new(tokens);
    }

    pub fn with_stream(stream: TokenStream, transcript: &'t mut Transcript) -> Parser<'t> {
        Parser { stream, transcript }
    }

    pub fn stream(&self) -> &TokenStream {
        &self.stream
    }

    fn peek(&self) -> TokenKind {
        self.stream
            .peek()
            .kind
    }

    fn found(&self) -> Token {
        self.stream
            .peek()
            .clone()
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), ParsingError> {
        if self
            .stream
            .check(kind)
        {
            self.stream
                .consume();
            Ok(())
        } else {
            Err(ParsingError::Expected(kind, self.found()))
        }
    }

    pub fn read_program(&mut self) -> Result<(), ParsingError> {
        self.read_block()?;
        self.expect(TokenKind::EndofFile)
    }

    /// Zero or more statements, for as long as the lookahead can start one.
    pub fn read_block(&mut self) -> Result<(), ParsingError> {
        while matches!(
            self.peek(),
            TokenKind::Identifier | TokenKind::Print | TokenKind::If
        ) {
            self.read_statement()?;
        }
        Ok(())
    }

    pub fn read_statement(&mut self) -> Result<(), ParsingError> {
        match self.peek() {
            TokenKind::Identifier => {
                let target = self
                    .stream
                    .consume();
                self.expect(TokenKind::Assign)?;
                self.read_expression()?;
                self.expect(TokenKind::Semicolon)?;

                debug!(name = %target.lexeme, "assignment");
                self.transcript
                    .emit(output::ASSIGNMENT_RECOGNIZED);
                Ok(())
            }
            TokenKind::Print => {
                self.stream
                    .consume();
                self.expect(TokenKind::LeftParen)?;
                self.read_argument()?;
                self.read_argument_follow()?;
                self.expect(TokenKind::RightParen)?;
                self.expect(TokenKind::Semicolon)?;

                debug!("print");
                self.transcript
                    .emit(output::PRINT_RECOGNIZED);
                Ok(())
            }
            TokenKind::If => {
                self.stream
                    .consume();
                self.transcript
                    .emit(output::IF_BEGINS);
                self.read_condition()?;
                self.expect(TokenKind::Colon)?;
                self.read_block()?;
                self.read_if_follow()?;

                debug!("if");
                self.transcript
                    .emit(output::IF_ENDS);
                Ok(())
            }
            _ => Err(ParsingError::InvalidStatement(self.found())),
        }
    }

    pub fn read_argument(&mut self) -> Result<(), ParsingError> {
        if self
            .stream
            .check(TokenKind::String)
        {
            self.stream
                .consume();
            return Ok(());
        }
        self.read_expression()
    }

    pub fn read_argument_follow(&mut self) -> Result<(), ParsingError> {
        loop {
            match self.peek() {
                TokenKind::Comma => {
                    self.stream
                        .consume();
                    self.read_argument()?;
                }
                // ')' and end of input included; the caller decides
                _ => return Ok(()),
            }
        }
    }

    pub fn read_if_follow(&mut self) -> Result<(), ParsingError> {
        match self.peek() {
            TokenKind::Endif => {
                self.stream
                    .consume();
                self.expect(TokenKind::Semicolon)
            }
            TokenKind::Else => {
                self.stream
                    .consume();
                self.read_block()?;
                self.expect(TokenKind::Endif)?;
                self.expect(TokenKind::Semicolon)
            }
            _ => Err(ParsingError::IncompleteIf(self.found())),
        }
    }

    /// An expression may be empty when the lookahead is ',' or ')'.
    pub fn read_expression(&mut self) -> Result<(), ParsingError> {
        match self.peek() {
            TokenKind::And | TokenKind::Or | TokenKind::Not => {
                Err(ParsingError::UnsupportedOperator(self.found()))
            }
            TokenKind::Comma | TokenKind::RightParen => Ok(()),
            _ => {
                self.read_term()?;
                self.read_term_follow()
            }
        }
    }

    fn read_term_follow(&mut self) -> Result<(), ParsingError> {
        while matches!(self.peek(), TokenKind::Plus | TokenKind::Minus) {
            self.stream
                .consume();
            self.read_term()?;
        }
        Ok(())
    }

    pub fn read_term(&mut self) -> Result<(), ParsingError> {
        self.read_factor()?;
        self.read_factor_follow()
    }

    fn read_factor_follow(&mut self) -> Result<(), ParsingError> {
        while matches!(self.peek(), TokenKind::Multiply | TokenKind::Divide) {
            self.stream
                .consume();
            self.read_factor()?;
        }
        Ok(())
    }

    pub fn read_factor(&mut self) -> Result<(), ParsingError> {
        self.read_literal()?;
        self.read_literal_follow()
    }

    fn read_literal_follow(&mut self) -> Result<(), ParsingError> {
        // '**' chains at the same level
        while self.peek() == TokenKind::Raise {
            self.stream
                .consume();
            self.read_literal()?;
        }
        Ok(())
    }

    pub fn read_literal(&mut self) -> Result<(), ParsingError> {
        if self
            .stream
            .check(TokenKind::Minus)
        {
            self.stream
                .consume();
        }
        self.read_value()
    }

    pub fn read_value(&mut self) -> Result<(), ParsingError> {
        trace!(lookahead = ?self.stream.peek());
        match self.peek() {
            TokenKind::Identifier | TokenKind::Number => {
                self.stream
                    .consume();
                Ok(())
            }
            TokenKind::Sqrt => {
                self.stream
                    .consume();
                self.expect(TokenKind::LeftParen)?;
                self.read_expression()?;
                self.expect(TokenKind::RightParen)
            }
            TokenKind::LeftParen => {
                self.stream
                    .consume();
                self.read_expression()?;
                self.expect(TokenKind::RightParen)
            }
            _ => Err(ParsingError::SymbolExpected(self.found())),
        }
    }

    pub fn read_condition(&mut self) -> Result<(), ParsingError> {
        self.read_expression()?;
        self.read_relation()?;
        self.read_expression()
    }

    pub fn read_relation(&mut self) -> Result<(), ParsingError> {
        if self
            .peek()
            .is_relation()
        {
            self.stream
                .consume();
            Ok(())
        } else {
            Err(ParsingError::MissingRelation(self.found()))
        }
    }
}
