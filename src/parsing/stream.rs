use crate::language::{Token, TokenKind};

/// Cursor over a token sequence offering one token of lookahead. Once the
/// cursor reaches EndofFile every further peek or consume returns it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    /// Anything after the first EndofFile is dropped, and one is appended
    /// if the sequence lacks it, so the marker is always the last element.
    pub fn new(mut tokens: Vec<Token>) -> TokenStream {
        match tokens
            .iter()
            .position(|token| token.is(TokenKind::EndofFile))
        {
            Some(i) => tokens.truncate(i + 1),
            None => tokens.push(Token::end()),
        }

        TokenStream {
            tokens,
            position: 0,
        }
    }

    pub fn peek(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.position.min(last)]
    }

    pub fn consume(&mut self) -> Token {
        let token = self
            .peek()
            .clone();
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
        token
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek()
            .is(kind)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_finished(&self) -> bool {
        self.check(TokenKind::EndofFile)
    }
}
