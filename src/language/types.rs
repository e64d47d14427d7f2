//! Types representing the lexical elements of the SimpCalc language

use std::fmt;

/// The closed set of token classes. The names are part of the token
/// listing format so they are spelled exactly as written there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    String,
    If,
    Else,
    Endif,
    Print,
    Sqrt,
    Or,
    And,
    Not,
    Assign,
    Colon,
    Raise,
    Multiply,
    LTEqual,
    LessThan,
    GTEqual,
    GreaterThan,
    NotEqual,
    Divide,
    Semicolon,
    Comma,
    LeftParen,
    RightParen,
    Plus,
    Minus,
    Equal,
    EndofFile,
}

static ALL: [TokenKind; 29] = [
    TokenKind::Identifier,
    TokenKind::Number,
    TokenKind::String,
    TokenKind::If,
    TokenKind::Else,
    TokenKind::Endif,
    TokenKind::Print,
    TokenKind::Sqrt,
    TokenKind::Or,
    TokenKind::And,
    TokenKind::Not,
    TokenKind::Assign,
    TokenKind::Colon,
    TokenKind::Raise,
    TokenKind::Multiply,
    TokenKind::LTEqual,
    TokenKind::LessThan,
    TokenKind::GTEqual,
    TokenKind::GreaterThan,
    TokenKind::NotEqual,
    TokenKind::Divide,
    TokenKind::Semicolon,
    TokenKind::Comma,
    TokenKind::LeftParen,
    TokenKind::RightParen,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Equal,
    TokenKind::EndofFile,
];

impl TokenKind {
    pub fn all() -> &'static [TokenKind] {
        &ALL
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::If => "If",
            TokenKind::Else => "Else",
            TokenKind::Endif => "Endif",
            TokenKind::Print => "Print",
            TokenKind::Sqrt => "Sqrt",
            TokenKind::Or => "Or",
            TokenKind::And => "And",
            TokenKind::Not => "Not",
            TokenKind::Assign => "Assign",
            TokenKind::Colon => "Colon",
            TokenKind::Raise => "Raise",
            TokenKind::Multiply => "Multiply",
            TokenKind::LTEqual => "LTEqual",
            TokenKind::LessThan => "LessThan",
            TokenKind::GTEqual => "GTEqual",
            TokenKind::GreaterThan => "GreaterThan",
            TokenKind::NotEqual => "NotEqual",
            TokenKind::Divide => "Divide",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Comma => "Comma",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Equal => "Equal",
            TokenKind::EndofFile => "EndofFile",
        }
    }

    /// Inverse of name(), used when reading a token listing back in.
    pub fn from_name(name: &str) -> Option<TokenKind> {
        TokenKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
    }

    /// Reserved words are uppercase and matched exactly; anything else
    /// shaped like an identifier is an Identifier.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "IF" => Some(TokenKind::If),
            "ELSE" => Some(TokenKind::Else),
            "ENDIF" => Some(TokenKind::Endif),
            "PRINT" => Some(TokenKind::Print),
            "SQRT" => Some(TokenKind::Sqrt),
            "OR" => Some(TokenKind::Or),
            "AND" => Some(TokenKind::And),
            "NOT" => Some(TokenKind::Not),
            _ => None,
        }
    }

    pub fn is_relation(&self) -> bool {
        matches!(
            self,
            TokenKind::LessThan
                | TokenKind::Equal
                | TokenKind::GreaterThan
                | TokenKind::GTEqual
                | TokenKind::NotEqual
                | TokenKind::LTEqual
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified piece of source text. For String tokens the lexeme is the
/// contents between the quotes; for EndofFile it is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Token {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub fn end() -> Token {
        Token {
            kind: TokenKind::EndofFile,
            lexeme: String::new(),
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndofFile => f.write_str("end of file"),
            TokenKind::String => write!(f, "\"{}\"", self.lexeme),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}
