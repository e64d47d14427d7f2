use std::fmt;

use tracing::{debug, trace};

use crate::language::{Token, TokenKind};
use crate::scanning::Scanner;

/// Width of the left-justified column holding the token type name.
pub const COLUMN: usize = 17;

const LEXICAL_PREFIX: &str = "Lexical Error:";
const ERROR_MARKER: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodingError {
    UnknownKind(usize, String),
    MalformedString(usize),
}

impl DecodingError {
    /// One-origin line number within the listing.
    pub fn line(&self) -> usize {
        match self {
            DecodingError::UnknownKind(line, _) => *line,
            DecodingError::MalformedString(line) => *line,
        }
    }
}

impl fmt::Display for DecodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodingError::UnknownKind(line, name) => {
                write!(f, "line {}: unknown token type '{}'", line, name)
            }
            DecodingError::MalformedString(line) => {
                write!(f, "line {}: string lexeme is not enclosed in quotes", line)
            }
        }
    }
}

/// Render one token as a listing line, without the trailing newline.
pub fn encode(token: &Token) -> String {
    match token.kind {
        TokenKind::String => format!(
            "{:<width$}\"{}\"",
            token
                .kind
                .name(),
            token.lexeme,
            width = COLUMN
        ),
        _ => format!(
            "{:<width$}{}",
            token
                .kind
                .name(),
            token.lexeme,
            width = COLUMN
        ),
    }
}

/// Scan the source and produce the listing written out by the scan phase:
/// one line per token, with the lines for any lexical errors interleaved
/// where they occurred.
pub fn write_listing(source: &str) -> String {
    let mut listing = String::new();

    for result in Scanner::new(source) {
        match result {
            Ok(token) => {
                listing.push_str(&encode(&token));
            }
            Err(error) => {
                debug!(offset = error.offset(), "{}", error);
                listing.push_str(&error.to_string());
                listing.push('\n');
                listing.push_str(ERROR_MARKER);
            }
        }
        listing.push('\n');
    }

    listing
}

/// Rehydrate a token sequence from a listing. Lexical error lines are
/// skipped, reading stops at the first EndofFile, and an EndofFile is
/// supplied if the listing ends without one.
pub fn read_listing(text: &str) -> Result<Vec<Token>, DecodingError> {
    let mut tokens = Vec::new();

    for (i, line) in text
        .lines()
        .enumerate()
    {
        let number = i + 1;

        if line
            .trim()
            .is_empty()
            || line.starts_with(LEXICAL_PREFIX)
            || line.trim() == ERROR_MARKER
        {
            trace!(number, "skipping");
            continue;
        }

        let token = decode(number, line)?;
        if token.is(TokenKind::EndofFile) {
            tokens.push(token);
            return Ok(tokens);
        }
        tokens.push(token);
    }

    debug!("listing ended without EndofFile");
    tokens.push(Token::end());
    Ok(tokens)
}

fn decode(number: usize, line: &str) -> Result<Token, DecodingError> {
    let line = line.trim_start();
    let (name, rest) = match line.find(char::is_whitespace) {
        Some(i) => (&line[..i], &line[i..]),
        None => (line, ""),
    };

    let kind = match TokenKind::from_name(name) {
        Some(kind) => kind,
        None => return Err(DecodingError::UnknownKind(number, name.to_string())),
    };

    if kind == TokenKind::String {
        let quoted = rest
            .trim_start()
            .strip_prefix('"')
            .ok_or(DecodingError::MalformedString(number))?;
        let end = quoted
            .find('"')
            .ok_or(DecodingError::MalformedString(number))?;
        return Ok(Token::new(kind, &quoted[..end]));
    }

    Ok(Token::new(kind, rest.trim()))
}
