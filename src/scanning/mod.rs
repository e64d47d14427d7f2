//! scanner for the SimpCalc language

use tracing::debug;

use crate::language::Token;
use crate::output::Transcript;

mod scanner;

pub use scanner::{LexicalError, Scanner};

/// Scan an entire source text into its token sequence. Lexical errors are
/// written to the transcript as they are found and the offending text is
/// dropped; scanning always runs to the end of the input.
pub fn scan(source: &str, transcript: &mut Transcript) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut problems = 0;

    for result in Scanner::new(source) {
        match result {
            Ok(token) => tokens.push(token),
            Err(error) => {
                debug!(offset = error.offset(), text = error.text(), "{}", error);
                transcript.lexical_error(&error);
                problems += 1;
            }
        }
    }

    debug!(
        "Scanned {} token{} with {} lexical error{}",
        tokens.len(),
        if tokens.len() == 1 { "" } else { "s" },
        problems,
        if problems == 1 { "" } else { "s" }
    );

    tokens
}
