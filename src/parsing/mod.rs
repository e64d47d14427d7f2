//! parser for the SimpCalc language

use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, Token};
use crate::output::{self, Transcript};
use crate::scanning;

mod parser;
mod stream;

pub use parser::{Parser, ParsingError};
pub use stream::TokenStream;

/// Read a file and return an owned String.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Run the parser over a complete token sequence. On success the
/// valid-program line naming `filename` is appended to the transcript; on
/// failure the single diagnostic line is appended instead.
pub fn recognize(
    filename: &Path,
    tokens: Vec<Token>,
    transcript: &mut Transcript,
) -> Result<(), ParsingError> {
    let result = Parser::with_stream(TokenStream::new(tokens), transcript).read_program();

    match result {
        Ok(()) => {
            debug!("{} is valid", filename.display());
            transcript.emit(output::valid_program(filename));
            Ok(())
        }
        Err(error) => {
            debug!(found = ?error.found(), "{}", error);
            transcript.emit(error.message());
            Err(error)
        }
    }
}

/// Scan and then parse source text, both stages writing into the same
/// transcript.
pub fn check(
    filename: &Path,
    content: &str,
    transcript: &mut Transcript,
) -> Result<(), ParsingError> {
    let tokens = scanning::scan(content, transcript);
    recognize(filename, tokens, transcript)
}
