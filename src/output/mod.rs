//! Output sink shared by the scanner and the parser

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use crate::scanning::LexicalError;

pub const ASSIGNMENT_RECOGNIZED: &str = "Assignment Statement Recognized";
pub const PRINT_RECOGNIZED: &str = "Print Statement Recognized";
pub const IF_BEGINS: &str = "If Statement Begins";
pub const IF_ENDS: &str = "If Statement Ends";

/// The line appended when a program is recognized without error.
pub fn valid_program(filename: &Path) -> String {
    format!("{} is a valid SimpCalc program", filename.display())
}

/// Lines of human readable output accumulated over one run, in the order
/// they were emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Transcript {
        Transcript { lines: Vec::new() }
    }

    pub fn emit(&mut self, line: impl Into<String>) {
        self.lines
            .push(line.into());
    }

    /// Lexical errors are reported as the reason followed by a marker line.
    pub fn lexical_error(&mut self, error: &LexicalError) {
        self.emit(error.to_string());
        self.emit("Error");
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines
            .is_empty()
    }

    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
