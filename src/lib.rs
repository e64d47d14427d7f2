//! Recognizer for SimpCalc programs: a longest-match scanner feeding a
//! predictive recursive descent parser.

pub mod batch;
pub mod encoding;
pub mod language;
pub mod output;
pub mod parsing;
pub mod scanning;
