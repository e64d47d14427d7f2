use owo_colors::OwoColorize;
use simpcalc::{
    batch::BatchError, language::LoadingError, parsing::ParsingError, scanning::LexicalError,
};
use std::path::Path;

/// Format a lexical error with the offending line and a caret under the
/// discarded text.
pub fn full_lexical_error<'i>(error: &LexicalError, filename: &'i Path, source: &'i str) -> String {
    let offset = error.offset();

    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);

    let code = source
        .lines()
        .nth(i)
        .unwrap_or("?");
    let line = i + 1;
    let column = j + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}
        "#,
        "warning".bright_yellow(),
        filename.to_string_lossy(),
        line,
        column,
        error
            .message()
            .bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
    )
    .trim_ascii()
    .to_string()
}

/// Format a parsing error with concise single-line output. Tokens carry no
/// position so the offending token is named instead.
pub fn concise_parsing_error<'i>(error: &ParsingError, filename: &'i Path) -> String {
    format!(
        "{}: {}: {} (found {})",
        "error".bright_red(),
        filename.to_string_lossy(),
        error
            .message()
            .bold(),
        error.found()
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .to_string()
            .bold()
    )
}

pub fn concise_batch_error(error: &BatchError) -> String {
    format!("{}: {}", "error".bright_red(), error)
}

// Zero-origin, for splitting; add 1 for display to humans.
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => content[start + 1..offset]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}
