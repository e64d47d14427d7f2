use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::io::Write;
use std::path::Path;
use tracing::{debug, Level};

use simpcalc::batch;
use simpcalc::encoding;
use simpcalc::output::Transcript;
use simpcalc::parsing;
use simpcalc::scanning::Scanner;

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("simpcalc")
        .version(VERSION)
        .propagate_version(true)
        .about("Scanner and parser for the SimpCalc language.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Emit diagnostic logging to standard error. Repeat for more detail."),
        )
        .subcommand(
            Command::new("scan")
                .about("Write the token listing for the given program")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Write the listing to this file rather than to standard output."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the SimpCalc program to scan."),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Scan and parse the given program, reporting whether it is valid")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the SimpCalc program to check."),
                ),
        )
        .subcommand(
            Command::new("batch")
                .about("Scan and parse every sample_input_* file in a directory")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .default_value("input_files")
                        .help("Directory to read sample inputs from."),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .default_value("output_files")
                        .help("Directory to write scan listings and parse transcripts into."),
                ),
        )
        .get_matches();

    setup_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("scan", submatches)) => scan(submatches),
        Some(("check", submatches)) => check(submatches),
        Some(("batch", submatches)) => run_batch(submatches),
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: simpcalc [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}

fn scan(submatches: &ArgMatches) {
    let filename = match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => std::process::exit(2),
    };
    debug!(?filename);

    let content = read(filename);
    let listing = encoding::write_listing(&content);

    let result = match submatches.get_one::<String>("output") {
        Some(output) => std::fs::write(output, listing),
        None => std::io::stdout()
            .write_all(listing.as_bytes()),
    };

    if let Err(error) = result {
        eprintln!("{}: {}", "error".bright_red(), error);
        std::process::exit(1);
    }
}

fn check(submatches: &ArgMatches) {
    let filename = match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => std::process::exit(2),
    };
    debug!(?filename);

    let content = read(filename);

    let mut transcript = Transcript::new();
    let mut tokens = Vec::new();
    for result in Scanner::new(&content) {
        match result {
            Ok(token) => tokens.push(token),
            Err(error) => {
                eprintln!(
                    "{}",
                    problem::full_lexical_error(&error, filename, &content)
                );
                transcript.lexical_error(&error);
            }
        }
    }

    let result = parsing::recognize(filename, tokens, &mut transcript);
    print!("{}", transcript);

    if let Err(error) = result {
        eprintln!("{}", problem::concise_parsing_error(&error, filename));
        std::process::exit(1);
    }
}

fn run_batch(submatches: &ArgMatches) {
    let input = submatches
        .get_one::<String>("input")
        .map(Path::new)
        .unwrap_or(Path::new("input_files"));
    let output = submatches
        .get_one::<String>("output")
        .map(Path::new)
        .unwrap_or(Path::new("output_files"));

    let summary = batch::run(input, output).and_then(|summary| summary.render());

    match summary {
        Ok(text) => print!("{}", text),
        Err(error) => {
            eprintln!("{}", problem::concise_batch_error(&error));
            std::process::exit(1);
        }
    }
}
