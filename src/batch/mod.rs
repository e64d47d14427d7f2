//! Directory driver: scan every sample input to a token listing, then parse
//! each listing back into a transcript file.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::{debug, info, warn};

use crate::encoding::{self, DecodingError};
use crate::output::Transcript;
use crate::parsing;

const INPUT_PREFIX: &str = "sample_input_";

static SUMMARY: &str = "{{ for file in files }}{file.source}: {{ if file.valid }}valid{{ else }}invalid{{ endif }}
{{ endfor }}{valid} of {total} programs valid
";

#[derive(Debug)]
pub enum BatchError {
    Loading(PathBuf, String),
    Io(PathBuf, io::Error),
    Decoding(PathBuf, DecodingError),
    Template(String),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::Loading(path, problem) => write!(f, "{}: {}", path.display(), problem),
            BatchError::Io(path, error) => write!(f, "{}: {}", path.display(), error),
            BatchError::Decoding(path, error) => write!(f, "{}: {}", path.display(), error),
            BatchError::Template(problem) => write!(f, "summary template: {}", problem),
        }
    }
}

/// One input file and the two files derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub source: PathBuf,
    pub scan: PathBuf,
    pub parse: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub source: String,
    pub valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub files: Vec<Outcome>,
    pub valid: usize,
    pub total: usize,
}

impl Summary {
    pub fn render(&self) -> Result<String, BatchError> {
        let mut tt = TinyTemplate::new();
        tt.set_default_formatter(&tinytemplate::format_unescaped);
        tt.add_template("summary", SUMMARY)
            .map_err(|error| BatchError::Template(error.to_string()))?;

        tt.render("summary", self)
            .map_err(|error| BatchError::Template(error.to_string()))
    }
}

/// Derive an output file name by replacing the first occurrence of "input"
/// with "output_" followed by the phase, so `sample_input_3.txt` becomes
/// `sample_output_scan_3.txt`.
pub fn output_name(input: &str, phase: &str) -> Option<String> {
    let i = input.find("input")?;
    Some(format!(
        "{}output_{}{}",
        &input[..i],
        phase,
        &input[i + "input".len()..]
    ))
}

/// Find the sample inputs in a directory, in name order.
pub fn discover(input: &Path, output: &Path) -> Result<Vec<Job>, BatchError> {
    let entries = fs::read_dir(input).map_err(|error| BatchError::Io(input.to_path_buf(), error))?;

    let mut jobs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|error| BatchError::Io(input.to_path_buf(), error))?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let name = match path
            .file_name()
            .and_then(|s| s.to_str())
        {
            Some(name) if name.starts_with(INPUT_PREFIX) => name.to_string(),
            _ => {
                debug!("ignoring {}", path.display());
                continue;
            }
        };

        if let (Some(scan), Some(parse)) = (output_name(&name, "scan"), output_name(&name, "parse"))
        {
            jobs.push(Job {
                source: path,
                scan: output.join(scan),
                parse: output.join(parse),
            });
        }
    }

    jobs.sort_by(|a, b| {
        a.source
            .cmp(&b.source)
    });
    Ok(jobs)
}

/// Scan one input to its listing, read the listing back, and parse it.
/// Returns whether the program was valid.
pub fn run_job(job: &Job) -> Result<bool, BatchError> {
    let content = parsing::load(&job.source)
        .map_err(|error| BatchError::Loading(job.source.clone(), error.to_string()))?;

    let listing = encoding::write_listing(&content);
    fs::write(&job.scan, listing).map_err(|error| BatchError::Io(job.scan.clone(), error))?;
    info!("Scanned {}", job.source.display());

    let text =
        fs::read_to_string(&job.scan).map_err(|error| BatchError::Io(job.scan.clone(), error))?;
    let tokens = encoding::read_listing(&text)
        .map_err(|error| BatchError::Decoding(job.scan.clone(), error))?;

    let mut transcript = Transcript::new();
    let valid = parsing::recognize(&job.source, tokens, &mut transcript).is_ok();

    let mut file =
        fs::File::create(&job.parse).map_err(|error| BatchError::Io(job.parse.clone(), error))?;
    transcript
        .write_to(&mut file)
        .map_err(|error| BatchError::Io(job.parse.clone(), error))?;
    info!("Parsed {}", job.source.display());

    Ok(valid)
}

/// Process every sample input in `input`, writing results into `output`
/// (created if missing).
pub fn run(input: &Path, output: &Path) -> Result<Summary, BatchError> {
    if !output.exists() {
        fs::create_dir_all(output).map_err(|error| BatchError::Io(output.to_path_buf(), error))?;
    }

    let jobs = discover(input, output)?;
    if jobs.is_empty() {
        warn!("No {}* files in {}", INPUT_PREFIX, input.display());
    }

    let mut files = Vec::with_capacity(jobs.len());
    for job in &jobs {
        let valid = run_job(job)?;
        files.push(Outcome {
            source: job
                .source
                .display()
                .to_string(),
            valid,
        });
    }

    let valid = files
        .iter()
        .filter(|outcome| outcome.valid)
        .count();

    Ok(Summary {
        total: files.len(),
        valid,
        files,
    })
}
