#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use simpcalc::output::Transcript;
    use simpcalc::parsing;

    fn collect(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read samples directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("sc")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .sc files found in {:?}", dir);
        files
    }

    #[test]
    fn ensure_samples_parse() {
        let files = collect(Path::new("tests/samples/"));

        let mut failures = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let mut transcript = Transcript::new();
            match parsing::check(&file, &content, &mut transcript) {
                Ok(_) => {
                    let last = transcript
                        .lines()
                        .last()
                        .cloned()
                        .unwrap_or_default();
                    assert!(last.ends_with("is a valid SimpCalc program"));
                }
                Err(e) => {
                    println!("File {:?} failed to parse: {:?}", file, e);
                    failures.push(file.clone());
                }
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should parse successfully, but {} files failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_fail() {
        let files = collect(Path::new("tests/broken/"));

        let mut unexpected_successes = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let mut transcript = Transcript::new();
            match parsing::check(&file, &content, &mut transcript) {
                Ok(_) => {
                    println!("File {:?} unexpectedly parsed successfully", file);
                    unexpected_successes.push(file.clone());
                }
                Err(_) => {
                    assert!(!transcript
                        .lines()
                        .iter()
                        .any(|line| line.ends_with("is a valid SimpCalc program")));
                }
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken files should not to parse successfully, but {} files passed",
                unexpected_successes.len()
            );
        }
    }

    #[test]
    fn missing_file() {
        let result = parsing::load(Path::new("tests/samples/no_such_file.sc"));

        let error = result.unwrap_err();
        assert_eq!(error.problem, "File not found");
    }
}
