//! Implementation of the `spintax check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use clap::Args;
use miette::{miette, Result};
use serde::Serialize;
use spintax::parse_template;

use crate::output::SpintaxDiagnostic;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Template files to check (one template per line, `#` starts a comment)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for per-file check results.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    templates: usize,
    errors: Vec<CheckErrorJson>,
}

/// A single template error within a file.
#[derive(Debug, Serialize)]
struct CheckErrorJson {
    line: usize,
    message: String,
}

/// Run the check command.
pub fn run_check(args: CheckArgs, verbose: bool) -> Result<i32> {
    let mut reports: Vec<CheckJson> = Vec::new();
    let mut failed = false;

    for file in &args.files {
        let content = read_to_string(file)
            .map_err(|e| miette!("Failed to read template file {:?}: {}", file, e))?;

        let mut templates = 0;
        let mut errors: Vec<CheckErrorJson> = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            templates += 1;

            if let Err(e) = parse_template(trimmed) {
                let line_number = index + 1;
                if args.json {
                    errors.push(CheckErrorJson {
                        line: line_number,
                        message: e.to_string(),
                    });
                } else {
                    let name = format!("{}:{}", file.display(), line_number);
                    let diagnostic = SpintaxDiagnostic::from_parse_error(&name, trimmed, &e);
                    eprintln!("{:?}", miette::Report::new(diagnostic));
                }
                failed = true;
            }
        }

        if verbose && !args.json {
            println!("{}: {} template(s) checked", file.display(), templates);
        }

        reports.push(CheckJson {
            file: file.display().to_string(),
            templates,
            errors,
        });
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).expect("JSON serialization should not fail")
        );
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
