//! Implementation of the `spintax variants` command.

use clap::Args;
use miette::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use spintax::{expansions, lint, parse_template, stats, TemplateStats};

use crate::output::table::format_stats_table;
use crate::output::SpintaxDiagnostic;

/// Arguments for the variants command.
#[derive(Debug, Args)]
pub struct VariantsArgs {
    /// Template string to analyze
    #[arg(long, required = true)]
    pub template: String,

    /// Maximum number of expansions to list
    #[arg(long, default_value_t = 50)]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for variants results.
#[derive(Serialize)]
struct VariantsJson {
    stats: TemplateStats,
    expansions: Vec<String>,
    truncated: bool,
    warnings: Vec<String>,
}

/// Run the variants command.
pub fn run_variants(args: VariantsArgs) -> Result<i32> {
    let template = match parse_template(&args.template) {
        Ok(t) => t,
        Err(e) => {
            let diagnostic = SpintaxDiagnostic::from_parse_error("<template>", &args.template, &e);
            return Err(diagnostic.into());
        }
    };

    let summary = stats(&template);
    let listed = expansions(&template, args.limit);
    let truncated = summary.combinations > args.limit as u128;
    let warnings: Vec<String> = lint(&template).iter().map(ToString::to_string).collect();

    if args.json {
        let output = VariantsJson {
            stats: summary,
            expansions: listed,
            truncated,
            warnings,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
        return Ok(exitcode::OK);
    }

    println!("{}", format_stats_table(&summary));

    for warning in &warnings {
        eprintln!("{}: {}", "warning".yellow(), warning);
    }

    for expansion in &listed {
        println!("{}", expansion);
    }
    if truncated {
        println!(
            "... {} of {} expansions shown",
            listed.len(),
            summary.combinations
        );
    }

    Ok(exitcode::OK)
}
