//! Implementation of the `spintax expand` command.

use clap::Args;
use miette::Result;
use owo_colors::OwoColorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use spintax::resolve_with;

/// Arguments for the expand command.
#[derive(Debug, Args)]
pub struct ExpandArgs {
    /// Template string to expand
    #[arg(long, required = true)]
    pub template: String,

    /// Number of expansions to produce
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible selection (defaults to thread-local randomness)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for expand results.
#[derive(Serialize)]
struct ExpandJson {
    results: Vec<String>,
}

/// Run the expand command.
pub fn run_expand(args: ExpandArgs) -> Result<i32> {
    if !spintax::validate(&args.template) && !args.json {
        eprintln!(
            "{}: template has unbalanced braces; output may contain leftovers",
            "warning".yellow()
        );
    }

    let results: Vec<String> = match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..args.count)
                .map(|_| resolve_with(&args.template, &mut rng))
                .collect()
        }
        None => {
            let mut rng = rand::thread_rng();
            (0..args.count)
                .map(|_| resolve_with(&args.template, &mut rng))
                .collect()
        }
    };

    if args.json {
        let output = ExpandJson { results };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        for result in &results {
            println!("{}", result);
        }
    }

    Ok(exitcode::OK)
}
