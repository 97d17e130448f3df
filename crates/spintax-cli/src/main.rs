//! Spintax CLI entry point.
//!
//! Provides command-line tools for working with spintax templates:
//! - `spintax check` - Validate template files
//! - `spintax expand` - Resolve a template into concrete strings
//! - `spintax variants` - Analyze a template's expansion space

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_expand, run_variants, CheckArgs, ExpandArgs, VariantsArgs};

/// Spintax template tools.
#[derive(Debug, Parser)]
#[command(name = "spintax")]
#[command(about = "Spintax template tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check template files for syntax errors
    Check(CheckArgs),
    /// Resolve a template into concrete strings
    Expand(ExpandArgs),
    /// Analyze a template's expansion space
    Variants(VariantsArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args, cli.verbose),
        Commands::Expand(args) => run_expand(args),
        Commands::Variants(args) => run_variants(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
