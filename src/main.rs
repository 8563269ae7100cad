// SPDX-License-Identifier: PMPL-1.0-or-later

//! anglicize: stamp the group attribution header on every Java source under
//! `src/main/java` and swap known Chinese comments and strings for English.
//!
//! Run with no arguments from the project root.

use anglicize::runner::{self, RunConfig, DEFAULT_EXTENSION, DEFAULT_ROOT};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "anglicize")]
#[command(version)]
#[command(about = "Stamp attribution headers and translate Chinese comments to English")]
#[command(long_about = None)]
struct Cli {
    /// Directory to process, relative to the working directory
    #[arg(long, default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// File extension to match
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Save the run report to a file (.json, .yaml or .yml)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = RunConfig {
        root: cli.root,
        extension: cli.extension,
        verbose: cli.verbose,
    };

    let report = runner::run(&config)?;
    runner::print_summary(&report);

    if let Some(output_path) = cli.output {
        runner::write_report(&report, &output_path)?;
        println!("Report saved to: {}", output_path.display());
    }

    Ok(())
}
