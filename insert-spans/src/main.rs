//! insert-spans - slot marker insertion for markdown content
//!
//! A CLI tool that walks a directory of Markdown files and inserts invisible
//! `<span>` placeholders for a video slot and two ad slots.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod cli;
mod markers;
mod pipeline;
mod planner;
mod walker;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use pipeline::ProcessOptions;

/// Main entry point for the insert-spans CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = parse_args();

    // Initialize logging; --verbose overrides RUST_LOG
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let options = ProcessOptions {
        dry_run: cli.dry_run,
    };

    let summary = pipeline::run_batch(&cli.directory, options)
        .with_context(|| format!("Failed to process {}", cli.directory.display()))?;

    log::info!("Finished: {:?}", summary);

    Ok(())
}

/// Parse arguments, exiting with status 1 on usage errors
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Nothing more to report if stderr itself is unwritable
            let _ = e.print();
            std::process::exit(1);
        }
    }
}
