//! Command-line interface definitions for insert-spans

use clap::Parser;
use std::path::PathBuf;

/// CLI structure for the insert-spans application
#[derive(Parser, Debug)]
#[command(name = "insert-spans")]
#[command(version)]
#[command(
    about = "Insert video and ad slot markers into markdown files",
    long_about = "Recursively finds *.md files under DIRECTORY and inserts invisible \
                  <span> markers: one video slot before the first `## ` heading and \
                  two ad slots at roughly 40% and 80% of the paragraph boundaries. \
                  Files that already contain a marker are left untouched."
)]
pub struct Cli {
    /// Directory to scan for markdown files
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Verbose output (debug logging and per-file planning detail)
    #[arg(short, long)]
    pub verbose: bool,

    /// Report what would change without writing any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}
