//! Per-file and batch processing
//!
//! Each file goes through the same stages:
//! 1. **Read**: load the document as UTF-8 text
//! 2. **Detect**: skip the file if it already carries a slot marker
//! 3. **Plan**: insert the video marker, then the ad markers, into one line buffer
//! 4. **Write**: overwrite the file once if anything was inserted

use crate::markers::has_existing_markers;
use crate::planner::{self, AdPlacement};
use crate::walker::{self, WalkerError};
use std::path::{Path, PathBuf};
use thiserror::Error;

const SEPARATOR_WIDTH: usize = 50;

/// Options shared by every file in a batch
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOptions {
    /// Plan and report without writing anything
    pub dry_run: bool,
}

/// Result of processing a single file that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// At least one marker was inserted (and written unless dry run)
    Processed {
        /// Line index the video marker went to, if any
        video: Option<usize>,
        /// Where the ad markers went, if anywhere
        ads: Option<AdPlacement>,
    },
    /// The file already contained a marker and was left alone
    Skipped,
    /// Neither a heading nor enough paragraph boundaries were found
    NoInsertionPoints,
}

/// Errors that can occur while processing a single file
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error reading {path}: {source}", path = .0.display(), source = .1)]
    Read(PathBuf, #[source] std::io::Error),

    #[error("IO error writing {path}: {source}", path = .0.display(), source = .1)]
    Write(PathBuf, #[source] std::io::Error),
}

/// Insert markers into `content`
///
/// Returns the outcome together with the rewritten text, which is present
/// only for `FileOutcome::Processed`.
pub fn plan_document(content: &str) -> (FileOutcome, Option<String>) {
    if has_existing_markers(content) {
        return (FileOutcome::Skipped, None);
    }

    let mut lines = planner::split_lines(content);
    let video = planner::insert_video_slot(&mut lines);
    let ads = planner::insert_ad_slots(&mut lines);

    if video.is_none() && ads.is_none() {
        return (FileOutcome::NoInsertionPoints, None);
    }

    (
        FileOutcome::Processed { video, ads },
        Some(planner::join_lines(&lines)),
    )
}

/// Process a single markdown file in place
///
/// # Parameters
/// * `path` - Markdown file to read and possibly rewrite
/// * `options` - Batch options (dry run)
///
/// # Returns
/// * `Ok(FileOutcome)` - The file was handled; see the variant for what happened
/// * `Err(ProcessError)` - Reading, decoding or writing the file failed
pub fn process_file(path: &Path, options: ProcessOptions) -> Result<FileOutcome, ProcessError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ProcessError::Read(path.to_path_buf(), e))?;

    let (outcome, new_content) = plan_document(&content);
    let Some(new_content) = new_content else {
        return Ok(outcome);
    };

    if let FileOutcome::Processed { video, ads } = &outcome {
        if let Some(line) = video {
            log::debug!("{}: video slot at line {}", path.display(), line);
        }
        if let Some(ads) = ads {
            log::debug!(
                "{}: ad slots after lines {} and {} ({} paragraph boundaries)",
                path.display(),
                ads.first_line,
                ads.second_line,
                ads.boundary_count
            );
        }
    }

    if options.dry_run {
        log::info!("Dry run, not writing {}", path.display());
    } else {
        std::fs::write(path, new_content)
            .map_err(|e| ProcessError::Write(path.to_path_buf(), e))?;
    }

    Ok(outcome)
}

/// Counts accumulated over a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Markdown files discovered
    pub total: usize,
    /// Files that received at least one marker
    pub processed: usize,
    /// Files that already had markers
    pub skipped: usize,
    /// Files with nowhere to insert a marker
    pub no_insertion_points: usize,
    /// Files that failed to read or write
    pub errors: usize,
}

impl BatchSummary {
    fn record(&mut self, result: &Result<FileOutcome, ProcessError>) {
        match result {
            Ok(FileOutcome::Processed { .. }) => self.processed += 1,
            Ok(FileOutcome::Skipped) => self.skipped += 1,
            Ok(FileOutcome::NoInsertionPoints) => self.no_insertion_points += 1,
            Err(_) => self.errors += 1,
        }
    }
}

/// Discover and process every markdown file under `root`
///
/// Per-file failures are reported and counted but never abort the batch.
///
/// # Returns
/// * `Ok(BatchSummary)` - Counts for the whole run
/// * `Err(WalkerError)` - `root` is not a directory or could not be read
pub fn run_batch(root: &Path, options: ProcessOptions) -> Result<BatchSummary, WalkerError> {
    walker::ensure_directory(root)?;

    println!("Processing markdown files in: {}", root.display());
    print_separator();

    let files = walker::find_markdown_files(root)?;
    let mut summary = BatchSummary {
        total: files.len(),
        ..BatchSummary::default()
    };

    if files.is_empty() {
        println!("No markdown files found in the specified directory.");
        return Ok(summary);
    }

    println!("Found {} markdown file(s)", files.len());
    print_separator();

    for path in &files {
        let result = process_file(path, options);
        report_file(path, &result, options);
        summary.record(&result);
    }

    print_separator();
    print_summary(&summary, options);

    Ok(summary)
}

fn report_file(path: &Path, result: &Result<FileOutcome, ProcessError>, options: ProcessOptions) {
    match result {
        Ok(FileOutcome::Processed { .. }) if options.dry_run => {
            println!("  ✓ Would process: {}", path.display());
        }
        Ok(FileOutcome::Processed { .. }) => println!("  ✓ Processed: {}", path.display()),
        Ok(FileOutcome::Skipped) => {
            println!("  Skipping (already has spans): {}", path.display());
        }
        Ok(FileOutcome::NoInsertionPoints) => {
            println!("  ! No suitable insertion points found: {}", path.display());
        }
        Err(e) => {
            let message = match e {
                ProcessError::Read(_, source) | ProcessError::Write(_, source) => source,
            };
            println!("  ✗ Error processing {}: {}", path.display(), message);
        }
    }
}

fn print_separator() {
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}

fn print_summary(summary: &BatchSummary, options: ProcessOptions) {
    let prefix = if options.dry_run { "[dry run] " } else { "" };
    println!(
        "{}Summary: Processed {} out of {} files ({} skipped, {} without insertion points, {} errors)",
        prefix,
        summary.processed,
        summary.total,
        summary.skipped,
        summary.no_insertion_points,
        summary.errors
    );
}
