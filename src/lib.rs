//! Packs a repository's contents into a single artifact for consumption by
//! large language models: walk, filter, optionally score and summarize,
//! render as one of several textual formats.

pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod ner;
pub mod orchestrator;
pub mod pattern;
pub mod progress;
pub mod reader;
pub mod render;
pub mod scorer;
pub mod service;
pub mod signal;
pub mod summarizer;
pub mod tokenizer;

pub mod prelude;

pub use cancellation::CancellationToken;

use crate::config::RepomixOptions;
use crate::core_types::RunSummary;
use crate::errors::{Error, Result};
use crate::progress::ProgressTracker;

/// The library entry point: runs one pass of the pipeline to completion (or
/// until cancelled / the deadline elapses) and returns the aggregate summary.
///
/// # Errors
/// Returns [`Error::Cancelled`] or [`Error::Timeout`] if the run is aborted
/// before finishing; a partial artifact has already been flushed to
/// `options.output_path` in both cases. Per-file problems never surface
/// here — they are folded into the returned [`RunSummary`] instead.
pub fn run(options: &RepomixOptions, token: &CancellationToken, progress: &ProgressTracker) -> Result<RunSummary> {
    log::info!("starting run over {}", options.input_path.display());
    let summary = orchestrator::execute(options, token, progress)?;
    log::info!(
        "run complete: {} files, {} lines, {} bytes{}",
        summary.file_count,
        summary.line_count,
        summary.byte_count,
        summary.token_count.map(|t| format!(", {t} tokens")).unwrap_or_default(),
    );
    Ok(summary)
}

/// A convenience wrapper around [`run`] for callers that don't need to poll
/// progress or pre-create a cancellation token.
pub fn run_to_completion(options: &RepomixOptions) -> Result<RunSummary> {
    let token = CancellationToken::new();
    let progress = ProgressTracker::new();
    run(options, &token, &progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn run_to_completion_produces_an_artifact() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "hello\n").unwrap();

        let mut options = RepomixOptions::new_for_test(dir.path());
        options.output_path = dir.path().join("out.txt");

        let summary = run_to_completion(&options).unwrap();
        assert_eq!(summary.file_count, 1);
        assert!(dir.path().join("out.txt").exists());
    }
}
