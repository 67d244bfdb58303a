//! A request/response surface for embedding the pipeline behind something
//! other than the CLI (an HTTP handler, an editor extension, a job queue).
//! Everything here is plain Rust: no HTTP types, no framework dependency.
//! Binding these functions to actual routes is left to the embedder.

use crate::cancellation::CancellationToken;
use crate::config::RepomixOptions;
use crate::core_types::{ProgressSnapshot, RunSummary, ScoringReport};
use crate::errors::{Error, Result};
use crate::orchestrator;
use crate::progress::ProgressTracker;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// One file submitted directly as bytes, as opposed to discovered by
/// walking a directory.
pub struct InputFile {
    /// Path relative to the (synthetic) repository root.
    pub path: String,
    pub content: Vec<u8>,
}

/// Response for `process_files` / `process_repo`.
pub struct ProcessResponse {
    pub success: bool,
    pub content: Option<String>,
    pub content_snippet: Option<String>,
    pub token_count: Option<usize>,
    pub tokenizer: Option<String>,
    pub scoring_report: Option<ScoringReport>,
}

/// Mirrors `GET capabilities`.
pub struct Capabilities {
    pub available_threads: usize,
    pub server_version: &'static str,
    pub supports_multithreading: bool,
}

pub fn capabilities() -> Capabilities {
    Capabilities {
        available_threads: std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
        server_version: env!("CARGO_PKG_VERSION"),
        supports_multithreading: true,
    }
}

/// Mirrors `GET progress/{jobId}`.
pub struct JobProgress {
    pub id: String,
    pub total_files: usize,
    pub processed_files: usize,
    pub skipped_files: usize,
    pub error_files: usize,
    pub current_file: Option<PathBuf>,
    pub is_complete: bool,
    pub percentage: f64,
    pub elapsed_ms: u64,
}

impl JobProgress {
    fn from_snapshot(id: &str, snap: ProgressSnapshot) -> Self {
        Self {
            id: id.to_string(),
            total_files: snap.total,
            processed_files: snap.processed,
            skipped_files: snap.skipped,
            error_files: snap.errored,
            current_file: snap.current_path.clone(),
            is_complete: snap.is_complete,
            percentage: snap.percentage(),
            elapsed_ms: snap.elapsed_ms,
        }
    }
}

/// A `jobId -> ProgressTracker` map with explicit insertion and removal,
/// rather than a module-level singleton registry. Callers own one instance
/// and pass it into every `process_*` / `progress_snapshot` call.
#[derive(Default)]
pub struct JobRegistry {
    jobs: Mutex<HashMap<String, ProgressTracker>>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&self, job_id: &str, tracker: ProgressTracker) {
        self.jobs.lock().unwrap().insert(job_id.to_string(), tracker);
    }

    fn remove(&self, job_id: &str) {
        self.jobs.lock().unwrap().remove(job_id);
    }

    /// Looks up the tracker registered for `job_id` and returns its current
    /// snapshot. Returns `None` once the job has finished and been removed,
    /// or if `job_id` was never registered.
    pub fn progress_snapshot(&self, job_id: &str) -> Option<JobProgress> {
        let tracker = self.jobs.lock().unwrap().get(job_id)?.clone();
        Some(JobProgress::from_snapshot(job_id, tracker.snapshot()))
    }
}

/// Receives a set of files directly (as submitted over the wire) and packs
/// them as if they were a small repository rooted at a synthetic directory.
///
/// The caller picks `job_id`; it must be unique among concurrently running
/// jobs since it doubles as the scratch directory name and the progress
/// registry key.
pub fn process_files(
    job_id: &str,
    files: &[InputFile],
    options: &RepomixOptions,
    registry: &JobRegistry,
) -> Result<ProcessResponse> {
    let root = std::env::temp_dir().join(format!("repomix-service-{job_id}"));
    fs::create_dir_all(&root).map_err(|e| crate::errors::io_error_with_path(e, &root))?;

    for file in files {
        let dest = root.join(&file.path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| crate::errors::io_error_with_path(e, parent))?;
        }
        fs::write(&dest, &file.content).map_err(|e| crate::errors::io_error_with_path(e, &dest))?;
    }

    let result = process_repo(job_id, &root, options, registry);
    let _ = fs::remove_dir_all(&root);
    result
}

/// Packs a directory that has already been materialized on disk (for
/// example by an embedder's own git-clone step; cloning itself is out of
/// scope here).
pub fn process_repo(
    job_id: &str,
    repo_path: &Path,
    options: &RepomixOptions,
    registry: &JobRegistry,
) -> Result<ProcessResponse> {
    let mut run_options = options.clone();
    run_options.input_path = repo_path.to_path_buf();
    if run_options.output_path.as_os_str().is_empty() {
        run_options.output_path = repo_path.join("repomix-output.txt");
    }

    let token = CancellationToken::new();
    let tracker = ProgressTracker::new();
    registry.insert(job_id, tracker.clone());

    let outcome = orchestrator::execute(&run_options, &token, &tracker);
    registry.remove(job_id);

    let summary: RunSummary = match outcome {
        Ok(summary) => summary,
        Err(Error::Cancelled | Error::Timeout) => {
            return Ok(ProcessResponse {
                success: false,
                content: None,
                content_snippet: None,
                token_count: None,
                tokenizer: None,
                scoring_report: None,
            })
        }
        Err(e) => return Err(e),
    };

    let content = if run_options.tokens_only {
        None
    } else {
        Some(
            fs::read_to_string(&run_options.output_path)
                .map_err(|e| crate::errors::io_error_with_path(e, &run_options.output_path))?,
        )
    };
    let content_snippet = content.as_ref().map(|c| c.chars().take(500).collect());

    Ok(ProcessResponse {
        success: true,
        content,
        content_snippet,
        token_count: summary.token_count,
        tokenizer: if summary.token_count.is_some() { Some(run_options.token_encoding.clone()) } else { None },
        scoring_report: summary.scoring_report,
    })
}
