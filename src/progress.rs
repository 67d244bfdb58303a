// src/progress.rs

//! Defines a trait for reporting progress of long-running operations, plus
//! the thread-safe counter handle ([`ProgressTracker`]) workers update and
//! external pollers read snapshots from.
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::core_types::ProgressSnapshot;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// A thread-safe counter set, created once by the orchestrator and shared
/// (by clone) with every worker. Writers never block on readers: each
/// field is an atomic or a short-lived mutex around `current_path` only.
#[derive(Clone)]
pub struct ProgressTracker {
    total: Arc<AtomicUsize>,
    processed: Arc<AtomicUsize>,
    skipped: Arc<AtomicUsize>,
    errored: Arc<AtomicUsize>,
    current_path: Arc<Mutex<Option<PathBuf>>>,
    is_complete: Arc<AtomicBool>,
    started_at: Instant,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            total: Arc::new(AtomicUsize::new(0)),
            processed: Arc::new(AtomicUsize::new(0)),
            skipped: Arc::new(AtomicUsize::new(0)),
            errored: Arc::new(AtomicUsize::new(0)),
            current_path: Arc::new(Mutex::new(None)),
            is_complete: Arc::new(AtomicBool::new(false)),
            started_at: Instant::now(),
        }
    }

    pub fn set_total(&self, total: usize) {
        self.total.store(total, Ordering::Relaxed);
    }

    pub fn record_processed(&self, path: &str) {
        self.processed.fetch_add(1, Ordering::Relaxed);
        *self.current_path.lock().unwrap() = Some(PathBuf::from(path));
    }

    pub fn record_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_errored(&self) {
        self.errored.fetch_add(1, Ordering::Relaxed);
    }

    pub fn mark_complete(&self) {
        self.is_complete.store(true, Ordering::Relaxed);
    }

    /// A point-in-time, lock-cheap read of the counters.
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            total: self.total.load(Ordering::Relaxed),
            processed: self.processed.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            errored: self.errored.load(Ordering::Relaxed),
            current_path: self.current_path.lock().unwrap().clone(),
            is_complete: self.is_complete.load(Ordering::Relaxed),
            elapsed_ms: self.started_at.elapsed().as_millis() as u64,
        }
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A trait for reporting progress, abstracting over specific implementations like `indicatif`.
///
/// # Examples
///
/// ```
/// use repomix::progress::ProgressReporter;
/// use std::sync::Mutex;
///
/// // A mock reporter that just stores the last message.
/// struct MockProgress {
///     last_message: Mutex<String>,
/// }
/// impl ProgressReporter for MockProgress {
///     fn set_length(&self, len: u64) {}
///     fn set_position(&self, pos: u64) {}
///     fn set_message(&self, msg: String) {
///         *self.last_message.lock().unwrap() = msg;
///     }
///     fn finish(&self) {}
///     fn finish_with_message(&self, msg: String) {
///         *self.last_message.lock().unwrap() = msg;
///     }
/// }
///
/// let reporter = MockProgress { last_message: Mutex::new("".to_string()) };
/// reporter.set_message("Working...".to_string());
/// assert_eq!(*reporter.last_message.lock().unwrap(), "Working...");
/// reporter.finish_with_message("Done.".to_string());
/// assert_eq!(*reporter.last_message.lock().unwrap(), "Done.");
/// ```
pub trait ProgressReporter: Send + Sync {
    /// Sets the total number of items to process.
    fn set_length(&self, len: u64);
    /// Sets the current position in the process.
    fn set_position(&self, pos: u64);
    /// Sets a descriptive message for the current operation (e.g., "Cloning...").
    fn set_message(&self, msg: String);
    /// Finishes the progress reporting, hiding the progress bar.
    fn finish(&self);
    /// Finishes the progress reporting with a final message and hides the progress bar.
    fn finish_with_message(&self, msg: String);
}

/// A `ProgressReporter` that does nothing.
///
/// This is used as a default or in non-interactive environments where a progress
/// bar is not desired.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn set_length(&self, _len: u64) {}
    fn set_position(&self, _pos: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self) {}
    fn finish_with_message(&self, _msg: String) {}
}

/// An implementation of `ProgressReporter` using the `indicatif` crate.
#[cfg(feature = "progress")]
#[derive(Clone)]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    /// Creates a new progress bar with a default style.
    pub fn new() -> Self {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Self { bar: pb }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn set_length(&self, len: u64) {
        self.bar.set_length(len);
    }

    fn set_position(&self, pos: u64) {
        self.bar.set_position(pos);
    }

    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish(&self) {
        self.bar.finish();
    }

    fn finish_with_message(&self, msg: String) {
        self.bar.finish_with_message(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_recorded_counts() {
        let tracker = ProgressTracker::new();
        tracker.set_total(3);
        tracker.record_processed("a.rs");
        tracker.record_skipped();

        let snap = tracker.snapshot();
        assert_eq!(snap.total, 3);
        assert_eq!(snap.processed, 1);
        assert_eq!(snap.skipped, 1);
        assert_eq!(snap.current_path, Some(PathBuf::from("a.rs")));
        assert!(!snap.is_complete);
    }

    #[test]
    fn mark_complete_is_reflected_in_snapshot() {
        let tracker = ProgressTracker::new();
        tracker.mark_complete();
        assert!(tracker.snapshot().is_complete);
    }
}
