//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes every error kind
//! the pipeline can produce. Per-file conditions (`PatternError`,
//! `BinarySkipped`, `SummarizerFallback`, `TokenizerUnavailable`,
//! `OutputOverflow`) are recorded in the run summary and never abort a run;
//! `InvalidOptions` aborts before any file is touched; `Timeout` and
//! `Cancelled` are the only conditions that terminate a run in progress.

use thiserror::Error as ThisError;

/// Errors produced by the `repomix` pipeline.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Conflicting or malformed options, surfaced before any work starts.
    #[error("invalid configuration: {0}")]
    InvalidOptions(String),

    /// I/O error accessing a path (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    IoError {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// An ignore/include glob pattern could not be parsed. Logged and
    /// skipped; never fatal.
    #[error("invalid pattern '{pattern}': {reason}")]
    PatternError {
        /// The offending pattern text.
        pattern: String,
        /// Human-readable reason the pattern was rejected.
        reason: String,
    },

    /// A file was classified as non-textual and excluded from content.
    #[error("binary file skipped: {0}")]
    BinarySkipped(String),

    /// A summarizer backend (syntax-tree or ML) was unavailable and the
    /// regex backend was used instead.
    #[error("summarizer backend '{backend}' unavailable for '{path}', falling back to regex")]
    SummarizerFallback {
        /// The backend that could not be used.
        backend: String,
        /// The file that triggered the fallback.
        path: String,
    },

    /// The requested tokenizer encoding could not be loaded. The run
    /// completes without a token count.
    #[error("tokenizer encoding '{0}' is unavailable")]
    TokenizerUnavailable(String),

    /// The global run deadline was exceeded. Fatal for the run; a partial
    /// artifact is still flushed by the caller.
    #[error("run exceeded its deadline")]
    Timeout,

    /// The run was cancelled externally (e.g. Ctrl+C). A partial artifact
    /// is still flushed by the caller.
    #[error("operation cancelled")]
    Cancelled,

    /// The output-size ceiling was hit; remaining content was truncated.
    #[error("output size ceiling exceeded, content truncated")]
    OutputOverflow,

    /// No files survived enumeration and filtering.
    #[error("no files found matching the specified criteria")]
    NoFilesFound,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper to build an [`Error::IoError`] with path context attached.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::IoError {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Maps a terminal [`Error`] to the process exit code documented for the
/// CLI surface: `0` success, `1` usage error, `2` I/O error, `3` timeout,
/// `4` cancelled.
pub fn exit_code(err: &Error) -> i32 {
    match err {
        Error::InvalidOptions(_) | Error::NoFilesFound => 1,
        Error::IoError { .. } => 2,
        Error::Timeout => 3,
        Error::Cancelled => 4,
        Error::PatternError { .. }
        | Error::BinarySkipped(_)
        | Error::SummarizerFallback { .. }
        | Error::TokenizerUnavailable(_)
        | Error::OutputOverflow => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn io_error_with_path_preserves_context() {
        let path = PathBuf::from("some/test/path.txt");
        let source = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = io_error_with_path(source, &path);

        match err {
            Error::IoError { path, source } => {
                assert!(path.contains("some/test/path.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Error::IoError, got {other:?}"),
        }
    }

    #[test]
    fn display_messages_are_human_readable() {
        assert_eq!(
            Error::InvalidOptions("bad".into()).to_string(),
            "invalid configuration: bad"
        );
        assert_eq!(
            Error::NoFilesFound.to_string(),
            "no files found matching the specified criteria"
        );
        assert_eq!(Error::Cancelled.to_string(), "operation cancelled");
    }

    #[test]
    fn exit_codes_match_documented_mapping() {
        assert_eq!(exit_code(&Error::InvalidOptions("x".into())), 1);
        assert_eq!(
            exit_code(&Error::IoError {
                path: "p".into(),
                source: io::Error::new(io::ErrorKind::Other, "x")
            }),
            2
        );
        assert_eq!(exit_code(&Error::Timeout), 3);
        assert_eq!(exit_code(&Error::Cancelled), 4);
    }
}
