//! The `repomix` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and
//! functions. By importing everything from this prelude, you can get
//! started with using `repomix` programmatically without spelling out full
//! module paths.
//!
//! # Example
//!
//! ```
//! use repomix::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let options = ConfigBuilder::new().input_path(".").build()?;
//! let token = CancellationToken::new();
//! let progress = ProgressTracker::new();
//! let summary = run(&options, &token, &progress)?;
//! println!("packed {} files", summary.file_count);
//!
//! # Ok(())
//! # }
//! ```

pub use crate::cancellation::CancellationToken;
pub use crate::config::{ConfigBuilder, NerOptions, RepomixOptions, ScoringConfig, SummarizationOptions};
pub use crate::core_types::{
    EntityKind, NamedEntity, NerMethod, OutputFormat, ProcessedFile, ProgressSnapshot, RunSummary,
    ScoredFile, ScoringReport, SelectionStrategy,
};
pub use crate::errors::{Error, Result};
pub use crate::pattern::PatternMatcher;
pub use crate::progress::{ProgressReporter, ProgressTracker};
pub use crate::render::OutputFormatter;
pub use crate::service::{capabilities, process_files, process_repo, Capabilities, InputFile, JobRegistry, ProcessResponse};
pub use crate::{run, run_to_completion};
