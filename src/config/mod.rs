//! Defines `RepomixOptions` and its nested configuration structs.
//!
//! This module consolidates every setting parsed from the CLI (or supplied
//! programmatically) into a validated, immutable structure consumed by the
//! rest of the pipeline.

mod builder;
mod parsing;

pub use builder::ConfigBuilder;

use crate::constants::{
    DEFAULT_CONFIG_EXTENSIONS, DEFAULT_DOCS_EXTENSIONS, DEFAULT_IMPORTANT_DIRS,
    DEFAULT_IMPORTANT_FILES, DEFAULT_SOURCE_EXTENSIONS, DEFAULT_TEST_PATTERNS,
    DEFAULT_OUTPUT_SIZE_CEILING_BYTES, DEFAULT_RUN_DEADLINE_SECS,
};
use crate::core_types::{EntityKind, NerMethod, OutputFormat, SelectionStrategy};
use std::path::PathBuf;
use std::time::Duration;

/// NER-specific sub-options nested inside [`SummarizationOptions`].
#[derive(Debug, Clone)]
pub struct NerOptions {
    pub enabled: bool,
    pub method: NerMethod,
    /// Entity kinds to keep; empty means keep every kind.
    pub include_kinds: Vec<EntityKind>,
    pub max_entities: usize,
    pub group_by_kind: bool,
    pub ml_size_threshold_bytes: u64,
    pub ml_confidence: f64,
    pub max_ml_ms: u64,
    pub cache: bool,
}

impl Default for NerOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            method: NerMethod::Regex,
            include_kinds: Vec::new(),
            max_entities: 100,
            group_by_kind: false,
            ml_size_threshold_bytes: 4096,
            ml_confidence: 0.5,
            max_ml_ms: 500,
            cache: true,
        }
    }
}

/// Controls whether and how a file's content is replaced with a compact
/// summary before rendering.
#[derive(Debug, Clone)]
pub struct SummarizationOptions {
    pub enabled: bool,
    pub first_n_lines: Option<usize>,
    pub signatures: bool,
    pub docstrings: bool,
    pub snippets_count: Option<usize>,
    pub readme_passthrough: bool,
    pub use_syntax_tree: bool,
    pub file_size_threshold_bytes: u64,
    pub max_summary_lines: usize,
    pub ner: NerOptions,
}

impl Default for SummarizationOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            first_n_lines: None,
            signatures: false,
            docstrings: false,
            snippets_count: None,
            readme_passthrough: true,
            use_syntax_tree: false,
            file_size_threshold_bytes: 8 * 1024,
            max_summary_lines: 200,
            ner: NerOptions::default(),
        }
    }
}

/// Weights and thresholds consumed by the `FileScorer`.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub weight_structure_root: f64,
    pub weight_structure_top_dir: f64,
    pub weight_structure_entry_point: f64,
    pub weight_structure_graph: f64,
    pub weight_type: f64,
    pub weight_recency: f64,
    pub weight_size_inv: f64,
    pub weight_density: f64,
    pub recent_window_days: u32,
    pub large_file_threshold_bytes: u64,
    pub inclusion_threshold: f64,
    pub important_files: Vec<String>,
    pub important_dirs: Vec<String>,
    pub source_extensions: Vec<String>,
    pub config_extensions: Vec<String>,
    pub docs_extensions: Vec<String>,
    pub test_patterns: Vec<String>,
    pub use_syntax_tree: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weight_structure_root: 1.0,
            weight_structure_top_dir: 0.7,
            weight_structure_entry_point: 0.8,
            weight_structure_graph: 0.6,
            weight_type: 0.5,
            weight_recency: 0.4,
            weight_size_inv: 0.3,
            weight_density: 0.3,
            recent_window_days: 30,
            large_file_threshold_bytes: 100 * 1024,
            inclusion_threshold: 0.3,
            important_files: DEFAULT_IMPORTANT_FILES.iter().map(|s| s.to_string()).collect(),
            important_dirs: DEFAULT_IMPORTANT_DIRS.iter().map(|s| s.to_string()).collect(),
            source_extensions: DEFAULT_SOURCE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            config_extensions: DEFAULT_CONFIG_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            docs_extensions: DEFAULT_DOCS_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            test_patterns: DEFAULT_TEST_PATTERNS.iter().map(|s| s.to_string()).collect(),
            use_syntax_tree: false,
        }
    }
}

/// The fully validated, immutable configuration for one run. Constructed
/// exclusively through [`ConfigBuilder::build`].
#[derive(Debug, Clone)]
pub struct RepomixOptions {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub verbose: bool,
    pub show_timing: bool,
    pub threads: usize,
    pub include_csv: Option<String>,
    pub exclude_csv: Option<String>,
    pub summarization: SummarizationOptions,
    pub selection_strategy: SelectionStrategy,
    pub scoring: ScoringConfig,
    pub count_tokens: bool,
    pub token_encoding: String,
    pub tokens_only: bool,
    pub run_deadline: Duration,
    pub output_size_ceiling_bytes: u64,
}

impl RepomixOptions {
    /// A configuration suitable for unit/integration tests: a single
    /// worker thread and a small deadline so a hung test fails fast.
    #[doc(hidden)]
    pub fn new_for_test(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: PathBuf::from("repomix-output.txt"),
            format: OutputFormat::Plain,
            verbose: false,
            show_timing: false,
            threads: 1,
            include_csv: None,
            exclude_csv: None,
            summarization: SummarizationOptions::default(),
            selection_strategy: SelectionStrategy::All,
            scoring: ScoringConfig::default(),
            count_tokens: false,
            token_encoding: "cl100k_base".to_string(),
            tokens_only: false,
            run_deadline: Duration::from_secs(DEFAULT_RUN_DEADLINE_SECS),
            output_size_ceiling_bytes: DEFAULT_OUTPUT_SIZE_CEILING_BYTES,
        }
    }
}
