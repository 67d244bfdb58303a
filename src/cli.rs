// src/cli.rs

use clap::Parser;

/// Packs a repository's contents into a single artifact for consumption by
/// large language models.
///
/// Walks a directory, filters files against ignore/include rules, optionally
/// scores and summarizes their content, and renders the corpus as one of
/// several textual formats suitable for pasting into an LLM context window.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Repository root to process.
    #[arg(long, value_name = "PATH")]
    pub input: String,

    /// Output file path.
    #[arg(long, value_name = "PATH", default_value = "repomix-output.txt")]
    pub output: String,

    /// Output format.
    #[arg(long, value_enum, default_value = "plain")]
    pub format: CliFormat,

    /// Comma-separated include globs.
    #[arg(long, value_name = "CSV")]
    pub include: Option<String>,

    /// Comma-separated exclude globs.
    #[arg(long, value_name = "CSV")]
    pub exclude: Option<String>,

    /// Worker thread count. Defaults to the logical CPU count.
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Emit one log line per orchestrator phase transition.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    /// Record elapsed milliseconds per phase in the run summary.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub timing: bool,

    /// Count tokens under `--token-encoding` and report the total.
    #[arg(long = "count-tokens", action = clap::ArgAction::SetTrue)]
    pub count_tokens: bool,

    /// Named byte-pair tokenizer encoding.
    #[arg(long = "token-encoding", value_name = "NAME", default_value = "cl100k_base")]
    pub token_encoding: String,

    /// Report only the token count; omit file content from the artifact.
    #[arg(long = "tokens-only", action = clap::ArgAction::SetTrue)]
    pub tokens_only: bool,

    /// File selection policy.
    #[arg(long, value_enum, default_value = "all")]
    pub selection: CliSelection,

    /// Minimum score (0.0-1.0) for a file to be included under `--selection scoring`.
    #[arg(long = "inclusion-threshold", value_name = "FLOAT")]
    pub inclusion_threshold: Option<f64>,

    /// Weight of the "is repo root" structure component.
    #[arg(long = "weight-structure-root", value_name = "FLOAT")]
    pub weight_structure_root: Option<f64>,

    /// Weight of the "is a top-level directory" structure component.
    #[arg(long = "weight-structure-top-dir", value_name = "FLOAT")]
    pub weight_structure_top_dir: Option<f64>,

    /// Weight of the "looks like an entry point" structure component.
    #[arg(long = "weight-structure-entry-point", value_name = "FLOAT")]
    pub weight_structure_entry_point: Option<f64>,

    /// Weight of the dependency-graph in-degree structure component.
    #[arg(long = "weight-structure-graph", value_name = "FLOAT")]
    pub weight_structure_graph: Option<f64>,

    /// Weight of the source/config/docs/test type component.
    #[arg(long = "weight-type", value_name = "FLOAT")]
    pub weight_type: Option<f64>,

    /// Weight of the recency component.
    #[arg(long = "weight-recency", value_name = "FLOAT")]
    pub weight_recency: Option<f64>,

    /// Weight of the inverse-size component.
    #[arg(long = "weight-size-inv", value_name = "FLOAT")]
    pub weight_size_inv: Option<f64>,

    /// Weight of the line-density component.
    #[arg(long = "weight-density", value_name = "FLOAT")]
    pub weight_density: Option<f64>,

    /// Number of days within which a file counts as "recent".
    #[arg(long = "recent-window-days", value_name = "DAYS")]
    pub recent_window_days: Option<u32>,

    /// Byte size at or above which a file is considered large for scoring
    /// (e.g. "100k", "1M").
    #[arg(long = "large-file-threshold", value_name = "SIZE")]
    pub large_file_threshold: Option<String>,

    /// Soft cap on the rendered artifact's size (e.g. "10M"); the renderer
    /// stops appending file blocks once exceeded.
    #[arg(long = "output-size-ceiling", value_name = "SIZE")]
    pub output_size_ceiling: Option<String>,

    /// Wall-clock budget for the whole run, in seconds.
    #[arg(long = "run-deadline-secs", value_name = "SECS")]
    pub run_deadline_secs: Option<u64>,

    /// Enable the summarizer: replace large files' content with a compact summary.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub summarize: bool,

    /// Emit the first N lines verbatim in each summary.
    #[arg(long = "summary-first-n-lines", value_name = "N")]
    pub summary_first_n_lines: Option<usize>,

    /// Include one signature line per detected top-level declaration.
    #[arg(long = "summary-signatures", action = clap::ArgAction::SetTrue)]
    pub summary_signatures: bool,

    /// Include docstrings / leading comment blocks in the summary.
    #[arg(long = "summary-docstrings", action = clap::ArgAction::SetTrue)]
    pub summary_docstrings: bool,

    /// Include this many representative snippet windows in the summary.
    #[arg(long = "summary-snippets", value_name = "N")]
    pub summary_snippets: Option<usize>,

    /// Cap on the number of lines a summary may contain.
    #[arg(long = "summary-max-lines", value_name = "N")]
    pub summary_max_lines: Option<usize>,

    /// Enable named-entity extraction as part of summarization.
    #[arg(long = "ner", action = clap::ArgAction::SetTrue)]
    pub ner_enabled: bool,

    /// Named-entity extraction backend.
    #[arg(long = "ner-method", value_enum, default_value = "regex")]
    pub ner_method: CliNerMethod,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    Plain,
    Markdown,
    Xml,
    ClaudeXml,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliSelection {
    All,
    Scoring,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliNerMethod {
    Regex,
    SyntaxTree,
    Ml,
    Hybrid,
}
