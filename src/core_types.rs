//! Defines the core data structures that flow through the pipeline:
//! the unit of ingestion (`ProcessedFile`), entity/score side-tables, and
//! the aggregate counters produced at the end of a run.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// The unit of ingestion produced by the `FileReader` / `Summarizer` stages.
#[derive(Debug, Clone)]
pub struct ProcessedFile {
    /// Path relative to the repository root, forward-slash form.
    pub path: String,
    /// UTF-8 content (lossy-replaced if the source had invalid sequences),
    /// or a summary when `is_summarized` is set.
    pub content: String,
    /// Number of newline-terminated segments, plus one for a trailing
    /// partial line. Empty content is `0`.
    pub line_count: usize,
    /// Original size on disk, in bytes.
    pub byte_size: u64,
    /// `true` when `content` is a summary rather than verbatim text.
    pub is_summarized: bool,
}

impl ProcessedFile {
    /// Computes `line_count` per the documented rule: count of `'\n'`,
    /// plus one if the string is non-empty and does not end in `'\n'`.
    pub fn count_lines(s: &str) -> usize {
        if s.is_empty() {
            return 0;
        }
        let newlines = s.bytes().filter(|&b| b == b'\n').count();
        if s.ends_with('\n') {
            newlines
        } else {
            newlines + 1
        }
    }
}

/// The semantic category of a [`NamedEntity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Class,
    Function,
    Variable,
    Enum,
    Import,
    Other,
}

impl EntityKind {
    /// Stable lowercase name, used when rendering grouped entity sections.
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Class => "class",
            EntityKind::Function => "function",
            EntityKind::Variable => "variable",
            EntityKind::Enum => "enum",
            EntityKind::Import => "import",
            EntityKind::Other => "other",
        }
    }
}

/// An identifier extracted from source code, tagged with its semantic kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamedEntity {
    pub name: String,
    pub kind: EntityKind,
}

impl NamedEntity {
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self { name: name.into(), kind }
    }
}

/// The method used to produce a file's [`NamedEntity`] list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NerMethod {
    Regex,
    SyntaxTree,
    Ml,
    Hybrid,
}

impl std::fmt::Display for NerMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NerMethod::Regex => "regex",
            NerMethod::SyntaxTree => "syntax_tree",
            NerMethod::Ml => "ml",
            NerMethod::Hybrid => "hybrid",
        };
        f.write_str(s)
    }
}

/// The scored result for one candidate file, produced by the `FileScorer`.
#[derive(Debug, Clone)]
pub struct ScoredFile {
    pub path: String,
    /// Overall weighted score, clamped to `[0, 1]`.
    pub score: f64,
    /// Per-component scores, each in `[0, 1]`.
    pub components: BTreeMap<String, f64>,
    /// `true` when `score >= inclusion_threshold`.
    pub included: bool,
}

/// Output destination / markup used by the `Renderer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Markdown,
    Xml,
    ClaudeXml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Xml => "xml",
            OutputFormat::ClaudeXml => "claude_xml",
        };
        f.write_str(s)
    }
}

/// Policy for choosing which enumerated files reach the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStrategy {
    /// Keep every file not filtered by pattern.
    All,
    /// Additionally require `score >= inclusion_threshold`.
    Scoring,
}

/// A JSON-serializable scoring report: summary counters plus the per-file
/// detail, sorted by score descending.
#[derive(Debug, Clone)]
pub struct ScoringReport {
    pub total: usize,
    pub included: usize,
    pub inclusion_pct: f64,
    pub files: Vec<ScoredFile>,
}

impl ScoringReport {
    pub fn from_scored(files: Vec<ScoredFile>) -> Self {
        let total = files.len();
        let included = files.iter().filter(|f| f.included).count();
        let inclusion_pct = if total == 0 {
            0.0
        } else {
            included as f64 / total as f64 * 100.0
        };
        let mut files = files;
        files.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        Self { total, included, inclusion_pct, files }
    }
}

/// Aggregate counters produced at the end of a run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub file_count: usize,
    pub line_count: usize,
    pub byte_count: u64,
    pub skipped_count: usize,
    pub errored_count: usize,
    pub token_count: Option<usize>,
    pub content_truncated: bool,
    pub cancelled: bool,
    pub processed: usize,
    pub total: usize,
    /// Populated only when `show_timing` is set: elapsed time per phase.
    pub phase_timings: Vec<(&'static str, Duration)>,
    pub scoring_report: Option<ScoringReport>,
}

/// A point-in-time snapshot of run progress, safe to read concurrently
/// with writers. Mirrors the `GET progress/{jobId}` response shape.
#[derive(Debug, Clone, Default)]
pub struct ProgressSnapshot {
    pub total: usize,
    pub processed: usize,
    pub skipped: usize,
    pub errored: usize,
    pub current_path: Option<PathBuf>,
    pub is_complete: bool,
    pub elapsed_ms: u64,
}

impl ProgressSnapshot {
    /// Percentage of `total` that has been `processed`, `0.0` when `total`
    /// is zero.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.processed as f64 / self.total as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_lines_matches_documented_rule() {
        assert_eq!(ProcessedFile::count_lines(""), 0);
        assert_eq!(ProcessedFile::count_lines("a\n"), 1);
        assert_eq!(ProcessedFile::count_lines("a\nb"), 2);
        assert_eq!(ProcessedFile::count_lines("a\nb\n"), 2);
        assert_eq!(ProcessedFile::count_lines("no newline"), 1);
    }

    #[test]
    fn progress_snapshot_percentage_handles_zero_total() {
        let snap = ProgressSnapshot::default();
        assert_eq!(snap.percentage(), 0.0);

        let snap = ProgressSnapshot { total: 4, processed: 1, ..Default::default() };
        assert_eq!(snap.percentage(), 25.0);
    }

    #[test]
    fn scoring_report_sorts_descending_and_computes_inclusion_pct() {
        let files = vec![
            ScoredFile { path: "a".into(), score: 0.2, components: BTreeMap::new(), included: false },
            ScoredFile { path: "b".into(), score: 0.9, components: BTreeMap::new(), included: true },
        ];
        let report = ScoringReport::from_scored(files);
        assert_eq!(report.files[0].path, "b");
        assert_eq!(report.included, 1);
        assert_eq!(report.inclusion_pct, 50.0);
    }
}
