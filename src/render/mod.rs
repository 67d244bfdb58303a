//! Renders the final artifact: a preamble, directory tree, one block per
//! file, and a trailing summary, in one of four textual formats.

mod claude_xml;
mod markdown;
mod plain;
mod tree;
mod xml;

pub use tree::render_tree;

use crate::core_types::{OutputFormat, ProcessedFile, RunSummary};

/// Shared contract for the four output formats. Implementations never fail:
/// formatting is a pure function of already-validated data.
pub trait OutputFormatter {
    fn preamble(&self) -> String;
    fn file_block(&self, file: &ProcessedFile, index: usize) -> String;
    fn summary_block(&self, summary: &RunSummary) -> String;
}

/// Plain-text rendering of a [`RunSummary`], shared by the Plain and
/// Markdown formatters.
pub(crate) fn plain_summary(summary: &RunSummary) -> String {
    let mut lines = vec![
        "--- summary ---".to_string(),
        format!("files: {}", summary.file_count),
        format!("lines: {}", summary.line_count),
        format!("bytes: {}", summary.byte_count),
    ];
    if let Some(tokens) = summary.token_count {
        lines.push(format!("tokens: {tokens}"));
    }
    if summary.content_truncated {
        lines.push("content truncated: output size ceiling reached".to_string());
    }
    if summary.cancelled {
        lines.push("cancelled: run ended before completion".to_string());
    }
    if summary.skipped_count > 0 {
        lines.push(format!("skipped (binary): {}", summary.skipped_count));
    }
    if summary.errored_count > 0 {
        lines.push(format!("errors: {}", summary.errored_count));
    }
    for (phase, elapsed) in &summary.phase_timings {
        lines.push(format!("{phase}: {}ms", elapsed.as_millis()));
    }
    lines.join("\n")
}

/// Returns the formatter implementation selected by `format`.
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Plain => Box::new(plain::PlainFormatter),
        OutputFormat::Markdown => Box::new(markdown::MarkdownFormatter),
        OutputFormat::Xml => Box::new(xml::XmlFormatter),
        OutputFormat::ClaudeXml => Box::new(claude_xml::ClaudeXmlFormatter),
    }
}

/// Renders the full artifact for `files` (already in their final emission
/// order) plus the tree and trailing summary, returning the complete string.
/// Callers that enforce an output-size ceiling should use
/// [`crate::orchestrator`]'s incremental writer instead of buffering this
/// whole string for very large runs.
pub fn render_all(
    format: OutputFormat,
    root_label: &str,
    tree_paths: &[String],
    ignored_dirs: &[String],
    files: &[ProcessedFile],
    summary: &RunSummary,
) -> String {
    let fmt = formatter_for(format);
    let mut out = String::new();
    out.push_str(&fmt.preamble());
    out.push('\n');
    out.push_str(&tree::render_tree(root_label, tree_paths, ignored_dirs));
    out.push('\n');
    for (index, file) in files.iter().enumerate() {
        out.push_str(&fmt.file_block(file, index));
        out.push('\n');
    }
    out.push_str(&fmt.summary_block(summary));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, content: &str) -> ProcessedFile {
        ProcessedFile {
            path: path.to_string(),
            content: content.to_string(),
            line_count: ProcessedFile::count_lines(content),
            byte_size: content.len() as u64,
            is_summarized: false,
        }
    }

    #[test]
    fn render_all_includes_every_files_path() {
        let files = vec![file("a.rs", "fn main() {}\n"), file("b.rs", "fn helper() {}\n")];
        let summary = RunSummary::default();
        let out = render_all(OutputFormat::Plain, "repo", &["a.rs".into(), "b.rs".into()], &[], &files, &summary);
        assert!(out.contains("a.rs"));
        assert!(out.contains("b.rs"));
    }
}
