//! Markdown format: a `### ` heading per file, content in a fenced code
//! block with language inferred from extension.

use super::OutputFormatter;
use crate::core_types::{ProcessedFile, RunSummary};

pub struct MarkdownFormatter;

impl OutputFormatter for MarkdownFormatter {
    fn preamble(&self) -> String {
        "# repomix output\n\nformat: markdown".to_string()
    }

    fn file_block(&self, file: &ProcessedFile, _index: usize) -> String {
        let lang = language_hint(&file.path);
        let fence = fence_for(&file.content);
        format!("### {}\n\n{fence}{lang}\n{}\n{fence}\n", file.path, file.content)
    }

    fn summary_block(&self, summary: &RunSummary) -> String {
        format!("## Summary\n\n```\n{}\n```\n", super::plain_summary(summary))
    }
}

fn language_hint(path: &str) -> &'static str {
    match path.rsplit('.').next().unwrap_or("") {
        "rs" => "rust",
        "py" => "python",
        "js" => "javascript",
        "ts" => "typescript",
        "go" => "go",
        "c" | "h" => "c",
        "cpp" | "hpp" | "cc" => "cpp",
        "md" => "markdown",
        "json" => "json",
        "toml" => "toml",
        "yaml" | "yml" => "yaml",
        _ => "",
    }
}

/// Chooses a backtick fence longer than the longest backtick run already
/// present in `content`, so embedded code fences never terminate early.
fn fence_for(content: &str) -> String {
    let longest_run = content
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat((longest_run + 1).max(3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_rust_language_from_extension() {
        assert_eq!(language_hint("src/main.rs"), "rust");
    }

    #[test]
    fn fence_grows_past_embedded_backtick_runs() {
        let content = "some ```` backticks";
        let fence = fence_for(content);
        assert!(fence.len() > 4);
    }

    #[test]
    fn file_block_wraps_content_in_a_fence() {
        let fmt = MarkdownFormatter;
        let file = ProcessedFile {
            path: "a.py".into(),
            content: "x = 1\n".into(),
            line_count: 1,
            byte_size: 6,
            is_summarized: false,
        };
        let block = fmt.file_block(&file, 0);
        assert!(block.contains("### a.py"));
        assert!(block.contains("python"));
    }
}
