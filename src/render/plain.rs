//! Plain-text format: a banner header per file, no escaping.

use super::OutputFormatter;
use crate::core_types::{ProcessedFile, RunSummary};

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn preamble(&self) -> String {
        "repomix output (format: plain)".to_string()
    }

    fn file_block(&self, file: &ProcessedFile, _index: usize) -> String {
        format!("================ FILE: {} ================\n\n{}\n", file.path, file.content)
    }

    fn summary_block(&self, summary: &RunSummary) -> String {
        super::plain_summary(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_block_uses_banner_header() {
        let fmt = PlainFormatter;
        let file = ProcessedFile {
            path: "a.txt".into(),
            content: "hi\n".into(),
            line_count: 1,
            byte_size: 3,
            is_summarized: false,
        };
        let block = fmt.file_block(&file, 0);
        assert!(block.starts_with("================ FILE: a.txt ================"));
        assert!(block.contains("hi\n"));
    }
}
