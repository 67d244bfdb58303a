//! Claude-XML format: `<document index="N">` elements, control characters
//! stripped from content rather than CDATA-escaped.

use super::OutputFormatter;
use crate::core_types::{ProcessedFile, RunSummary};

pub struct ClaudeXmlFormatter;

impl OutputFormatter for ClaudeXmlFormatter {
    fn preamble(&self) -> String {
        "<documents>".to_string()
    }

    fn file_block(&self, file: &ProcessedFile, index: usize) -> String {
        format!(
            "<document index=\"{}\"><source>{}</source><document_content>{}</document_content></document>",
            index + 1,
            file.path,
            strip_control_chars(&file.content)
        )
    }

    fn summary_block(&self, summary: &RunSummary) -> String {
        format!(
            "<summary files=\"{}\" lines=\"{}\" bytes=\"{}\"/>\n</documents>",
            summary.file_count, summary.line_count, summary.byte_count
        )
    }
}

/// Strips ASCII control characters other than tab/newline/carriage-return.
fn strip_control_chars(content: &str) -> String {
    content
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_characters_are_stripped() {
        let stripped = strip_control_chars("a\u{0007}b\n");
        assert_eq!(stripped, "ab\n");
    }

    #[test]
    fn document_index_is_one_based() {
        let fmt = ClaudeXmlFormatter;
        let file = ProcessedFile {
            path: "a.rs".into(),
            content: "x\n".into(),
            line_count: 1,
            byte_size: 2,
            is_summarized: false,
        };
        let block = fmt.file_block(&file, 0);
        assert!(block.contains("index=\"1\""));
    }
}
