//! Produces a compact textual summary of a file's content in place of
//! verbatim text, per `SummarizationOptions`.

mod docstrings;
mod signatures;
mod snippets;

use crate::config::SummarizationOptions;
use crate::constants::{truncation_marker, README_BASENAME_PREFIX};
use crate::core_types::ProcessedFile;
use crate::ner;

/// `true` when `path`'s basename starts with `readme`, case-insensitively.
pub fn is_readme(path: &str) -> bool {
    let basename = path.rsplit('/').next().unwrap_or(path);
    basename.to_lowercase().starts_with(README_BASENAME_PREFIX)
}

/// Decides whether `file` should be summarized given `options`: summaries
/// are never applied to files below `file_size_threshold_bytes`, and
/// `readme_passthrough` can additionally exempt README files.
pub fn should_summarize(file: &ProcessedFile, options: &SummarizationOptions) -> bool {
    if !options.enabled {
        return false;
    }
    if file.byte_size < options.file_size_threshold_bytes {
        return false;
    }
    if is_readme(&file.path) && options.readme_passthrough {
        return false;
    }
    true
}

/// Replaces `file.content` with a composed summary, setting
/// `is_summarized = true`. No-op (returns the file unchanged) when
/// `should_summarize` is false.
pub fn summarize(mut file: ProcessedFile, options: &SummarizationOptions, ner_cache: &ner::EntityCache) -> ProcessedFile {
    if !should_summarize(&file, options) {
        return file;
    }

    let mut sections: Vec<String> = Vec::new();

    if let Some(n) = options.first_n_lines {
        let head: Vec<&str> = file.content.lines().take(n).collect();
        if !head.is_empty() {
            sections.push(head.join("\n"));
        }
    }

    if options.docstrings {
        let docs = docstrings::extract(&file.content, &file.path);
        if !docs.is_empty() {
            sections.push(docs.join("\n\n"));
        }
    }

    if options.signatures {
        let sigs = signatures::extract(&file.content, &file.path);
        if !sigs.is_empty() {
            sections.push(sigs.join("\n"));
        }
    }

    if let Some(count) = options.snippets_count {
        let windows = snippets::representative_windows(&file.content, count, 10);
        if !windows.is_empty() {
            sections.push(windows.join("\n\n"));
        }
    }

    if options.ner.enabled {
        let entities = ner::extract(&file.content, &file.path, &options.ner, ner_cache);
        if !entities.is_empty() {
            sections.push(render_entities(&entities, options.ner.group_by_kind));
        }
    }

    let assembled = sections.join("\n\n");
    let (truncated, was_truncated) = truncate_to_lines(&assembled, options.max_summary_lines);
    let final_content = if was_truncated {
        let omitted = assembled.lines().count().saturating_sub(options.max_summary_lines);
        format!("{truncated}\n{}", truncation_marker(omitted))
    } else {
        truncated
    };

    file.line_count = ProcessedFile::count_lines(&final_content);
    file.content = final_content;
    file.is_summarized = true;
    file
}

fn truncate_to_lines(text: &str, max_lines: usize) -> (String, bool) {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() <= max_lines {
        (text.to_string(), false)
    } else {
        (lines[..max_lines].join("\n"), true)
    }
}

fn render_entities(entities: &[crate::core_types::NamedEntity], group_by_kind: bool) -> String {
    if group_by_kind {
        let mut by_kind: std::collections::BTreeMap<&'static str, Vec<&str>> = std::collections::BTreeMap::new();
        for e in entities {
            by_kind.entry(e.kind.label()).or_default().push(&e.name);
        }
        by_kind
            .into_iter()
            .map(|(kind, names)| format!("{kind}: {}", names.join(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        entities.iter().map(|e| format!("{} ({})", e.name, e.kind.label())).collect::<Vec<_>>().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SummarizationOptions;

    fn file(path: &str, content: &str, byte_size: u64) -> ProcessedFile {
        ProcessedFile {
            path: path.to_string(),
            content: content.to_string(),
            line_count: ProcessedFile::count_lines(content),
            byte_size,
            is_summarized: false,
        }
    }

    #[test]
    fn readme_detection_is_case_insensitive() {
        assert!(is_readme("README.md"));
        assert!(is_readme("docs/Readme.txt"));
        assert!(!is_readme("docs/other.md"));
    }

    #[test]
    fn never_summarizes_below_size_threshold() {
        let options = SummarizationOptions { enabled: true, file_size_threshold_bytes: 1000, ..Default::default() };
        let f = file("a.rs", "fn main() {}\n", 10);
        assert!(!should_summarize(&f, &options));
    }

    #[test]
    fn readme_passthrough_exempts_readmes() {
        let options = SummarizationOptions {
            enabled: true,
            file_size_threshold_bytes: 0,
            readme_passthrough: true,
            ..Default::default()
        };
        let f = file("README.md", "hello", 5);
        assert!(!should_summarize(&f, &options));
    }

    #[test]
    fn summary_respects_max_summary_lines() {
        let options = SummarizationOptions {
            enabled: true,
            file_size_threshold_bytes: 0,
            first_n_lines: Some(100),
            max_summary_lines: 3,
            ..Default::default()
        };
        let content = (0..50).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let f = file("big.rs", &content, content.len() as u64);
        let cache = ner::EntityCache::new(16);
        let summarized = summarize(f, &options, &cache);
        assert!(summarized.is_summarized);
        assert!(summarized.content.lines().count() <= options.max_summary_lines + 1);
        assert!(summarized.content.contains("more lines omitted"));
    }
}
