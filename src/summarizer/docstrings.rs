//! Extracts doc-comment / leading-comment blocks that immediately precede
//! a declaration, language-aware by file extension.

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_COMMENT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:\s*(?://|#)[^\n]*\n)+").unwrap());
static TRIPLE_QUOTE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)"""(.*?)"""|'''(.*?)'''"#).unwrap());
static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*\*?(.*?)\*/").unwrap());

fn uses_triple_quote_docstrings(path: &str) -> bool {
    path.ends_with(".py")
}

/// Returns each contiguous comment block found in `content`, trimmed of
/// comment markers and surrounding whitespace, in order of appearance.
pub fn extract(content: &str, path: &str) -> Vec<String> {
    let mut blocks = Vec::new();

    if uses_triple_quote_docstrings(path) {
        for cap in TRIPLE_QUOTE_BLOCK.captures_iter(content) {
            let text = cap.get(1).or_else(|| cap.get(2)).map(|m| m.as_str().trim().to_string());
            if let Some(text) = text {
                if !text.is_empty() {
                    blocks.push(text);
                }
            }
        }
    }

    for m in LINE_COMMENT_BLOCK.find_iter(content) {
        let cleaned: Vec<&str> = m
            .as_str()
            .lines()
            .map(|l| l.trim_start().trim_start_matches("//").trim_start_matches('#').trim())
            .collect();
        let joined = cleaned.join("\n").trim().to_string();
        if !joined.is_empty() {
            blocks.push(joined);
        }
    }

    for cap in BLOCK_COMMENT.captures_iter(content) {
        if let Some(m) = cap.get(1) {
            let text = m.as_str().trim();
            if !text.is_empty() {
                blocks.push(text.to_string());
            }
        }
    }

    blocks
}
