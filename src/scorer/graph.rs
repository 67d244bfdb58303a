//! Builds a directed importer→target dependency graph from a batch of
//! files, used only to compute `structure.graph` in-degree scores.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

static IMPORT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r#"#include\s*[<"]([\w./-]+)[>"]"#).unwrap(),
        Regex::new(r#"\bimport\s+([\w./]+)"#).unwrap(),
        Regex::new(r#"\bfrom\s+([\w.]+)\s+import\b"#).unwrap(),
        Regex::new(r#"\brequire\(\s*['"]([\w./-]+)['"]\s*\)"#).unwrap(),
        Regex::new(r#"\buse\s+([\w:]+)"#).unwrap(),
    ]
});

/// In-degree counts keyed by target relative path, plus the p95 value used
/// to normalize `structure.graph` into `[0, 1]`.
pub struct DependencyGraph {
    in_degree: HashMap<String, u32>,
    p95: u32,
}

impl DependencyGraph {
    /// `files` is `(relative_path, content)` for every candidate file.
    pub fn build(files: &[(String, String)]) -> Self {
        let mut basename_index: HashMap<&str, Vec<&str>> = HashMap::new();
        for (path, _) in files {
            if let Some(name) = Path::new(path).file_name().and_then(|n| n.to_str()) {
                basename_index.entry(name).or_default().push(path.as_str());
            }
        }

        let mut in_degree: HashMap<String, u32> = HashMap::new();
        for (path, content) in files {
            for reference in extract_references(content) {
                if let Some(target) = resolve(path, &reference, files, &basename_index) {
                    *in_degree.entry(target).or_insert(0) += 1;
                }
            }
        }

        let p95 = percentile_95(&in_degree);
        Self { in_degree, p95 }
    }

    /// `min(1, in_degree(path) / in_degree_p95)`, `0.0` when nothing points
    /// at anything (an all-zero graph).
    pub fn graph_score(&self, path: &str) -> f64 {
        if self.p95 == 0 {
            return 0.0;
        }
        let degree = *self.in_degree.get(path).unwrap_or(&0);
        (degree as f64 / self.p95 as f64).min(1.0)
    }
}

fn extract_references(content: &str) -> Vec<String> {
    let mut refs = Vec::new();
    for pattern in IMPORT_PATTERNS.iter() {
        for cap in pattern.captures_iter(content) {
            if let Some(m) = cap.get(1) {
                refs.push(m.as_str().to_string());
            }
        }
    }
    refs
}

/// Resolves an import-like reference string to a candidate's relative path,
/// trying (in order) a path relative to the importer, a repo-root-relative
/// path, then any file sharing the reference's basename.
fn resolve(
    importer: &str,
    reference: &str,
    files: &[(String, String)],
    basename_index: &HashMap<&str, Vec<&str>>,
) -> Option<String> {
    let normalized = reference.replace("::", "/").replace('.', "/");
    let importer_dir = Path::new(importer).parent().unwrap_or_else(|| Path::new(""));

    let candidates = [
        importer_dir.join(reference).to_string_lossy().replace('\\', "/"),
        importer_dir.join(&normalized).to_string_lossy().replace('\\', "/"),
        reference.trim_start_matches('/').to_string(),
        normalized.clone(),
    ];
    for candidate in &candidates {
        if files.iter().any(|(p, _)| p == candidate) {
            return Some(candidate.clone());
        }
        for ext in ["", ".rs", ".py", ".js", ".ts", ".c", ".h", ".cpp"] {
            let with_ext = format!("{candidate}{ext}");
            if files.iter().any(|(p, _)| p == &with_ext) {
                return Some(with_ext);
            }
        }
    }

    if let Some(basename) = Path::new(reference).file_name().and_then(|n| n.to_str()) {
        if let Some(matches) = basename_index.get(basename) {
            if let Some(first) = matches.first() {
                return Some(first.to_string());
            }
        }
    }

    None
}

fn percentile_95(in_degree: &HashMap<String, u32>) -> u32 {
    if in_degree.is_empty() {
        return 0;
    }
    let mut values: Vec<u32> = in_degree.values().copied().collect();
    values.sort_unstable();
    let idx = ((values.len() as f64) * 0.95).ceil() as usize;
    let idx = idx.saturating_sub(1).min(values.len() - 1);
    values[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_rust_use_reference_to_module_path() {
        let files = vec![
            ("src/main.rs".to_string(), "use crate::core::helper;\n".to_string()),
            ("src/core.rs".to_string(), "pub fn helper() {}\n".to_string()),
        ];
        let graph = DependencyGraph::build(&files);
        assert!(graph.graph_score("src/core.rs") > 0.0);
    }

    #[test]
    fn empty_graph_scores_zero_everywhere() {
        let files = vec![("a.txt".to_string(), "just text\n".to_string())];
        let graph = DependencyGraph::build(&files);
        assert_eq!(graph.graph_score("a.txt"), 0.0);
    }

    #[test]
    fn in_degree_is_normalized_by_p95_and_clamped_to_one() {
        let files = vec![
            ("importer1.py".to_string(), "import target\n".to_string()),
            ("importer2.py".to_string(), "import target\n".to_string()),
            ("target.py".to_string(), "x = 1\n".to_string()),
        ];
        let graph = DependencyGraph::build(&files);
        assert!(graph.graph_score("target.py") <= 1.0);
    }
}
