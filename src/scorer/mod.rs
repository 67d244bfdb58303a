//! Computes a per-file weighted relevance score across structure, type,
//! recency, size, and density components, plus an optional dependency-graph
//! connectivity boost.

mod graph;

use crate::config::ScoringConfig;
use crate::constants::ENTRY_POINT_PATTERNS;
use crate::core_types::{ScoredFile, ScoringReport};
use crate::pattern::glob::glob_to_regex;
use graph::DependencyGraph;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::SystemTime;

/// One candidate handed to the scorer: its relative path, content (used for
/// density and the dependency graph), size, and last-modified time.
pub struct ScoringInput<'a> {
    pub path: &'a str,
    pub content: &'a str,
    pub byte_size: u64,
    pub modified: SystemTime,
}

/// Scores every input against `config`, building one dependency graph shared
/// across all of them, and returns a report sorted by score descending.
pub fn score_all(inputs: &[ScoringInput<'_>], config: &ScoringConfig, now: SystemTime) -> ScoringReport {
    let files: Vec<(String, String)> =
        inputs.iter().map(|i| (i.path.to_string(), i.content.to_string())).collect();
    let graph = DependencyGraph::build(&files);

    let scored = inputs.iter().map(|input| score_file(input, config, &graph, now)).collect();
    ScoringReport::from_scored(scored)
}

fn score_file(input: &ScoringInput<'_>, config: &ScoringConfig, graph: &DependencyGraph, now: SystemTime) -> ScoredFile {
    let mut components: BTreeMap<String, f64> = BTreeMap::new();
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;

    let mut push = |key: &str, value: f64, weight: f64| {
        if weight > 0.0 {
            weighted_sum += value * weight;
            weight_total += weight;
        }
        components.insert(key.to_string(), value);
    };

    push("structure.root", structure_root(input.path, &config.important_files), config.weight_structure_root);
    push("structure.top_dir", structure_top_dir(input.path, &config.important_dirs), config.weight_structure_top_dir);
    push("structure.entry_point", structure_entry_point(input.path), config.weight_structure_entry_point);
    push("structure.graph", graph.graph_score(input.path), config.weight_structure_graph);

    let (type_key, type_value) = type_component(input.path, config);
    push(type_key, type_value, config.weight_type);

    push("recency", recency(input.modified, now, config.recent_window_days), config.weight_recency);
    push("size_inv", size_inv(input.byte_size, config.large_file_threshold_bytes), config.weight_size_inv);
    push("density", density(input.content), config.weight_density);

    let score = if weight_total > 0.0 { (weighted_sum / weight_total).clamp(0.0, 1.0) } else { 0.0 };
    let included = score >= config.inclusion_threshold;

    ScoredFile { path: input.path.to_string(), score, components, included }
}

fn structure_root(path: &str, important_files: &[String]) -> f64 {
    if path.contains('/') {
        return 0.0;
    }
    let basename = Path::new(path).file_name().and_then(|n| n.to_str()).unwrap_or(path);
    if important_files.iter().any(|f| f == basename) {
        1.0
    } else {
        0.0
    }
}

fn structure_top_dir(path: &str, important_dirs: &[String]) -> f64 {
    let segments: Vec<&str> = path.split('/').collect();
    let Some(first) = segments.first() else { return 0.0 };
    if important_dirs.iter().any(|d| d == first) {
        return 1.0;
    }
    if segments.iter().any(|seg| important_dirs.iter().any(|d| d == seg)) {
        0.5
    } else {
        0.0
    }
}

static ENTRY_POINT_REGEXES: Lazy<Vec<Regex>> =
    Lazy::new(|| ENTRY_POINT_PATTERNS.iter().map(|p| Regex::new(&format!("^{}$", glob_to_regex(p))).unwrap()).collect());

fn structure_entry_point(path: &str) -> f64 {
    let basename = Path::new(path).file_name().and_then(|n| n.to_str()).unwrap_or(path);
    if ENTRY_POINT_REGEXES.iter().any(|re| re.is_match(basename)) {
        1.0
    } else {
        0.0
    }
}

fn extension_of(path: &str) -> Option<&str> {
    Path::new(path).extension().and_then(|e| e.to_str())
}

/// Returns the first matching `type.*` component key, in the order
/// `source, config, docs, test`; `("type.none", 0.0)` if nothing matches.
fn type_component<'a>(path: &str, config: &'a ScoringConfig) -> (&'static str, f64) {
    if let Some(ext) = extension_of(path) {
        if config.source_extensions.iter().any(|e| e == ext) {
            return ("type.source", 1.0);
        }
        if config.config_extensions.iter().any(|e| e == ext) {
            return ("type.config", 1.0);
        }
        if config.docs_extensions.iter().any(|e| e == ext) {
            return ("type.docs", 1.0);
        }
    }
    if config.test_patterns.iter().any(|pat| path.contains(pat.as_str())) {
        return ("type.test", 1.0);
    }
    ("type.none", 0.0)
}

fn recency(modified: SystemTime, now: SystemTime, recent_window_days: u32) -> f64 {
    let age_days = now
        .duration_since(modified)
        .map(|d| d.as_secs_f64() / 86_400.0)
        .unwrap_or(0.0);
    if recent_window_days == 0 {
        return 0.0;
    }
    (1.0 - age_days / recent_window_days as f64).max(0.0)
}

fn size_inv(byte_size: u64, large_file_threshold_bytes: u64) -> f64 {
    if byte_size <= large_file_threshold_bytes {
        1.0
    } else {
        (large_file_threshold_bytes as f64 / byte_size as f64).clamp(0.0, 1.0)
    }
}

fn is_comment_or_blank(line: &str) -> bool {
    let t = line.trim();
    t.is_empty() || t.starts_with("//") || t.starts_with('#') || t.starts_with("/*") || t.starts_with('*')
}

fn density(content: &str) -> f64 {
    let lines: Vec<&str> = content.lines().collect();
    if lines.is_empty() {
        return 0.0;
    }
    let code_lines = lines.iter().filter(|l| !is_comment_or_blank(l)).count();
    code_lines as f64 / lines.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;
    use std::time::Duration;

    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    #[test]
    fn root_readme_scores_full_structure_root() {
        let input = ScoringInput { path: "README.md", content: "hello\n", byte_size: 6, modified: SystemTime::now() };
        let graph = DependencyGraph::build(&[]);
        let scored = score_file(&input, &config(), &graph, SystemTime::now());
        assert_eq!(scored.components["structure.root"], 1.0);
    }

    #[test]
    fn old_file_has_low_recency() {
        let old = SystemTime::now() - Duration::from_secs(90 * 86_400);
        let value = recency(old, SystemTime::now(), 30);
        assert_eq!(value, 0.0);
    }

    #[test]
    fn score_is_clamped_to_unit_interval() {
        let input = ScoringInput {
            path: "src/core.py",
            content: "def f():\n    return 1\n",
            byte_size: 20,
            modified: SystemTime::now(),
        };
        let graph = DependencyGraph::build(&[]);
        let scored = score_file(&input, &config(), &graph, SystemTime::now());
        assert!((0.0..=1.0).contains(&scored.score));
    }

    #[test]
    fn exactly_one_type_component_is_recorded() {
        let (key, value) = type_component("src/main.rs", &config());
        assert_eq!(key, "type.source");
        assert_eq!(value, 1.0);
    }

    #[test]
    fn test_file_path_matches_test_type() {
        let (key, _) = type_component("tests/it.rs", &config());
        assert_eq!(key, "type.test");
    }

    #[test]
    fn score_all_sorts_descending_and_builds_report() {
        let inputs = vec![
            ScoringInput { path: "old.log", content: "x\n", byte_size: 2, modified: SystemTime::now() - Duration::from_secs(90 * 86_400) },
            ScoringInput { path: "README.md", content: "hello\n", byte_size: 6, modified: SystemTime::now() },
        ];
        let report = score_all(&inputs, &config(), SystemTime::now());
        assert_eq!(report.total, 2);
        assert_eq!(report.files[0].path, "README.md");
    }
}
