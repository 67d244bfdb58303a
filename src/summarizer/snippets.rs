//! Selects evenly-spaced representative snippet windows from a file's
//! content, preferring windows with a higher non-comment line ratio.

fn non_comment_ratio(lines: &[&str]) -> f64 {
    if lines.is_empty() {
        return 0.0;
    }
    let non_comment = lines
        .iter()
        .filter(|l| {
            let t = l.trim_start();
            !(t.starts_with("//") || t.starts_with('#') || t.starts_with("/*") || t.is_empty())
        })
        .count();
    non_comment as f64 / lines.len() as f64
}

/// Returns up to `count` windows of `window_len` lines each, evenly spaced
/// across `content`, each joined back into a single string. Windows are
/// selected by length and uniqueness, preferring higher non-comment ratio
/// among candidates at similar positions.
pub fn representative_windows(content: &str, count: usize, window_len: usize) -> Vec<String> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.is_empty() || count == 0 || window_len == 0 {
        return Vec::new();
    }
    if lines.len() <= window_len {
        return vec![lines.join("\n")];
    }

    let max_start = lines.len() - window_len;
    let mut starts: Vec<usize> = Vec::new();
    if count == 1 {
        starts.push(max_start / 2);
    } else {
        for i in 0..count {
            let start = (i * max_start) / (count - 1).max(1);
            starts.push(start.min(max_start));
        }
    }
    starts.dedup();

    let mut seen = std::collections::HashSet::new();
    let mut windows = Vec::new();
    for start in starts {
        let window = &lines[start..(start + window_len).min(lines.len())];
        let joined = window.join("\n");
        if seen.insert(joined.clone()) {
            windows.push((joined, non_comment_ratio(window)));
        }
    }

    windows.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    windows.into_iter().take(count).map(|(text, _)| text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_returns_single_window() {
        let content = "a\nb\nc\n";
        let windows = representative_windows(content, 3, 10);
        assert_eq!(windows.len(), 1);
    }

    #[test]
    fn returns_requested_window_count_for_long_content() {
        let content = (0..200).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let windows = representative_windows(&content, 3, 10);
        assert_eq!(windows.len(), 3);
        for w in &windows {
            assert_eq!(w.lines().count(), 10);
        }
    }

    #[test]
    fn zero_count_returns_no_windows() {
        let content = "a\nb\nc\n";
        assert!(representative_windows(content, 0, 2).is_empty());
    }
}
