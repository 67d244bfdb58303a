//! Renders an indented directory tree from a flat list of relative paths.

use std::collections::BTreeMap;

#[derive(Default)]
struct TreeNode {
    children: BTreeMap<String, TreeNode>,
    is_file: bool,
}

/// Builds an indented tree under `root_label` from `paths` (forward-slash,
/// relative to the repository root). Directories are listed before files at
/// each level, both lexicographically. Entries in `ignored_dirs` (relative,
/// no trailing slash) are rendered as a leaf suffixed `[ignored]` rather
/// than expanded, mirroring the directories the `PatternMatcher` rejected.
pub fn render_tree(root_label: &str, paths: &[String], ignored_dirs: &[String]) -> String {
    let mut root = TreeNode::default();
    for path in paths {
        let mut node = &mut root;
        let segments: Vec<&str> = path.split('/').collect();
        for (i, segment) in segments.iter().enumerate() {
            let entry = node.children.entry(segment.to_string()).or_default();
            if i == segments.len() - 1 {
                entry.is_file = true;
            }
            node = entry;
        }
    }
    for dir in ignored_dirs {
        let mut node = &mut root;
        let segments: Vec<&str> = dir.split('/').collect();
        for segment in &segments[..segments.len().saturating_sub(1)] {
            node = node.children.entry(segment.to_string()).or_default();
        }
        if let Some(last) = segments.last() {
            node.children.entry(last.to_string()).or_default();
        }
    }

    let mut out = format!("{root_label}/\n");
    render_children(&root, 1, "", ignored_dirs, &mut out);
    out
}

fn render_children(node: &TreeNode, depth: usize, prefix: &str, ignored_dirs: &[String], out: &mut String) {
    let indent = "  ".repeat(depth);
    let mut dirs: Vec<(&String, &TreeNode)> = Vec::new();
    let mut files: Vec<(&String, &TreeNode)> = Vec::new();
    for (name, child) in &node.children {
        if child.is_file && child.children.is_empty() {
            files.push((name, child));
        } else {
            dirs.push((name, child));
        }
    }

    for (name, child) in dirs {
        let full_path = if prefix.is_empty() { name.clone() } else { format!("{prefix}/{name}") };
        if ignored_dirs.iter().any(|d| d == &full_path) {
            out.push_str(&format!("{indent}{name}/ [ignored]\n"));
            continue;
        }
        out.push_str(&format!("{indent}{name}/\n"));
        render_children(child, depth + 1, &full_path, ignored_dirs, out);
    }
    for (name, _) in files {
        out.push_str(&format!("{indent}{name}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_directories_before_files() {
        let paths = vec!["README.md".to_string(), "src/main.rs".to_string(), "src/lib.rs".to_string()];
        let tree = render_tree("repo", &paths, &[]);
        let src_pos = tree.find("src/").unwrap();
        let readme_pos = tree.find("README.md").unwrap();
        assert!(src_pos < readme_pos);
    }

    #[test]
    fn empty_paths_renders_just_the_root() {
        let tree = render_tree("repo", &[], &[]);
        assert_eq!(tree, "repo/\n");
    }

    #[test]
    fn ignored_directory_is_marked_and_not_expanded() {
        let paths = vec!["src/main.rs".to_string()];
        let tree = render_tree("repo", &paths, &["target".to_string()]);
        assert!(tree.contains("target/ [ignored]"));
    }
}
