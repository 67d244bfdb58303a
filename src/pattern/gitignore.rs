//! Parses `.gitignore`-style files into `(pattern, negate)` pairs.

use std::fs;
use std::io;
use std::path::Path;

/// Reads a `.gitignore`-style file and returns its patterns in file order,
/// paired with whether each is a negation (`!pattern`). Comment lines
/// (`#`) and blank lines are skipped. Missing files yield an empty list
/// rather than an error, since most directories have no `.gitignore`.
pub fn load_gitignore_patterns(path: &Path) -> io::Result<Vec<(String, bool)>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut patterns = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim_end();
        if trimmed.is_empty() || trimmed.trim_start().starts_with('#') {
            continue;
        }
        if let Some(stripped) = trimmed.strip_prefix('!') {
            patterns.push((stripped.to_string(), true));
        } else {
            patterns.push((trimmed.to_string(), false));
        }
    }
    Ok(patterns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_comments_blanks_and_negation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".gitignore");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "# a comment").unwrap();
        writeln!(f).unwrap();
        writeln!(f, "*.log").unwrap();
        writeln!(f, "!important.log").unwrap();
        drop(f);

        let patterns = load_gitignore_patterns(&path).unwrap();
        assert_eq!(patterns, vec![("*.log".to_string(), false), ("important.log".to_string(), true)]);
    }

    #[test]
    fn missing_file_yields_empty_list() {
        let patterns = load_gitignore_patterns(Path::new("/does/not/exist/.gitignore")).unwrap();
        assert!(patterns.is_empty());
    }
}
