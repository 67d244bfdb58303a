// tests/e2e_selection_scoring.rs
//
// `--selection scoring`: a low-value file (deeply nested, old-looking, no
// recognizable type) should be dropped while the repo root's README and an
// entry point survive.

mod common;

use common::repomix_cmd;
use std::fs;
use tempfile::tempdir;

#[test]
fn scoring_selection_drops_low_value_files() {
    let dir = tempdir().unwrap();
    let readme = "# Project\n\nOverview text.\n";
    let main_rs = "fn main() {}\n";
    let notes = "x";
    fs::write(dir.path().join("README.md"), readme).unwrap();
    fs::write(dir.path().join("main.rs"), main_rs).unwrap();
    fs::create_dir_all(dir.path().join("a/b/c/d/e")).unwrap();
    fs::write(dir.path().join("a/b/c/d/e/notes.txt"), notes).unwrap();

    let output = dir.path().join("out.txt");
    repomix_cmd()
        .arg("--input")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .arg("--selection")
        .arg("scoring")
        .arg("--inclusion-threshold")
        .arg("0.4")
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("README.md"));
    assert!(content.contains("main.rs"));
    assert!(!content.contains("notes.txt"));

    // byte_count in the trailing summary must range over the emitted set
    // (README.md + main.rs), not the full unfiltered set including notes.txt.
    let emitted_bytes = readme.len() + main_rs.len();
    let all_bytes = emitted_bytes + notes.len();
    assert!(content.contains(&format!("bytes: {emitted_bytes}")));
    assert!(!content.contains(&format!("bytes: {all_bytes}")));
}
