// tests/e2e_summarization.rs
//
// `--summarize` replaces a large file's content with a compact summary
// instead of dropping it, while small files remain untouched.

mod common;

use common::repomix_cmd;
use std::fs;
use tempfile::tempdir;

#[test]
fn summarize_truncates_large_files_but_leaves_small_ones_whole() {
    let dir = tempdir().unwrap();

    let mut big = String::new();
    for i in 0..500 {
        big.push_str(&format!("fn f_{i}() {{ let _ = {i}; }}\n"));
    }
    fs::write(dir.path().join("big.rs"), &big).unwrap();
    fs::write(dir.path().join("small.rs"), "fn tiny() {}\n").unwrap();

    let output = dir.path().join("out.txt");
    repomix_cmd()
        .arg("--input")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .arg("--summarize")
        .arg("--summary-first-n-lines")
        .arg("5")
        .arg("--summary-max-lines")
        .arg("20")
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("small.rs"));
    assert!(content.contains("fn tiny() {}"));
    assert!(content.contains("big.rs"));
    assert!(!content.contains("f_499"));
}
