// tests/e2e_tokens_only.rs
//
// `--tokens-only` reports a token count without writing file content to the
// output path.

mod common;

use common::repomix_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn tokens_only_skips_writing_the_artifact() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), "fn main() { println!(\"hi\"); }\n").unwrap();

    let output = dir.path().join("out.txt");
    repomix_cmd()
        .arg("--input")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .arg("--count-tokens")
        .arg("--tokens-only")
        .assert()
        .success()
        .stderr(predicate::str::contains("tokens"));

    assert!(!output.exists());
}

#[test]
fn tokens_only_without_count_tokens_is_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), "fn main() {}\n").unwrap();

    repomix_cmd()
        .arg("--input")
        .arg(dir.path())
        .arg("--tokens-only")
        .assert()
        .failure();
}
