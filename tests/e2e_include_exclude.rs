// tests/e2e_include_exclude.rs
//
// Include/exclude glob filtering: files matching `--exclude` never reach the
// artifact even when they'd also match `--include`.

mod common;

use common::repomix_cmd;
use std::fs;
use tempfile::tempdir;

#[test]
fn exclude_overrides_include_for_the_same_file() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}\n").unwrap();
    fs::write(dir.path().join("src/generated.rs"), "// do not edit\n").unwrap();

    let output = dir.path().join("out.txt");
    repomix_cmd()
        .arg("--input")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .arg("--include")
        .arg("**/*.rs")
        .arg("--exclude")
        .arg("**/generated.rs")
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("main.rs"));
    assert!(!content.contains("generated.rs"));
}
