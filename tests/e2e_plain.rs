// tests/e2e_plain.rs
//
// Plain format, no scoring: every text file is included verbatim and binary
// files are skipped rather than erroring the run.

mod common;

use common::repomix_cmd;
use std::fs;
use tempfile::tempdir;

#[test]
fn packs_text_files_and_skips_binaries() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), "fn main() {}\n").unwrap();
    fs::write(dir.path().join("b.bin"), [0u8, 159, 146, 150]).unwrap();

    let output = dir.path().join("out.txt");
    repomix_cmd()
        .arg("--input")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("fn main() {}"));
    assert!(content.contains("a.rs"));
    assert!(!content.contains("b.bin"));

    // "fn main() {}\n" is one line and 13 bytes; the binary file contributes
    // neither, so the trailing summary must reflect the single text file.
    assert!(content.contains("lines: 1"));
    assert!(content.contains("bytes: 13"));
}
