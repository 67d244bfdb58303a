// tests/library_pipeline.rs
//
// Exercises the library entry point directly: running to completion, and
// aborting a run via a pre-cancelled token still flushes a partial artifact.

use repomix::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn run_to_completion_packs_every_text_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), "fn a() {}\n").unwrap();
    fs::write(dir.path().join("b.rs"), "fn b() {}\n").unwrap();

    let output_path = dir.path().join("out.txt");
    let options = ConfigBuilder::new()
        .input_path(dir.path().to_str().unwrap())
        .output_path(output_path.to_str().unwrap())
        .build()
        .unwrap();

    let summary = run_to_completion(&options).unwrap();
    assert_eq!(summary.file_count, 2);
    assert_eq!(summary.skipped_count, 0);
    assert_eq!(summary.line_count, 2);
    assert_eq!(summary.byte_count, 20);

    let rendered = fs::read_to_string(&output_path).unwrap();
    assert!(rendered.contains("lines: 2"));
    assert!(rendered.contains("bytes: 20"));
}

#[test]
fn a_pre_cancelled_token_flushes_a_partial_artifact_and_returns_an_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), "fn a() {}\n").unwrap();

    let output_path = dir.path().join("out.txt");
    let options = ConfigBuilder::new()
        .input_path(dir.path().to_str().unwrap())
        .output_path(output_path.to_str().unwrap())
        .build()
        .unwrap();

    let token = CancellationToken::new();
    token.cancel();
    let progress = ProgressTracker::new();

    let err = run(&options, &token, &progress).unwrap_err();
    assert!(matches!(err, Error::Cancelled));
    assert!(output_path.exists());
    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("truncated"));
}

#[test]
fn xml_format_round_trips_a_file_with_an_embedded_cdata_terminator() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tricky.txt"), "before]]>after\n").unwrap();

    let options = ConfigBuilder::new()
        .input_path(dir.path().to_str().unwrap())
        .output_path(dir.path().join("out.xml").to_str().unwrap())
        .format(OutputFormat::Xml)
        .build()
        .unwrap();

    let summary = run_to_completion(&options).unwrap();
    assert_eq!(summary.file_count, 1);

    let content = fs::read_to_string(dir.path().join("out.xml")).unwrap();
    assert!(content.contains("<![CDATA["));
    assert!(!content.contains("]]>after"));
}
