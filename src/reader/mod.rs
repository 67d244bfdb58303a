//! Reads one file's content: buffered below the mmap threshold, memory-
//! mapped above it, with binary detection and UTF-8 lossy decoding.

use crate::constants::{BINARY_NON_PRINTABLE_RATIO, BINARY_SNIFF_BYTES, MMAP_THRESHOLD_BYTES};
use crate::core_types::ProcessedFile;
use crate::errors::{io_error_with_path, Error};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Outcome of reading one file: either a ready-to-use `ProcessedFile`, or a
/// binary-skip marker (still counted in enumeration stats).
pub enum ReadOutcome {
    Text(ProcessedFile),
    Binary { path: String, byte_size: u64 },
}

/// Reads `absolute_path` and classifies it, choosing a buffered read below
/// `MMAP_THRESHOLD_BYTES` and a memory-mapped read above it. The mapped
/// content is copied into an owned `String` before the map is dropped.
pub fn read_file(
    absolute_path: &Path,
    relative_path: &str,
    byte_size: u64,
) -> Result<ReadOutcome, Error> {
    let bytes = if byte_size >= MMAP_THRESHOLD_BYTES {
        read_via_mmap(absolute_path)?
    } else {
        read_buffered(absolute_path)?
    };

    if is_binary(&bytes) {
        return Ok(ReadOutcome::Binary { path: relative_path.to_string(), byte_size });
    }

    let content = String::from_utf8_lossy(&bytes).into_owned();
    let line_count = ProcessedFile::count_lines(&content);
    Ok(ReadOutcome::Text(ProcessedFile {
        path: relative_path.to_string(),
        content,
        line_count,
        byte_size,
        is_summarized: false,
    }))
}

fn read_buffered(path: &Path) -> Result<Vec<u8>, Error> {
    let mut file = File::open(path).map_err(|e| io_error_with_path(e, path))?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf).map_err(|e| io_error_with_path(e, path))?;
    Ok(buf)
}

fn read_via_mmap(path: &Path) -> Result<Vec<u8>, Error> {
    let file = File::open(path).map_err(|e| io_error_with_path(e, path))?;
    // An empty file cannot be mapped; fall back to a buffered (empty) read.
    if file.metadata().map(|m| m.len()).unwrap_or(0) == 0 {
        return Ok(Vec::new());
    }
    // SAFETY: the file is not expected to be concurrently truncated by
    // another process during this short read; content is copied out
    // immediately and the map is dropped at the end of this scope.
    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| io_error_with_path(e, path))?;
    Ok(mmap.to_vec())
}

/// `true` when the first `BINARY_SNIFF_BYTES` of `bytes` contain a NUL byte
/// or at least `BINARY_NON_PRINTABLE_RATIO` of the sample is outside
/// printable ASCII/UTF-8, tie-broken against `content_inspector`'s own
/// classification.
fn is_binary(bytes: &[u8]) -> bool {
    let sample_len = bytes.len().min(BINARY_SNIFF_BYTES);
    let sample = &bytes[..sample_len];
    if sample.is_empty() {
        return false;
    }
    if sample.contains(&0) {
        return true;
    }

    let non_printable = sample
        .iter()
        .filter(|&&b| !(b == b'\t' || b == b'\n' || b == b'\r' || (0x20..=0x7e).contains(&b) || b >= 0x80))
        .count();
    let ratio = non_printable as f64 / sample.len() as f64;
    if ratio >= BINARY_NON_PRINTABLE_RATIO {
        return true;
    }

    content_inspector::inspect(sample).is_binary()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_small_file_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "hello\nworld\n").unwrap();

        match read_file(&path, "a.txt", 12).unwrap() {
            ReadOutcome::Text(pf) => {
                assert_eq!(pf.content, "hello\nworld\n");
                assert_eq!(pf.line_count, 2);
                assert!(!pf.is_summarized);
            }
            ReadOutcome::Binary { .. } => panic!("expected text"),
        }
    }

    #[test]
    fn detects_binary_via_nul_byte() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("b.bin");
        let bytes = vec![0u8, 1, 2, 3, 0, 5];
        fs::write(&path, &bytes).unwrap();

        match read_file(&path, "b.bin", bytes.len() as u64).unwrap() {
            ReadOutcome::Binary { path, .. } => assert_eq!(path, "b.bin"),
            ReadOutcome::Text(_) => panic!("expected binary"),
        }
    }

    #[test]
    fn empty_file_has_zero_line_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        match read_file(&path, "empty.txt", 0).unwrap() {
            ReadOutcome::Text(pf) => assert_eq!(pf.line_count, 0),
            ReadOutcome::Binary { .. } => panic!("expected text"),
        }
    }

    #[test]
    fn large_file_uses_memory_map_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.txt");
        let content = "x".repeat((MMAP_THRESHOLD_BYTES as usize) + 1);
        fs::write(&path, &content).unwrap();

        match read_file(&path, "big.txt", content.len() as u64).unwrap() {
            ReadOutcome::Text(pf) => assert_eq!(pf.byte_size, content.len() as u64),
            ReadOutcome::Binary { .. } => panic!("expected text"),
        }
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invalid.txt");
        // Mostly valid ASCII with one invalid byte, below binary threshold.
        let mut bytes = b"hello world this is mostly text ".to_vec();
        bytes.push(0xff);
        bytes.extend_from_slice(b" more text to dilute the ratio below 30 percent total");
        fs::write(&path, &bytes).unwrap();

        match read_file(&path, "invalid.txt", bytes.len() as u64).unwrap() {
            ReadOutcome::Text(pf) => assert!(pf.content.contains('\u{FFFD}')),
            ReadOutcome::Binary { .. } => panic!("expected text classification"),
        }
    }
}
