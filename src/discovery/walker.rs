//! Depth-first filesystem walk with per-directory `.gitignore` overlay and
//! symlink-cycle detection via visited-inode tracking.

use crate::cancellation::CancellationToken;
use crate::pattern::PatternMatcher;
use crossbeam_channel::Sender;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A file that survived pattern filtering during enumeration, ready for the
/// worker pool to read.
#[derive(Debug, Clone)]
pub struct EnumeratedFile {
    pub absolute_path: PathBuf,
    /// Relative to the repository root, forward-slash form.
    pub relative_path: String,
    pub byte_size: u64,
    pub modified: SystemTime,
}

#[cfg(unix)]
fn inode_of(meta: &fs::Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    meta.ino()
}

#[cfg(not(unix))]
fn inode_of(meta: &fs::Metadata) -> u64 {
    // No portable file-index on this platform; fall back to a value that
    // never collides, which disables cycle detection rather than producing
    // false positives.
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    let _ = meta;
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Walks `root` depth-first, sending each file that passes `base_matcher`
/// (overlaid with any `.gitignore` encountered along the way) to `tx`.
/// Single-threaded: this function is the sole producer into the worker
/// pool's queue. Returns once the whole tree has been visited or
/// `token` is cancelled.
pub fn enumerate(
    root: &Path,
    base_matcher: &PatternMatcher,
    tx: Sender<EnumeratedFile>,
    token: &CancellationToken,
) -> Vec<String> {
    let mut visited_inodes = HashSet::new();
    let mut ignored_dirs = Vec::new();
    walk_dir(root, root, base_matcher, &mut visited_inodes, &tx, token, &mut ignored_dirs);
    ignored_dirs
}

fn walk_dir(
    root: &Path,
    dir: &Path,
    matcher: &PatternMatcher,
    visited_inodes: &mut HashSet<u64>,
    tx: &Sender<EnumeratedFile>,
    token: &CancellationToken,
    ignored_dirs: &mut Vec<String>,
) {
    if token.is_cancelled() {
        return;
    }

    let gitignore_path = dir.join(".gitignore");
    let local_matcher = if gitignore_path.is_file() {
        matcher.with_overlay(&gitignore_path)
    } else {
        matcher.clone()
    };

    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(meta) = entry.metadata() else { continue };
        if meta.is_dir() {
            dirs.push(path);
        } else if meta.is_file() || meta.file_type().is_symlink() {
            files.push((path, meta));
        }
    }

    // Files first, so results read in a stable, shallow-first order even
    // though final render order is re-sorted downstream.
    for (path, meta) in files {
        if token.is_cancelled() {
            return;
        }
        let Some(relative) = relative_slash_path(root, &path) else { continue };

        if meta.file_type().is_symlink() {
            let Ok(target_meta) = fs::metadata(&path) else { continue };
            let Ok(canonical) = fs::canonicalize(&path) else { continue };
            if !canonical.starts_with(root) {
                continue; // symlink escapes the root; do not follow
            }
            let ino = inode_of(&target_meta);
            if !visited_inodes.insert(ino) {
                continue; // already visited this target; breaks cycles
            }
        }

        if !local_matcher.should_process(&relative) {
            continue;
        }

        let byte_size = meta.len();
        let modified = meta.modified().unwrap_or(std::time::UNIX_EPOCH);
        if tx
            .send(EnumeratedFile {
                absolute_path: path,
                relative_path: relative,
                byte_size,
                modified,
            })
            .is_err()
        {
            return; // receiver dropped
        }
    }

    for dir_path in dirs {
        if token.is_cancelled() {
            return;
        }
        let Some(relative) = relative_slash_path(root, &dir_path) else { continue };
        let dir_pattern = format!("{relative}/");
        if local_matcher.is_ignored(&dir_pattern) {
            ignored_dirs.push(relative);
            continue;
        }

        if let Ok(meta) = fs::symlink_metadata(&dir_path) {
            if meta.file_type().is_symlink() {
                let Ok(canonical) = fs::canonicalize(&dir_path) else { continue };
                if !canonical.starts_with(root) {
                    continue;
                }
                let Ok(real_meta) = fs::metadata(&dir_path) else { continue };
                let ino = inode_of(&real_meta);
                if !visited_inodes.insert(ino) {
                    continue;
                }
            }
        }

        walk_dir(root, &dir_path, &local_matcher, visited_inodes, tx, token, ignored_dirs);
    }
}

fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    Some(rel.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/"))
}
