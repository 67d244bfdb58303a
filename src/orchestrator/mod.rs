//! Owns the run lifecycle: enumeration, optional scoring, parallel reading,
//! optional summarization, rendering, and optional tokenization. Exposes a
//! single [`execute`] entry point used by both the CLI and (indirectly) the
//! service surface.

mod state;

pub use state::RunState;

use crate::cancellation::CancellationToken;
use crate::config::RepomixOptions;
use crate::constants::CANCELLED_TRUNCATION_MARKER;
use crate::core_types::{ProcessedFile, RunSummary, SelectionStrategy};
use crate::discovery;
use crate::errors::Error;
use crate::ner;
use crate::pattern::PatternMatcher;
use crate::progress::ProgressTracker;
use crate::reader::{self, ReadOutcome};
use crate::render;
use crate::scorer::{self, ScoringInput};
use crate::summarizer;
use crate::tokenizer;
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime};

struct ReadResult {
    file: ProcessedFile,
    modified: SystemTime,
}

/// Runs one end-to-end pass over `options.input_path`, writing the rendered
/// artifact to `options.output_path` (or producing it only in memory when
/// `tokens_only` is set) and returning the aggregate [`RunSummary`].
///
/// A non-`Ok` return is reserved for the two conditions that abort a run in
/// progress (`Timeout`, `Cancelled`); per-file problems are folded into the
/// summary instead.
pub fn execute(options: &RepomixOptions, token: &CancellationToken, progress: &ProgressTracker) -> Result<RunSummary, Error> {
    let mut state = RunState::Idle;
    let deadline = Instant::now() + options.run_deadline;
    let mut phase_timings = Vec::new();

    let root = fs::canonicalize(&options.input_path)
        .map_err(|e| crate::errors::io_error_with_path(e, &options.input_path))?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads)
        .build()
        .map_err(|e| Error::InvalidOptions(format!("failed to build worker pool: {e}")))?;

    state = state.transition(RunState::Enumerating, options.verbose);
    let phase_start = Instant::now();
    let matcher = build_matcher(options)?;

    let (tx, rx) = crossbeam_channel::unbounded();
    let enumerator_root = root.clone();
    let enumerator_matcher = matcher.clone();
    let enumerator_token = token.clone();
    let enumerator_handle =
        std::thread::spawn(move || discovery::enumerate(&enumerator_root, &enumerator_matcher, tx, &enumerator_token));

    state = state.transition(RunState::Reading, options.verbose);
    let results: Mutex<Vec<ReadResult>> = Mutex::new(Vec::new());
    let all_paths: Mutex<Vec<String>> = Mutex::new(Vec::new());

    pool.install(|| {
        rx.into_iter().par_bridge().for_each(|candidate| {
            if token.is_cancelled() || Instant::now() >= deadline {
                return;
            }
            all_paths.lock().unwrap().push(candidate.relative_path.clone());
            match reader::read_file(&candidate.absolute_path, &candidate.relative_path, candidate.byte_size) {
                Ok(ReadOutcome::Text(file)) => {
                    progress.record_processed(&candidate.relative_path);
                    results.lock().unwrap().push(ReadResult { file, modified: candidate.modified });
                }
                Ok(ReadOutcome::Binary { .. }) => {
                    progress.record_skipped();
                }
                Err(_) => {
                    progress.record_errored();
                }
            }
        });
    });

    let ignored_dirs = enumerator_handle.join().unwrap_or_default();
    let mut read_results = results.into_inner().unwrap();
    let tree_paths = all_paths.into_inner().unwrap();
    progress.set_total(read_results.len());

    if options.show_timing {
        phase_timings.push(("enumerate_and_read", phase_start.elapsed()));
    }

    if token.is_cancelled() {
        return finish_cancelled(options, &tree_paths, &ignored_dirs, read_results, phase_timings, progress);
    }
    if Instant::now() >= deadline {
        return finish_timeout(options, &tree_paths, &ignored_dirs, read_results, phase_timings, progress);
    }

    let scoring_report = if options.selection_strategy == SelectionStrategy::Scoring {
        state = state.transition(RunState::Scoring, options.verbose);
        let phase_start = Instant::now();
        let inputs: Vec<ScoringInput<'_>> = read_results
            .iter()
            .map(|r| ScoringInput { path: &r.file.path, content: &r.file.content, byte_size: r.file.byte_size, modified: r.modified })
            .collect();
        let report = scorer::score_all(&inputs, &options.scoring, SystemTime::now());
        if options.show_timing {
            phase_timings.push(("scoring", phase_start.elapsed()));
        }

        let included: std::collections::HashSet<String> =
            report.files.iter().filter(|f| f.included).map(|f| f.path.clone()).collect();
        read_results.retain(|r| included.contains(&r.file.path));
        Some(report)
    } else {
        None
    };

    state = state.transition(RunState::Summarizing, options.verbose);
    let phase_start = Instant::now();
    let ner_cache = ner::EntityCache::new(options.summarization.ner.max_entities.max(64) * 4);
    let mut files: Vec<ProcessedFile> = if options.summarization.enabled {
        pool.install(|| {
            read_results
                .into_par_iter()
                .map(|r| {
                    if token.is_cancelled() {
                        r.file
                    } else {
                        summarizer::summarize(r.file, &options.summarization, &ner_cache)
                    }
                })
                .collect()
        })
    } else {
        read_results.into_iter().map(|r| r.file).collect()
    };
    if options.show_timing {
        phase_timings.push(("summarizing", phase_start.elapsed()));
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));

    state = state.transition(RunState::Rendering, options.verbose);
    let phase_start = Instant::now();
    let (rendered, content_truncated) =
        render_with_ceiling(options, &tree_paths, &ignored_dirs, &files, &scoring_report, &phase_timings);
    if options.show_timing {
        phase_timings.push(("rendering", phase_start.elapsed()));
    }

    let mut token_count = None;
    if options.count_tokens {
        state = state.transition(RunState::Tokenizing, options.verbose);
        let phase_start = Instant::now();
        match tokenizer::count(&rendered, &options.token_encoding) {
            Ok(n) => token_count = Some(n),
            Err(_) => token_count = None,
        }
        if options.show_timing {
            phase_timings.push(("tokenizing", phase_start.elapsed()));
        }
    }

    if !options.tokens_only {
        fs::write(&options.output_path, &rendered).map_err(|e| crate::errors::io_error_with_path(e, &options.output_path))?;
    }

    progress.mark_complete();
    let _state = state.transition(RunState::Done, options.verbose);

    Ok(RunSummary {
        file_count: files.len(),
        line_count: files.iter().map(|f| f.line_count).sum(),
        byte_count: files.iter().map(|f| f.byte_size).sum(),
        skipped_count: progress.snapshot().skipped,
        errored_count: progress.snapshot().errored,
        token_count,
        content_truncated,
        cancelled: false,
        processed: progress.snapshot().processed,
        total: progress.snapshot().total,
        phase_timings,
        scoring_report,
    })
}

fn build_matcher(options: &RepomixOptions) -> Result<PatternMatcher, Error> {
    let mut matcher = PatternMatcher::with_defaults();
    if let Some(csv) = &options.include_csv {
        matcher.set_includes_csv(csv)?;
    }
    if let Some(csv) = &options.exclude_csv {
        matcher.set_excludes_csv(csv)?;
    }
    Ok(matcher)
}

/// Writes file blocks until the accumulated output would exceed
/// `output_size_ceiling_bytes`, then stops appending content but still
/// emits the trailing summary, per the output-size ceiling discipline.
fn render_with_ceiling(
    options: &RepomixOptions,
    tree_paths: &[String],
    ignored_dirs: &[String],
    files: &[ProcessedFile],
    scoring_report: &Option<crate::core_types::ScoringReport>,
    phase_timings: &[(&'static str, Duration)],
) -> (String, bool) {
    let fmt = render::formatter_for(options.format);
    let mut out = String::new();
    out.push_str(&fmt.preamble());
    out.push('\n');
    out.push_str(&render::render_tree(&root_label(options), tree_paths, ignored_dirs));
    out.push('\n');

    let mut truncated = false;
    let mut emitted_count = 0usize;
    let mut line_count = 0usize;
    let mut byte_count = 0u64;
    for (index, file) in files.iter().enumerate() {
        let block = fmt.file_block(file, index);
        if out.len() as u64 + block.len() as u64 > options.output_size_ceiling_bytes {
            truncated = true;
            break;
        }
        out.push_str(&block);
        out.push('\n');
        emitted_count += 1;
        line_count += file.line_count;
        byte_count += file.byte_size;
    }

    let summary = RunSummary {
        file_count: emitted_count,
        line_count,
        byte_count,
        scoring_report: scoring_report.clone(),
        content_truncated: truncated,
        phase_timings: phase_timings.to_vec(),
        ..RunSummary::default()
    };
    out.push_str(&fmt.summary_block(&summary));
    (out, truncated)
}

fn root_label(options: &RepomixOptions) -> String {
    options
        .input_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| options.input_path.display().to_string())
}

fn finish_cancelled(
    options: &RepomixOptions,
    tree_paths: &[String],
    ignored_dirs: &[String],
    read_results: Vec<ReadResult>,
    phase_timings: Vec<(&'static str, Duration)>,
    progress: &ProgressTracker,
) -> Result<RunSummary, Error> {
    let files: Vec<ProcessedFile> = read_results.into_iter().map(|r| r.file).collect();
    if !options.tokens_only {
        let (mut rendered, _) = render_with_ceiling(options, tree_paths, ignored_dirs, &files, &None, &phase_timings);
        rendered.push('\n');
        rendered.push_str(CANCELLED_TRUNCATION_MARKER);
        let _ = fs::write(&options.output_path, rendered);
    }
    let snap = progress.snapshot();
    Err(wrap_partial(Error::Cancelled, RunSummary {
        file_count: files.len(),
        line_count: files.iter().map(|f| f.line_count).sum(),
        byte_count: files.iter().map(|f| f.byte_size).sum(),
        cancelled: true,
        processed: snap.processed,
        total: snap.total,
        phase_timings,
        ..RunSummary::default()
    }))
}

fn finish_timeout(
    options: &RepomixOptions,
    tree_paths: &[String],
    ignored_dirs: &[String],
    read_results: Vec<ReadResult>,
    phase_timings: Vec<(&'static str, Duration)>,
    progress: &ProgressTracker,
) -> Result<RunSummary, Error> {
    let files: Vec<ProcessedFile> = read_results.into_iter().map(|r| r.file).collect();
    if !options.tokens_only {
        let (mut rendered, _) = render_with_ceiling(options, tree_paths, ignored_dirs, &files, &None, &phase_timings);
        rendered.push('\n');
        rendered.push_str(CANCELLED_TRUNCATION_MARKER);
        let _ = fs::write(&options.output_path, rendered);
    }
    let snap = progress.snapshot();
    Err(wrap_partial(Error::Timeout, RunSummary {
        file_count: files.len(),
        line_count: files.iter().map(|f| f.line_count).sum(),
        byte_count: files.iter().map(|f| f.byte_size).sum(),
        processed: snap.processed,
        total: snap.total,
        phase_timings,
        ..RunSummary::default()
    }))
}

/// `Timeout`/`Cancelled` carry no payload in [`Error`]; the partial
/// [`RunSummary`] that was already flushed to disk is logged here for the
/// caller to inspect via `RUST_LOG=debug` rather than threaded through the
/// error type itself.
fn wrap_partial(err: Error, summary: RunSummary) -> Error {
    log::debug!("run ended early ({err}); partial summary: processed={}/{}", summary.processed, summary.total);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RepomixOptions;
    use std::fs;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn plain_run_with_no_scoring_includes_text_files_and_skips_binaries() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "README.md", "hello\n");
        write(dir.path(), "src/a.txt", "x\ny\n");
        fs::create_dir_all(dir.path().join("build")).unwrap();
        fs::write(dir.path().join("build/obj.o"), [0u8, 1, 2, 0, 4]).unwrap();

        let mut options = RepomixOptions::new_for_test(dir.path());
        options.output_path = dir.path().join("out.txt");
        let token = CancellationToken::new();
        let progress = ProgressTracker::new();

        let summary = execute(&options, &token, &progress).unwrap();
        assert_eq!(summary.file_count, 2);

        let rendered = fs::read_to_string(&options.output_path).unwrap();
        assert!(rendered.contains("README.md"));
        assert!(rendered.contains("src/a.txt"));
        assert!(!rendered.contains("build/obj.o"));
    }

    #[test]
    fn cancellation_flushes_a_truncated_partial_artifact() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..20 {
            write(dir.path(), &format!("f{i}.txt"), "content\n");
        }
        let mut options = RepomixOptions::new_for_test(dir.path());
        options.output_path = dir.path().join("out.txt");
        let token = CancellationToken::new();
        token.cancel();
        let progress = ProgressTracker::new();

        let err = execute(&options, &token, &progress).unwrap_err();
        assert!(matches!(err, Error::Cancelled));
        let rendered = fs::read_to_string(&options.output_path).unwrap();
        assert!(rendered.contains(CANCELLED_TRUNCATION_MARKER));
    }
}
