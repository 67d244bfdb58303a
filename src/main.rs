// src/main.rs

use clap::Parser;
use repomix::cli::Cli;
use repomix::config::ConfigBuilder;
use repomix::errors::{exit_code, Error};
#[cfg(feature = "progress")]
use repomix::progress::IndicatifProgress;
#[cfg(feature = "progress")]
use repomix::progress::ProgressReporter;
use repomix::progress::ProgressTracker;
use repomix::signal::setup_signal_handler;
use repomix::run;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }))
    .init();

    // Panic hook to avoid leaking the build machine's absolute paths into a
    // crash message.
    std::panic::set_hook(Box::new(|info| {
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => "unexpected panic",
        };
        eprintln!(
            "repomix: internal error: {}",
            msg.replace(env!("CARGO_MANIFEST_DIR"), "<redacted>")
        );
    }));

    log::info!("starting repomix v{}", env!("CARGO_PKG_VERSION"));
    let cli = Cli::parse();

    let options = match ConfigBuilder::from_cli(cli).build() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("repomix: {e}");
            std::process::exit(exit_code(&e));
        }
    };

    let token = match setup_signal_handler() {
        Ok(token) => token,
        Err(e) => {
            eprintln!("repomix: failed to set up signal handler: {e}");
            std::process::exit(2);
        }
    };

    let progress = ProgressTracker::new();
    let bar_thread = spawn_progress_bar(progress.clone());

    let result = run(&options, &token, &progress);

    if let Some(handle) = bar_thread {
        let _ = handle.join();
    }

    match result {
        Ok(summary) => {
            if let Some(tokens) = summary.token_count {
                eprintln!("repomix: wrote {} files ({tokens} tokens) to {}", summary.file_count, options.output_path.display());
            } else {
                eprintln!("repomix: wrote {} files to {}", summary.file_count, options.output_path.display());
            }
        }
        Err(Error::Cancelled) => {
            eprintln!("repomix: cancelled; a partial artifact was written to {}", options.output_path.display());
            std::process::exit(exit_code(&Error::Cancelled));
        }
        Err(e) => {
            eprintln!("repomix: {e}");
            std::process::exit(exit_code(&e));
        }
    }
}

/// On a TTY stderr with the `progress` feature enabled, spawns a background
/// thread that polls `tracker` and mirrors it onto an indicatif bar until the
/// run marks itself complete.
#[cfg(feature = "progress")]
fn spawn_progress_bar(tracker: ProgressTracker) -> Option<std::thread::JoinHandle<()>> {
    if !atty::is(atty::Stream::Stderr) {
        return None;
    }
    let bar = IndicatifProgress::new();
    Some(std::thread::spawn(move || loop {
        let snap = tracker.snapshot();
        bar.set_length(snap.total as u64);
        bar.set_position(snap.processed as u64);
        if let Some(path) = &snap.current_path {
            bar.set_message(path.display().to_string());
        }
        if snap.is_complete {
            bar.finish_with_message(format!("packed {} files", snap.processed));
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(100));
    }))
}

#[cfg(not(feature = "progress"))]
fn spawn_progress_bar(_tracker: ProgressTracker) -> Option<std::thread::JoinHandle<()>> {
    None
}
