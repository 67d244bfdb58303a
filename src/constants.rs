// src/constants.rs

//! Default tables used across pattern matching, scoring, and rendering.

/// Default ignore globs applied before any user-supplied pattern, covering
/// VCS metadata, build outputs, dependency trees, OS detritus, and common
/// binary suffixes.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    ".git/",
    ".hg/",
    ".svn/",
    "node_modules/",
    "target/",
    "build/",
    "out/",
    "dist/",
    "__pycache__/",
    ".cache/",
    ".DS_Store",
    "Thumbs.db",
    "*.o",
    "*.obj",
    "*.a",
    "*.lib",
    "*.so",
    "*.dll",
    "*.exe",
    "*.pyc",
    "*.class",
    "*.png",
    "*.jpg",
    "*.jpeg",
    "*.gif",
    "*.bmp",
    "*.ico",
    "*.pdf",
    "*.zip",
    "*.tar",
    "*.gz",
    "*.7z",
    "*.rar",
    "*.mp3",
    "*.mp4",
    "*.mov",
    "*.woff",
    "*.woff2",
    "*.ttf",
    "*.eot",
];

/// Default entry-point basename globs used by `structure.entry_point`.
pub const ENTRY_POINT_PATTERNS: &[&str] = &["main.*", "index.*", "app.*", "lib.*", "__main__.*"];

/// Default "important" root-level file basenames for `structure.root`.
pub const DEFAULT_IMPORTANT_FILES: &[&str] = &[
    "README.md",
    "readme.md",
    "Cargo.toml",
    "package.json",
    "pyproject.toml",
    "go.mod",
    "Makefile",
    "LICENSE",
];

/// Default "important" top-level directory names for `structure.top_dir`.
pub const DEFAULT_IMPORTANT_DIRS: &[&str] = &["src", "lib", "cmd", "pkg", "app"];

/// Default source-file extensions for `type.source`.
pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &[
    "rs", "py", "js", "ts", "tsx", "jsx", "go", "c", "h", "cpp", "hpp", "cc", "java", "rb", "php",
    "cs", "swift", "kt", "scala",
];

/// Default config-file extensions for `type.config`.
pub const DEFAULT_CONFIG_EXTENSIONS: &[&str] =
    &["toml", "yaml", "yml", "json", "ini", "cfg", "conf"];

/// Default docs-file extensions for `type.docs`.
pub const DEFAULT_DOCS_EXTENSIONS: &[&str] = &["md", "rst", "txt", "adoc"];

/// Default substrings used to classify a path as a test file for `type.test`.
pub const DEFAULT_TEST_PATTERNS: &[&str] = &["test", "tests", "spec", "__tests__"];

/// README basenames (case-insensitive prefix match) recognized for
/// `readme_passthrough`.
pub const README_BASENAME_PREFIX: &str = "readme";

/// Size threshold, in bytes, above which the reader uses a memory map
/// instead of a buffered read.
pub const MMAP_THRESHOLD_BYTES: u64 = 1024 * 1024;

/// Size of the leading sample used for binary detection.
pub const BINARY_SNIFF_BYTES: usize = 8 * 1024;

/// Fraction of non-printable bytes in the sniff window above which a file
/// is classified as binary.
pub const BINARY_NON_PRINTABLE_RATIO: f64 = 0.30;

/// Default global run deadline, in seconds.
pub const DEFAULT_RUN_DEADLINE_SECS: u64 = 120;

/// Default output-size ceiling, in bytes, before the renderer stops
/// appending file content and flags the run as truncated.
pub const DEFAULT_OUTPUT_SIZE_CEILING_BYTES: u64 = 64 * 1024 * 1024;

/// Recognized tokenizer encodings.
pub const TOKENIZER_ENCODINGS: &[&str] =
    &["cl100k_base", "p50k_base", "p50k_edit", "r50k_base", "o200k_base"];

/// Marker appended to a summary after truncation at `max_summary_lines`.
pub fn truncation_marker(omitted: usize) -> String {
    format!("… ({omitted} more lines omitted)")
}

/// Marker inserted into a partial, cancelled-run artifact.
pub const CANCELLED_TRUNCATION_MARKER: &str = "[truncated]";
