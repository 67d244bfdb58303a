//! Glob pattern compilation and `.gitignore`-style matching.
//!
//! Patterns are translated into anchored regexes by hand rather than via a
//! general-purpose ignore library, because the matching semantics here
//! (anchoring, basename-vs-path patterns, directory patterns, negation that
//! clears the ignore flag rather than the include flag) are pinned down
//! precisely enough that a bespoke compiler is the faithful implementation.

pub(crate) mod glob;
mod gitignore;

pub use gitignore::load_gitignore_patterns;

use crate::constants::DEFAULT_IGNORE_PATTERNS;
use crate::errors::Error;
use regex::RegexSet;

/// A single compiled pattern: the source text plus whether it negates
/// (clears) a prior ignore match.
#[derive(Debug, Clone)]
struct CompiledPattern {
    source: String,
    regex: regex::Regex,
    negate: bool,
}

/// Two ordered lists of compiled glob-derived regexes: one "ignore" and one
/// "include". An empty include list means every non-ignored file is
/// included; a non-empty one requires a positive include match as well.
#[derive(Debug, Clone, Default)]
pub struct PatternMatcher {
    ignore: Vec<CompiledPattern>,
    include: Vec<CompiledPattern>,
}

impl PatternMatcher {
    /// A matcher seeded with the default ignore set (VCS metadata, build
    /// outputs, OS detritus, common binary suffixes).
    pub fn with_defaults() -> Self {
        let mut matcher = Self::default();
        for pattern in DEFAULT_IGNORE_PATTERNS {
            // The default set is verified at compile time via tests; a
            // failure here indicates a typo in `constants.rs`, not user input.
            matcher.add_ignore(pattern).expect("default ignore pattern must compile");
        }
        matcher
    }

    /// Adds an ignore pattern. Returns `Err(Error::PatternError)` on an
    /// unparseable pattern; the caller is expected to log and continue.
    pub fn add_ignore(&mut self, pattern: &str) -> Result<(), Error> {
        let compiled = compile(pattern)?;
        self.ignore.push(compiled);
        Ok(())
    }

    /// Adds an include pattern.
    pub fn add_include(&mut self, pattern: &str) -> Result<(), Error> {
        let compiled = compile(pattern)?;
        self.include.push(compiled);
        Ok(())
    }

    /// Adds a comma-separated list of include globs.
    pub fn set_includes_csv(&mut self, csv: &str) -> Result<(), Error> {
        for part in split_csv(csv) {
            self.add_include(part)?;
        }
        Ok(())
    }

    /// Adds a comma-separated list of exclude (ignore) globs.
    pub fn set_excludes_csv(&mut self, csv: &str) -> Result<(), Error> {
        for part in split_csv(csv) {
            self.add_ignore(part)?;
        }
        Ok(())
    }

    /// Loads a `.gitignore` file's patterns into this matcher's ignore
    /// list, honoring comment lines, blank lines, and negation.
    pub fn load_gitignore(&mut self, path: &std::path::Path) -> std::io::Result<()> {
        for (pattern, negate) in load_gitignore_patterns(path)? {
            if let Ok(mut compiled) = compile(&pattern) {
                compiled.negate = negate;
                self.ignore.push(compiled);
            }
            // An unparseable line in a .gitignore is skipped silently, same
            // as git itself does for patterns it can't represent.
        }
        Ok(())
    }

    /// `true` when `path` (forward-slash, relative to the repo root)
    /// matches the ignore list without being subsequently negated.
    pub fn is_ignored(&self, path: &str) -> bool {
        let mut ignored = false;
        for p in &self.ignore {
            if p.regex.is_match(path) {
                ignored = !p.negate;
            }
        }
        ignored
    }

    /// `true` when the include list is empty, or `path` matches at least
    /// one include pattern.
    pub fn is_included(&self, path: &str) -> bool {
        self.include.is_empty() || self.include.iter().any(|p| p.regex.is_match(path))
    }

    /// `is_included(path) && !is_ignored(path)`.
    pub fn should_process(&self, path: &str) -> bool {
        self.is_included(path) && !self.is_ignored(path)
    }

    /// Returns a clone of this matcher with an additional directory-local
    /// `.gitignore` overlaid, used by the enumerator as it descends.
    pub fn with_overlay(&self, gitignore_path: &std::path::Path) -> Self {
        let mut overlay = self.clone();
        let _ = overlay.load_gitignore(gitignore_path);
        overlay
    }

    /// Builds a `RegexSet` over the ignore patterns for bulk pre-filtering;
    /// not used for correctness (order/negation still requires the ordered
    /// walk above), only as a fast reject ahead of it.
    pub fn ignore_regex_set(&self) -> RegexSet {
        RegexSet::new(self.ignore.iter().map(|p| p.regex.as_str())).unwrap_or_else(|_| RegexSet::empty())
    }
}

fn split_csv(csv: &str) -> impl Iterator<Item = &str> {
    csv.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn compile(pattern: &str) -> Result<CompiledPattern, Error> {
    let (text, negate) = if let Some(stripped) = pattern.strip_prefix('!') {
        (stripped, true)
    } else {
        (pattern, false)
    };
    let regex_src = glob::glob_to_regex(text);
    let regex = regex::Regex::new(&regex_src).map_err(|e| Error::PatternError {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;
    Ok(CompiledPattern { source: pattern.to_string(), regex, negate })
}
