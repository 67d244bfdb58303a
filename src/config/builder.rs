// src/config/builder.rs

//! Builds a validated [`RepomixOptions`] from CLI arguments or from
//! programmatic setter calls. This is the single path both surfaces use to
//! reach a runnable configuration.

use super::parsing::parse_byte_size;
use super::{NerOptions, RepomixOptions, ScoringConfig, SummarizationOptions};
use crate::cli::{Cli, CliFormat, CliNerMethod, CliSelection};
use crate::constants::{DEFAULT_OUTPUT_SIZE_CEILING_BYTES, DEFAULT_RUN_DEADLINE_SECS, TOKENIZER_ENCODINGS};
use crate::core_types::{NerMethod, OutputFormat, SelectionStrategy};
use crate::errors::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Builder for [`RepomixOptions`]. Every field is optional until `build`,
/// which fills in documented defaults and validates option combinations.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    input_path: Option<String>,
    output_path: Option<String>,
    format: Option<OutputFormat>,
    include_csv: Option<String>,
    exclude_csv: Option<String>,
    threads: Option<usize>,
    verbose: Option<bool>,
    show_timing: Option<bool>,
    count_tokens: Option<bool>,
    token_encoding: Option<String>,
    tokens_only: Option<bool>,
    selection_strategy: Option<SelectionStrategy>,
    inclusion_threshold: Option<f64>,
    weight_structure_root: Option<f64>,
    weight_structure_top_dir: Option<f64>,
    weight_structure_entry_point: Option<f64>,
    weight_structure_graph: Option<f64>,
    weight_type: Option<f64>,
    weight_recency: Option<f64>,
    weight_size_inv: Option<f64>,
    weight_density: Option<f64>,
    recent_window_days: Option<u32>,
    large_file_threshold: Option<String>,
    summarize: Option<bool>,
    summary_first_n_lines: Option<usize>,
    summary_signatures: Option<bool>,
    summary_docstrings: Option<bool>,
    summary_snippets: Option<usize>,
    summary_max_lines: Option<usize>,
    ner_enabled: Option<bool>,
    ner_method: Option<NerMethod>,
    run_deadline_secs: Option<u64>,
    output_size_ceiling: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates a builder from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            input_path: Some(cli.input),
            output_path: Some(cli.output),
            format: Some(match cli.format {
                CliFormat::Plain => OutputFormat::Plain,
                CliFormat::Markdown => OutputFormat::Markdown,
                CliFormat::Xml => OutputFormat::Xml,
                CliFormat::ClaudeXml => OutputFormat::ClaudeXml,
            }),
            include_csv: cli.include,
            exclude_csv: cli.exclude,
            threads: cli.threads,
            verbose: Some(cli.verbose),
            show_timing: Some(cli.timing),
            count_tokens: Some(cli.count_tokens),
            token_encoding: Some(cli.token_encoding),
            tokens_only: Some(cli.tokens_only),
            selection_strategy: Some(match cli.selection {
                CliSelection::All => SelectionStrategy::All,
                CliSelection::Scoring => SelectionStrategy::Scoring,
            }),
            inclusion_threshold: cli.inclusion_threshold,
            weight_structure_root: cli.weight_structure_root,
            weight_structure_top_dir: cli.weight_structure_top_dir,
            weight_structure_entry_point: cli.weight_structure_entry_point,
            weight_structure_graph: cli.weight_structure_graph,
            weight_type: cli.weight_type,
            weight_recency: cli.weight_recency,
            weight_size_inv: cli.weight_size_inv,
            weight_density: cli.weight_density,
            recent_window_days: cli.recent_window_days,
            large_file_threshold: cli.large_file_threshold,
            summarize: Some(cli.summarize),
            summary_first_n_lines: cli.summary_first_n_lines,
            summary_signatures: Some(cli.summary_signatures),
            summary_docstrings: Some(cli.summary_docstrings),
            summary_snippets: cli.summary_snippets,
            summary_max_lines: cli.summary_max_lines,
            ner_enabled: Some(cli.ner_enabled),
            ner_method: Some(match cli.ner_method {
                CliNerMethod::Regex => NerMethod::Regex,
                CliNerMethod::SyntaxTree => NerMethod::SyntaxTree,
                CliNerMethod::Ml => NerMethod::Ml,
                CliNerMethod::Hybrid => NerMethod::Hybrid,
            }),
            run_deadline_secs: cli.run_deadline_secs,
            output_size_ceiling: cli.output_size_ceiling,
        }
    }

    #[must_use]
    pub fn input_path(mut self, path: impl Into<String>) -> Self {
        self.input_path = Some(path.into());
        self
    }
    #[must_use]
    pub fn output_path(mut self, path: impl Into<String>) -> Self {
        self.output_path = Some(path.into());
        self
    }
    #[must_use]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
    #[must_use]
    pub fn include_csv(mut self, csv: impl Into<String>) -> Self {
        self.include_csv = Some(csv.into());
        self
    }
    #[must_use]
    pub fn exclude_csv(mut self, csv: impl Into<String>) -> Self {
        self.exclude_csv = Some(csv.into());
        self
    }
    #[must_use]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }
    #[must_use]
    pub fn show_timing(mut self, show_timing: bool) -> Self {
        self.show_timing = Some(show_timing);
        self
    }
    #[must_use]
    pub fn count_tokens(mut self, count_tokens: bool) -> Self {
        self.count_tokens = Some(count_tokens);
        self
    }
    #[must_use]
    pub fn token_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.token_encoding = Some(encoding.into());
        self
    }
    #[must_use]
    pub fn tokens_only(mut self, tokens_only: bool) -> Self {
        self.tokens_only = Some(tokens_only);
        self
    }
    #[must_use]
    pub fn selection_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.selection_strategy = Some(strategy);
        self
    }
    #[must_use]
    pub fn inclusion_threshold(mut self, threshold: f64) -> Self {
        self.inclusion_threshold = Some(threshold);
        self
    }
    #[must_use]
    pub fn recent_window_days(mut self, days: u32) -> Self {
        self.recent_window_days = Some(days);
        self
    }
    #[must_use]
    pub fn large_file_threshold(mut self, size: impl Into<String>) -> Self {
        self.large_file_threshold = Some(size.into());
        self
    }
    #[must_use]
    pub fn output_size_ceiling(mut self, size: impl Into<String>) -> Self {
        self.output_size_ceiling = Some(size.into());
        self
    }
    #[must_use]
    pub fn run_deadline_secs(mut self, secs: u64) -> Self {
        self.run_deadline_secs = Some(secs);
        self
    }
    #[must_use]
    pub fn summarize(mut self, summarize: bool) -> Self {
        self.summarize = Some(summarize);
        self
    }
    #[must_use]
    pub fn ner_enabled(mut self, enabled: bool) -> Self {
        self.ner_enabled = Some(enabled);
        self
    }
    #[must_use]
    pub fn ner_method(mut self, method: NerMethod) -> Self {
        self.ner_method = Some(method);
        self
    }

    /// Builds the final `RepomixOptions`, validating option combinations
    /// and falling back to documented defaults for everything unset.
    pub fn build(self) -> Result<RepomixOptions> {
        let input_path_str = self.input_path.ok_or_else(|| {
            Error::InvalidOptions("--input is required".to_string())
        })?;
        let input_path = PathBuf::from(&input_path_str);

        let token_encoding = self.token_encoding.unwrap_or_else(|| "cl100k_base".to_string());
        if self.count_tokens.unwrap_or(false) && !TOKENIZER_ENCODINGS.contains(&token_encoding.as_str())
        {
            return Err(Error::InvalidOptions(format!(
                "unknown token encoding '{token_encoding}'"
            )));
        }

        if self.tokens_only.unwrap_or(false) && !self.count_tokens.unwrap_or(false) {
            return Err(Error::InvalidOptions(
                "--tokens-only requires --count-tokens".to_string(),
            ));
        }

        let inclusion_threshold = self.inclusion_threshold.unwrap_or(0.3);
        if !(0.0..=1.0).contains(&inclusion_threshold) {
            return Err(Error::InvalidOptions(
                "inclusion threshold must be within [0.0, 1.0]".to_string(),
            ));
        }

        let selection_strategy = self.selection_strategy.unwrap_or(SelectionStrategy::All);

        let large_file_threshold_bytes = match parse_byte_size(self.large_file_threshold.as_deref())? {
            Some(n) => n,
            None => ScoringConfig::default().large_file_threshold_bytes,
        };

        let defaults = ScoringConfig::default();
        let scoring = ScoringConfig {
            inclusion_threshold,
            weight_structure_root: self.weight_structure_root.unwrap_or(defaults.weight_structure_root),
            weight_structure_top_dir: self.weight_structure_top_dir.unwrap_or(defaults.weight_structure_top_dir),
            weight_structure_entry_point: self
                .weight_structure_entry_point
                .unwrap_or(defaults.weight_structure_entry_point),
            weight_structure_graph: self.weight_structure_graph.unwrap_or(defaults.weight_structure_graph),
            weight_type: self.weight_type.unwrap_or(defaults.weight_type),
            weight_recency: self.weight_recency.unwrap_or(defaults.weight_recency),
            weight_size_inv: self.weight_size_inv.unwrap_or(defaults.weight_size_inv),
            weight_density: self.weight_density.unwrap_or(defaults.weight_density),
            recent_window_days: self.recent_window_days.unwrap_or(defaults.recent_window_days),
            large_file_threshold_bytes,
            ..defaults
        };

        let summary_snippets = self.summary_snippets;
        let ner = NerOptions {
            enabled: self.ner_enabled.unwrap_or(false),
            method: self.ner_method.unwrap_or(NerMethod::Regex),
            ..NerOptions::default()
        };

        let summarization = SummarizationOptions {
            enabled: self.summarize.unwrap_or(false),
            first_n_lines: self.summary_first_n_lines,
            signatures: self.summary_signatures.unwrap_or(false),
            docstrings: self.summary_docstrings.unwrap_or(false),
            snippets_count: summary_snippets,
            max_summary_lines: self.summary_max_lines.unwrap_or(200),
            ner,
            ..SummarizationOptions::default()
        };

        let threads = self
            .threads
            .unwrap_or_else(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(4));
        if threads == 0 {
            return Err(Error::InvalidOptions("--threads must be at least 1".to_string()));
        }

        let output_size_ceiling_bytes = parse_byte_size(self.output_size_ceiling.as_deref())?
            .unwrap_or(DEFAULT_OUTPUT_SIZE_CEILING_BYTES);

        Ok(RepomixOptions {
            input_path,
            output_path: PathBuf::from(self.output_path.unwrap_or_else(|| "repomix-output.txt".to_string())),
            format: self.format.unwrap_or(OutputFormat::Plain),
            verbose: self.verbose.unwrap_or(false),
            show_timing: self.show_timing.unwrap_or(false),
            threads,
            include_csv: self.include_csv,
            exclude_csv: self.exclude_csv,
            summarization,
            selection_strategy,
            scoring,
            count_tokens: self.count_tokens.unwrap_or(false),
            token_encoding,
            tokens_only: self.tokens_only.unwrap_or(false),
            run_deadline: Duration::from_secs(self.run_deadline_secs.unwrap_or(DEFAULT_RUN_DEADLINE_SECS)),
            output_size_ceiling_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_input_path() {
        let err = ConfigBuilder::new().build().unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)));
    }

    #[test]
    fn build_applies_documented_defaults() {
        let opts = ConfigBuilder::new().input_path(".").build().unwrap();
        assert_eq!(opts.output_path, PathBuf::from("repomix-output.txt"));
        assert_eq!(opts.format, OutputFormat::Plain);
        assert_eq!(opts.selection_strategy, SelectionStrategy::All);
        assert_eq!(opts.token_encoding, "cl100k_base");
        assert!(!opts.tokens_only);
    }

    #[test]
    fn tokens_only_requires_count_tokens() {
        let err = ConfigBuilder::new().input_path(".").tokens_only(true).build().unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)));
    }

    #[test]
    fn rejects_unknown_token_encoding() {
        let err = ConfigBuilder::new()
            .input_path(".")
            .count_tokens(true)
            .token_encoding("bogus_encoding")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)));
    }

    #[test]
    fn rejects_out_of_range_inclusion_threshold() {
        let err = ConfigBuilder::new().input_path(".").inclusion_threshold(1.5).build().unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)));
    }

    #[test]
    fn rejects_zero_threads() {
        let err = ConfigBuilder::new().input_path(".").threads(0).build().unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)));
    }
}
