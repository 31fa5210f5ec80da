pub mod cli;
pub mod toml_config;

use crate::domain::model::{Metric, RecordLayout};

#[cfg(feature = "cli")]
pub use self::args::CliConfig;

/// Builds a layout from a metric preset plus explicit overrides.
/// `delimiter: Some(None)` means "take the whole token".
pub fn resolve_layout(
    metric: Metric,
    record_size: Option<usize>,
    target_line: Option<usize>,
    target_token: Option<usize>,
    delimiter: Option<Option<char>>,
) -> RecordLayout {
    let preset = RecordLayout::for_metric(metric);
    RecordLayout {
        record_size: record_size.unwrap_or(preset.record_size),
        target_line: target_line.unwrap_or(preset.target_line),
        target_token: target_token.unwrap_or(preset.target_token),
        delimiter: delimiter.unwrap_or(preset.delimiter),
    }
}

/// The metric name, or `custom` once the layout no longer matches its preset.
pub fn metric_label(metric: Metric, layout: &RecordLayout) -> String {
    if *layout == RecordLayout::for_metric(metric) {
        metric.to_string()
    } else {
        "custom".to_string()
    }
}

#[cfg(feature = "cli")]
mod args {
    use super::toml_config::TomlConfig;
    use super::{metric_label, resolve_layout};
    use crate::core::ConfigProvider;
    use crate::domain::model::{
        Metric, OutputFormat, RecordLayout, DEFAULT_INPUT_PATH, DEFAULT_MAX_LINES,
    };
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, validate_positive_number, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
    #[command(name = "solvestat")]
    #[command(about = "Extract solve-time statistics from MiniZinc/Gecode result logs")]
    pub struct CliConfig {
        /// Result file to read
        #[arg(value_name = "INPUT")]
        pub input: Option<String>,

        /// TOML configuration file; flags given here override it
        #[arg(short, long)]
        pub config: Option<String>,

        /// Statistic to extract from each record block
        #[arg(short, long, value_enum)]
        pub metric: Option<Metric>,

        /// Upper bound on lines read from the input
        #[arg(long)]
        pub max_lines: Option<usize>,

        /// Lines per record block
        #[arg(long)]
        pub record_size: Option<usize>,

        /// 0-based line offset of the statistic inside a block
        #[arg(long)]
        pub target_line: Option<usize>,

        /// 0-based whitespace token index on the statistic line
        #[arg(long)]
        pub target_token: Option<usize>,

        /// Character to split the token on
        #[arg(long, conflicts_with = "whole_token")]
        pub delimiter: Option<char>,

        /// Keep the whole token instead of splitting it
        #[arg(long)]
        pub whole_token: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        pub format: Option<OutputFormat>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        pub output: Option<String>,

        /// Show the resolved settings without reading the input
        #[arg(long)]
        pub dry_run: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        fn delimiter_override(&self) -> Option<Option<char>> {
            if self.whole_token {
                Some(None)
            } else {
                self.delimiter.map(Some)
            }
        }

        /// Copies every flag that was given onto a file-based config.
        pub fn apply_to(&self, config: &mut TomlConfig) {
            if let Some(input) = &self.input {
                config.source.path = Some(input.clone());
            }
            if let Some(max_lines) = self.max_lines {
                config.source.max_lines = Some(max_lines);
            }
            if let Some(metric) = self.metric {
                config.layout.metric = Some(metric);
            }
            if let Some(record_size) = self.record_size {
                config.layout.record_size = Some(record_size);
            }
            if let Some(target_line) = self.target_line {
                config.layout.target_line = Some(target_line);
            }
            if let Some(target_token) = self.target_token {
                config.layout.target_token = Some(target_token);
            }
            if let Some(delimiter) = self.delimiter_override() {
                config.layout.delimiter = Some(delimiter.map(String::from).unwrap_or_default());
            }
            if let Some(format) = self.format {
                config.output.format = Some(format);
            }
            if let Some(output) = &self.output {
                config.output.path = Some(output.clone());
            }
        }
    }

    impl ConfigProvider for CliConfig {
        fn input_path(&self) -> &str {
            self.input.as_deref().unwrap_or(DEFAULT_INPUT_PATH)
        }

        fn max_lines(&self) -> usize {
            self.max_lines.unwrap_or(DEFAULT_MAX_LINES)
        }

        fn layout(&self) -> RecordLayout {
            resolve_layout(
                self.metric.unwrap_or_default(),
                self.record_size,
                self.target_line,
                self.target_token,
                self.delimiter_override(),
            )
        }

        fn metric_label(&self) -> String {
            metric_label(self.metric.unwrap_or_default(), &self.layout())
        }

        fn output_format(&self) -> OutputFormat {
            self.format.unwrap_or_default()
        }

        fn output_path(&self) -> Option<&str> {
            self.output.as_deref()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("input", self.input_path())?;
            validate_positive_number("max_lines", self.max_lines(), 1)?;
            if let Some(output) = &self.output {
                validate_path("output", output)?;
            }
            self.layout().validate()
        }
    }

}
