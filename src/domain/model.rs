use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_INPUT_PATH: &str = "q2_mzn_med_result";
pub const DEFAULT_MAX_LINES: usize = 240;
pub const DEFAULT_RECORD_SIZE: usize = 12;
pub const DEFAULT_TARGET_TOKEN: usize = 3;
pub const DEFAULT_DELIMITER: char = '(';

/// Where the wanted value sits inside one fixed-size record block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordLayout {
    /// Lines per record block.
    pub record_size: usize,
    /// 0-based line offset of the statistic inside a block.
    pub target_line: usize,
    /// 0-based whitespace token index on that line.
    pub target_token: usize,
    /// Split character; the piece after the first occurrence is kept.
    /// `None` keeps the whole token.
    pub delimiter: Option<char>,
}

impl RecordLayout {
    pub fn for_metric(metric: Metric) -> Self {
        Self {
            record_size: DEFAULT_RECORD_SIZE,
            target_line: metric.line_offset(),
            target_token: metric.token_index(),
            delimiter: metric.delimiter(),
        }
    }

    /// Whether 0-based line `index` is the target line of some block.
    /// A zero record size selects nothing.
    pub fn selects(&self, index: usize) -> bool {
        match (
            index.checked_rem(self.record_size),
            self.target_line.checked_rem(self.record_size),
        ) {
            (Some(offset), Some(target)) => offset == target,
            _ => false,
        }
    }
}

impl Default for RecordLayout {
    fn default() -> Self {
        Self::for_metric(Metric::default())
    }
}

/// Statistics lines of a Gecode record block.
///
/// A block is the solution output, a separator, then one line per statistic
/// in declaration order. The timing lines read `%%  runtime:  <secs> (<ms> ms)`,
/// so token 3 split on `(` yields the millisecond figure; the counters read
/// `%%  nodes:  17` and are taken whole (`peak depth:` is two tokens wide).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Metric {
    Runtime,
    #[default]
    Solvetime,
    Solutions,
    Variables,
    Propagators,
    Propagations,
    Nodes,
    Failures,
    Restarts,
    PeakDepth,
}

impl Metric {
    pub const ALL: [Metric; 10] = [
        Metric::Runtime,
        Metric::Solvetime,
        Metric::Solutions,
        Metric::Variables,
        Metric::Propagators,
        Metric::Propagations,
        Metric::Nodes,
        Metric::Failures,
        Metric::Restarts,
        Metric::PeakDepth,
    ];

    pub fn line_offset(self) -> usize {
        match self {
            Metric::Runtime => 2,
            Metric::Solvetime => 3,
            Metric::Solutions => 4,
            Metric::Variables => 5,
            Metric::Propagators => 6,
            Metric::Propagations => 7,
            Metric::Nodes => 8,
            Metric::Failures => 9,
            Metric::Restarts => 10,
            Metric::PeakDepth => 11,
        }
    }

    pub fn token_index(self) -> usize {
        match self {
            Metric::Runtime | Metric::Solvetime | Metric::PeakDepth => DEFAULT_TARGET_TOKEN,
            _ => 2,
        }
    }

    pub fn delimiter(self) -> Option<char> {
        match self {
            Metric::Runtime | Metric::Solvetime => Some(DEFAULT_DELIMITER),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Runtime => "runtime",
            Metric::Solvetime => "solvetime",
            Metric::Solutions => "solutions",
            Metric::Variables => "variables",
            Metric::Propagators => "propagators",
            Metric::Propagations => "propagations",
            Metric::Nodes => "nodes",
            Metric::Failures => "failures",
            Metric::Restarts => "restarts",
            Metric::PeakDepth => "peak_depth",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase().replace('-', "_");
        Metric::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| format!("unknown metric '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// `['a', 'b']`
    #[default]
    List,
    /// One value per line.
    Lines,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::List => "list",
            OutputFormat::Lines => "lines",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "list" => Ok(OutputFormat::List),
            "lines" => Ok(OutputFormat::Lines),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// The accumulator for one read pass, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub source: String,
    pub values: Vec<String>,
    pub lines_read: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub source: String,
    pub metric: String,
    pub values: Vec<String>,
    pub summary: Option<Summary>,
    /// Values that did not parse as numbers and were left out of the summary.
    #[serde(skip_serializing_if = "is_zero")]
    pub non_numeric: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}
