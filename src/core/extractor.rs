use crate::domain::model::{Extraction, RecordLayout, DEFAULT_MAX_LINES};
use crate::utils::error::{Result, StatError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Single-pass reader that pulls one statistic out of every record block.
#[derive(Debug, Clone)]
pub struct LogExtractor {
    layout: RecordLayout,
    max_lines: usize,
}

impl LogExtractor {
    pub fn new(layout: RecordLayout, max_lines: usize) -> Self {
        Self { layout, max_lines }
    }

    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<Extraction> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let file = File::open(path).map_err(|e| StatError::InputError {
            path: source.clone(),
            source: e,
        })?;

        self.extract_from_reader(source, BufReader::new(file))
    }

    /// Reads at most `max_lines` lines, stopping early at end of input.
    /// The first malformed target line aborts the pass.
    ///
    /// Lines are read as raw bytes; only selected lines are decoded, lossily,
    /// so stray non-UTF-8 bytes elsewhere in the log never stop the run.
    pub fn extract_from_reader<R: BufRead>(
        &self,
        source: impl Into<String>,
        mut reader: R,
    ) -> Result<Extraction> {
        let source = source.into();
        let mut values = Vec::new();
        let mut lines_read = 0;
        let mut buf = Vec::new();

        while lines_read < self.max_lines {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let index = lines_read;
            lines_read += 1;

            if !self.layout.selects(index) {
                continue;
            }

            let line = String::from_utf8_lossy(trim_line_ending(&buf));
            let value = extract_value(&self.layout, index + 1, &line)?;
            tracing::debug!("line {}: extracted '{}'", index + 1, value);
            values.push(value);
        }

        tracing::debug!(
            "Read {} line(s) from {}, {} value(s) extracted",
            lines_read,
            source,
            values.len()
        );

        Ok(Extraction {
            source,
            values,
            lines_read,
        })
    }
}

impl Default for LogExtractor {
    fn default() -> Self {
        Self::new(RecordLayout::default(), DEFAULT_MAX_LINES)
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Pulls the configured token out of one line. `line_number` is 1-based and
/// only used for error reporting.
///
/// The piece between the first and second delimiter is kept as-is, so
/// `time(42.0)` gives `42.0)`.
pub fn extract_value(layout: &RecordLayout, line_number: usize, line: &str) -> Result<String> {
    let mut tokens = line.split_whitespace();
    let token = match tokens.nth(layout.target_token) {
        Some(token) => token,
        None => {
            return Err(StatError::MissingToken {
                line: line_number,
                index: layout.target_token,
                found: line.split_whitespace().count(),
                text: line.trim_end().to_string(),
            })
        }
    };

    let Some(delimiter) = layout.delimiter else {
        return Ok(token.to_string());
    };

    token
        .split(delimiter)
        .nth(1)
        .map(str::to_string)
        .ok_or_else(|| StatError::MissingDelimiter {
            line: line_number,
            token: token.to_string(),
            delimiter,
        })
}
