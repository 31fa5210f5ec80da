use crate::domain::model::{Extraction, Report, Summary};

impl Report {
    /// Raw values are carried over untouched; only the summary looks at them
    /// as numbers.
    pub fn from_extraction(extraction: Extraction, metric: impl Into<String>) -> Self {
        let (summary, non_numeric) = summarize(&extraction.values);
        if non_numeric > 0 {
            tracing::warn!(
                "{} value(s) from {} are not numeric and were left out of the summary",
                non_numeric,
                extraction.source
            );
        }

        Self {
            source: extraction.source,
            metric: metric.into(),
            values: extraction.values,
            summary,
            non_numeric,
        }
    }
}

/// Returns the summary over parseable values and how many were skipped.
pub fn summarize(values: &[String]) -> (Option<Summary>, usize) {
    let numbers: Vec<f64> = values
        .iter()
        .filter_map(|v| v.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .collect();
    let skipped = values.len() - numbers.len();

    if numbers.is_empty() {
        return (None, skipped);
    }

    let total: f64 = numbers.iter().sum();
    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let summary = Summary {
        count: numbers.len(),
        min,
        max,
        mean: total / numbers.len() as f64,
        total,
    };
    (Some(summary), skipped)
}
