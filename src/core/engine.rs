use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ExtractionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ExtractionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// extract → transform → load; the first error stops the run.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting extraction");

        let extraction = self.pipeline.extract()?;
        tracing::info!(
            "Read {} line(s) from {}, extracted {} value(s)",
            extraction.lines_read,
            extraction.source,
            extraction.values.len()
        );

        let report = self.pipeline.transform(extraction)?;
        if let Some(summary) = &report.summary {
            tracing::info!(
                "{}: n={} min={} max={} mean={:.3}",
                report.metric,
                summary.count,
                summary.min,
                summary.max,
                summary.mean
            );
        }

        let destination = self.pipeline.load(report)?;
        tracing::info!("Output written to: {}", destination);

        Ok(destination)
    }
}
