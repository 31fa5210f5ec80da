use crate::domain::model::{Extraction, OutputFormat, RecordLayout, Report};
use crate::utils::error::Result;

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn max_lines(&self) -> usize;
    fn layout(&self) -> RecordLayout;
    /// Label carried into the report, e.g. `solvetime`.
    fn metric_label(&self) -> String;
    fn output_format(&self) -> OutputFormat;
    /// `None` means stdout.
    fn output_path(&self) -> Option<&str>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Extraction>;
    fn transform(&self, extraction: Extraction) -> Result<Report>;
    /// Returns a description of where the report went.
    fn load(&self, report: Report) -> Result<String>;
}
