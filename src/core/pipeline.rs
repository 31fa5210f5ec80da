use crate::core::extractor::LogExtractor;
use crate::core::render::render;
use crate::core::{ConfigProvider, Extraction, Pipeline, Report, Storage};
use crate::utils::error::Result;
use std::io::Write;

pub struct LogPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> LogPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn extractor(&self) -> LogExtractor {
        LogExtractor::new(self.config.layout(), self.config.max_lines())
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for LogPipeline<S, C> {
    fn extract(&self) -> Result<Extraction> {
        let layout = self.config.layout();
        tracing::debug!(
            "Reading {} (max {} lines, record size {}, line offset {}, token {}, delimiter {:?})",
            self.config.input_path(),
            self.config.max_lines(),
            layout.record_size,
            layout.target_line,
            layout.target_token,
            layout.delimiter
        );

        self.extractor().extract_file(self.config.input_path())
    }

    fn transform(&self, extraction: Extraction) -> Result<Report> {
        Ok(Report::from_extraction(
            extraction,
            self.config.metric_label(),
        ))
    }

    fn load(&self, report: Report) -> Result<String> {
        let rendered = render(&report, self.config.output_format())?;

        match self.config.output_path() {
            Some(path) => {
                self.storage.write_file(path, rendered.as_bytes())?;
                Ok(path.to_string())
            }
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(rendered.as_bytes())?;
                handle.flush()?;
                Ok("stdout".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{OutputFormat, RecordLayout};
    use std::cell::RefCell;
    use tempfile::NamedTempFile;

    #[derive(Default)]
    struct MemoryStorage {
        files: RefCell<Vec<(String, Vec<u8>)>>,
    }

    impl Storage for &MemoryStorage {
        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .push((path.to_string(), data.to_vec()));
            Ok(())
        }
    }

    struct TestConfig {
        input: String,
        format: OutputFormat,
    }

    impl ConfigProvider for TestConfig {
        fn input_path(&self) -> &str {
            &self.input
        }

        fn max_lines(&self) -> usize {
            240
        }

        fn layout(&self) -> RecordLayout {
            RecordLayout::default()
        }

        fn metric_label(&self) -> String {
            "solvetime".to_string()
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }

        fn output_path(&self) -> Option<&str> {
            Some("report.out")
        }
    }

    #[test]
    fn test_pipeline_stages() {
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "a\nb\nc\nsolve 10 ok time(42.0\n").unwrap();

        let storage = MemoryStorage::default();
        let config = TestConfig {
            input: input.path().to_str().unwrap().to_string(),
            format: OutputFormat::Lines,
        };
        let pipeline = LogPipeline::new(&storage, config);

        let extraction = pipeline.extract().unwrap();
        assert_eq!(extraction.values, vec!["42.0"]);

        let report = pipeline.transform(extraction).unwrap();
        assert_eq!(report.metric, "solvetime");
        assert_eq!(report.summary.as_ref().unwrap().total, 42.0);

        let destination = pipeline.load(report).unwrap();
        assert_eq!(destination, "report.out");

        let files = storage.files.borrow();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].1, b"42.0\n");
    }
}
