pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{engine::ExtractionEngine, extractor::LogExtractor, pipeline::LogPipeline};
pub use domain::model::{Extraction, Metric, OutputFormat, RecordLayout, Report, Summary};
pub use utils::error::{Result, StatError};
