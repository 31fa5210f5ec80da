pub mod engine;
pub mod extractor;
pub mod pipeline;
pub mod render;
pub mod report;

pub use crate::domain::model::{Extraction, Report};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
