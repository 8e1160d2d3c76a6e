pub mod json_export;

use anyhow::Result;
use std::path::PathBuf;

use crate::core::model::CorpusSample;

pub use json_export::JsonExporter;

pub trait Exporter {
    /// Write `sample` under `key`, returning the artifact path.
    fn export(&self, key: &str, sample: &CorpusSample) -> Result<PathBuf>;
}
