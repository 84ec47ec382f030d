//! Source factory: picks a loader from configuration.

use std::path::Path;
use std::str::FromStr;

use super::config::DashboardConfig;
use super::loader::{load_dataset, CsvSource, DatasetSource, JsonSource};
use super::view::DatasetView;
use crate::error::{DashboardError, DashboardResult, ErrorContext};

/// On-disk format of the launch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Json,
    /// Decide from the file extension
    Auto,
}

impl FromStr for SourceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "auto" | "" => Ok(Self::Auto),
            _ => Err(format!("Unknown data format: {}", s)),
        }
    }
}

impl SourceFormat {
    /// Resolve `Auto` against a path; concrete formats pass through.
    pub fn resolve(self, path: &Path) -> DashboardResult<Self> {
        if self != Self::Auto {
            return Ok(self);
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(DashboardError::configuration_with_context(
                "Cannot infer data format from file extension; set data.format",
                ErrorContext::new("resolve_format").with_details(path.display().to_string()),
            )),
        }
    }
}

/// Factory for dataset sources.
pub struct DatasetFactory;

impl DatasetFactory {
    /// Create a source for `path` in the given format.
    pub fn create_source(
        format: SourceFormat,
        path: &Path,
    ) -> DashboardResult<Box<dyn DatasetSource>> {
        match format.resolve(path)? {
            SourceFormat::Csv => Ok(Box::new(CsvSource::new(path))),
            SourceFormat::Json => Ok(Box::new(JsonSource::new(path))),
            SourceFormat::Auto => Err(DashboardError::configuration(
                "Data format could not be resolved",
            )),
        }
    }

    /// Load the configured dataset.
    pub fn from_config(config: &DashboardConfig) -> DashboardResult<DatasetView> {
        let path = config.data_path();
        let source = Self::create_source(config.source_format()?, &path)?;
        load_dataset(source.as_ref())
    }
}
