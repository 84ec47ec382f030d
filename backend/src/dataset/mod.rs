//! Launch dataset: loading, validation and the process-wide handle.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  DashboardConfig (TOML)      │
//! └──────────────┬───────────────┘
//!                │ DatasetFactory
//! ┌──────────────▼───────────────┐
//! │  DatasetSource               │  CSV (polars) / JSON / in-memory
//! └──────────────┬───────────────┘
//!                │ load_dataset
//! ┌──────────────▼───────────────┐
//! │  DatasetView                 │  records, site set, payload bounds
//! └──────────────┬───────────────┘
//!                │ Arc, shared read-only
//!                ▼
//!        services::QueryCoordinator
//! ```
//!
//! The dataset is loaded once and never mutated. [`init_dataset`] stores it in a
//! process-wide slot; [`get_dataset`] hands out shared read handles.

pub mod config;
pub mod factory;
pub mod loader;
pub mod view;

pub use config::{DashboardConfig, DataSettings, SliderSettings, ViewSettings, DATA_PATH_ENV};
pub use factory::{DatasetFactory, SourceFormat};
pub use loader::{
    load_dataset, parse_launch_json, read_launch_csv, CsvSource, DatasetSource, InMemorySource,
    JsonSource,
};
pub use view::{DatasetView, PayloadBounds};

use anyhow::{Context, Result};
use log::info;
use std::sync::{Arc, OnceLock};

/// Global dataset instance initialized once per process.
static DATASET: OnceLock<Arc<DatasetView>> = OnceLock::new();

/// Load the configured dataset into the process-wide slot.
///
/// A second call is a no-op: the first loaded dataset stays for the process
/// lifetime.
pub fn init_dataset(config: &DashboardConfig) -> Result<()> {
    if DATASET.get().is_some() {
        return Ok(());
    }

    let view = DatasetFactory::from_config(config).with_context(|| {
        format!(
            "Failed to load launch dataset from {}",
            config.data_path().display()
        )
    })?;
    install_dataset(view);
    Ok(())
}

/// Install an already-built dataset into the process-wide slot.
///
/// Returns false when a dataset was installed earlier; the earlier one is kept.
pub fn install_dataset(view: DatasetView) -> bool {
    let installed = DATASET.set(Arc::new(view)).is_ok();
    if installed {
        info!("Launch dataset installed");
    }
    installed
}

/// Shared handle to the process-wide dataset.
pub fn get_dataset() -> Result<Arc<DatasetView>> {
    DATASET
        .get()
        .cloned()
        .context("Dataset not initialized. Call init_dataset() first.")
}
