//! Dashboard configuration file support.
//!
//! Reads `dashboard.toml`:
//!
//! ```toml
//! [data]
//! path = "spacex_launch_dash.csv"
//! format = "auto"   # csv | json | auto
//!
//! [slider]
//! min = 0.0
//! max = 10000.0
//! step = 1000.0
//!
//! [view]
//! marker_size = 12
//! title = "SpaceX Launch Records Dashboard"
//! ```
//!
//! Every key is optional. `LAUNCH_DASH_DATA` overrides `data.path`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::factory::SourceFormat;
use crate::error::{DashboardError, DashboardResult, ErrorContext};

/// Environment variable overriding the data file location.
pub const DATA_PATH_ENV: &str = "LAUNCH_DASH_DATA";

/// Dashboard configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub slider: SliderSettings,
    #[serde(default)]
    pub view: ViewSettings,
}

/// Data source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    #[serde(default = "default_format")]
    pub format: String,
}

/// Payload range slider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSettings {
    #[serde(default = "default_slider_min")]
    pub min: f64,
    #[serde(default = "default_slider_max")]
    pub max: f64,
    #[serde(default = "default_slider_step")]
    pub step: f64,
}

/// Chart presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    #[serde(default = "default_marker_size")]
    pub marker_size: u32,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("spacex_launch_dash.csv")
}

fn default_format() -> String {
    "auto".to_string()
}

fn default_slider_min() -> f64 {
    0.0
}

fn default_slider_max() -> f64 {
    10_000.0
}

fn default_slider_step() -> f64 {
    1_000.0
}

fn default_marker_size() -> u32 {
    12
}

fn default_title() -> String {
    "SpaceX Launch Records Dashboard".to_string()
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            format: default_format(),
        }
    }
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            min: default_slider_min(),
            max: default_slider_max(),
            step: default_slider_step(),
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            marker_size: default_marker_size(),
            title: default_title(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let context = || {
            ErrorContext::new("load_config").with_details(path.as_ref().display().to_string())
        };

        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            DashboardError::configuration_with_context(
                format!("Failed to read config file: {}", e),
                context(),
            )
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            DashboardError::ConfigurationError { message, .. } => {
                DashboardError::configuration_with_context(message, context())
            }
            other => other,
        })
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> DashboardResult<Self> {
        let config: DashboardConfig = toml::from_str(content).map_err(|e| {
            DashboardError::configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> DashboardResult<Self> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(DashboardError::configuration(
            "No dashboard.toml found in standard locations",
        ))
    }

    /// Check slider settings for consistency.
    pub fn validate(&self) -> DashboardResult<()> {
        let slider = &self.slider;
        for (name, value) in [("min", slider.min), ("max", slider.max), ("step", slider.step)] {
            if !value.is_finite() {
                return Err(DashboardError::configuration_with_context(
                    format!("slider.{} must be finite, got {}", name, value),
                    ErrorContext::new("validate_config").with_entity("slider"),
                ));
            }
        }
        if !(slider.min <= slider.max) {
            return Err(DashboardError::configuration_with_context(
                format!("slider.min ({}) exceeds slider.max ({})", slider.min, slider.max),
                ErrorContext::new("validate_config").with_entity("slider"),
            ));
        }
        if !(slider.step > 0.0) {
            return Err(DashboardError::configuration_with_context(
                format!("slider.step must be positive, got {}", slider.step),
                ErrorContext::new("validate_config").with_entity("slider"),
            ));
        }
        self.source_format().map(|_| ())
    }

    /// Data file location, honouring `LAUNCH_DASH_DATA`.
    pub fn data_path(&self) -> PathBuf {
        std::env::var_os(DATA_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| self.data.path.clone())
    }

    pub fn source_format(&self) -> DashboardResult<SourceFormat> {
        self.data.format.parse().map_err(|e: String| {
            DashboardError::configuration_with_context(
                e,
                ErrorContext::new("validate_config").with_entity("data.format"),
            )
        })
    }
}
