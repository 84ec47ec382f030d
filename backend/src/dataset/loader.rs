//! Launch table loaders.
//!
//! The canonical source is the launch CSV (`spacex_launch_dash.csv`). A JSON
//! array of records and an in-memory source are supported for hosts that fetch
//! the table elsewhere. Every loader hands its rows to [`DatasetView::new`], so
//! the empty-dataset and payload checks apply regardless of origin.

use log::debug;
use polars::prelude::{Column, CsvReadOptions, DataFrame, DataType, PolarsError, SerReader};
use std::fs;
use std::path::{Path, PathBuf};

use super::view::DatasetView;
use crate::error::{DashboardError, DashboardResult, ErrorContext};
use crate::models::{LaunchRecord, Outcome};

pub const COL_FLIGHT_NUMBER: &str = "Flight Number";
pub const COL_SITE: &str = "Launch Site";
pub const COL_CLASS: &str = "class";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";

/// Anything that can produce launch records.
pub trait DatasetSource {
    /// Short description used in logs and error context.
    fn describe(&self) -> String;

    fn load_records(&self) -> DashboardResult<Vec<LaunchRecord>>;
}

/// Load and validate a dataset from `source`.
pub fn load_dataset(source: &dyn DatasetSource) -> DashboardResult<DatasetView> {
    debug!("Loading launch records from {}", source.describe());
    let records = source.load_records()?;
    if records.is_empty() {
        return Err(DashboardError::empty_dataset(source.describe()));
    }
    DatasetView::new(records)
}

/// Launch CSV on disk.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for CsvSource {
    fn describe(&self) -> String {
        format!("CSV file {}", self.path.display())
    }

    fn load_records(&self) -> DashboardResult<Vec<LaunchRecord>> {
        read_launch_csv(&self.path)
    }
}

/// JSON array of records on disk.
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for JsonSource {
    fn describe(&self) -> String {
        format!("JSON file {}", self.path.display())
    }

    fn load_records(&self) -> DashboardResult<Vec<LaunchRecord>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            DashboardError::load_with_context(
                format!("Failed to read JSON file: {}", e),
                ErrorContext::new("read_launch_json").with_details(self.path.display().to_string()),
            )
        })?;
        parse_launch_json(&content)
    }
}

/// Records already in memory, e.g. handed over by a host-side loader.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<LaunchRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        Self { records }
    }
}

impl DatasetSource for InMemorySource {
    fn describe(&self) -> String {
        format!("{} in-memory records", self.records.len())
    }

    fn load_records(&self) -> DashboardResult<Vec<LaunchRecord>> {
        Ok(self.records.clone())
    }
}

/// Parse a JSON array of launch records.
pub fn parse_launch_json(json: &str) -> DashboardResult<Vec<LaunchRecord>> {
    serde_json::from_str(json).map_err(|e| {
        DashboardError::load_with_context(
            format!("Failed to parse JSON: {}", e),
            ErrorContext::new("parse_launch_json")
                .with_details(format!("line {} column {}", e.line(), e.column())),
        )
    })
}

/// Read the launch CSV into records.
///
/// Column types are inferred over the whole file, so a decimal payload deep in
/// an otherwise integral column still reads as a float.
pub fn read_launch_csv(path: &Path) -> DashboardResult<Vec<LaunchRecord>> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| {
            DashboardError::load_with_context(
                format!("Failed to parse CSV: {}", e),
                ErrorContext::new("read_launch_csv").with_details(path.display().to_string()),
            )
        })?;

    dataframe_to_records(&df)
}

/// Convert a launch DataFrame to records.
///
/// Required columns: `Launch Site`, `Payload Mass (kg)`, `class`, `Booster Version`.
/// `Flight Number` and `Booster Version Category` are picked up when present.
/// Other columns are ignored.
pub fn dataframe_to_records(df: &DataFrame) -> DashboardResult<Vec<LaunchRecord>> {
    let site_col = required_column(df, COL_SITE, &DataType::String)?;
    let payload_col = required_column(df, COL_PAYLOAD_MASS, &DataType::Float64)?;
    let class_col = required_column(df, COL_CLASS, &DataType::Int64)?;
    let booster_col = required_column(df, COL_BOOSTER_VERSION, &DataType::String)?;
    let flight_col = optional_column(df, COL_FLIGHT_NUMBER, &DataType::Int64)?;
    let category_col = optional_column(df, COL_BOOSTER_CATEGORY, &DataType::String)?;

    let sites = site_col.str().map_err(column_error(COL_SITE))?;
    let payloads = payload_col.f64().map_err(column_error(COL_PAYLOAD_MASS))?;
    let classes = class_col.i64().map_err(column_error(COL_CLASS))?;
    let boosters = booster_col.str().map_err(column_error(COL_BOOSTER_VERSION))?;
    let flights = flight_col
        .as_ref()
        .map(|c| c.i64())
        .transpose()
        .map_err(column_error(COL_FLIGHT_NUMBER))?;
    let categories = category_col
        .as_ref()
        .map(|c| c.str())
        .transpose()
        .map_err(column_error(COL_BOOSTER_CATEGORY))?;

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let site = sites.get(row).ok_or_else(|| missing_value(COL_SITE, row))?;
        let payload = payloads
            .get(row)
            .ok_or_else(|| missing_value(COL_PAYLOAD_MASS, row))?;
        let class = classes.get(row).ok_or_else(|| missing_value(COL_CLASS, row))?;
        let booster = boosters
            .get(row)
            .ok_or_else(|| missing_value(COL_BOOSTER_VERSION, row))?;

        let outcome = Outcome::from_class(class).ok_or_else(|| {
            DashboardError::validation_with_context(
                format!("Unknown outcome class {} (expected 0 or 1)", class),
                row_context(row).with_entity(COL_CLASS),
            )
        })?;

        let mut record = LaunchRecord::new(site, payload, booster, outcome);

        if let Some(number) = flights.and_then(|c| c.get(row)) {
            let number = u32::try_from(number).map_err(|_| {
                DashboardError::validation_with_context(
                    format!("Flight number {} out of range", number),
                    row_context(row).with_entity(COL_FLIGHT_NUMBER),
                )
            })?;
            record = record.with_flight_number(number);
        }
        if let Some(category) = categories.and_then(|c| c.get(row)) {
            record = record.with_booster_category(category);
        }

        records.push(record);
    }

    debug!("Decoded {} rows from launch table", records.len());
    Ok(records)
}

fn required_column(df: &DataFrame, name: &str, dtype: &DataType) -> DashboardResult<Column> {
    let column = df.column(name).map_err(|_| {
        DashboardError::validation_with_context(
            format!("Missing required column '{}'", name),
            ErrorContext::new("read_launch_csv").with_entity("column"),
        )
    })?;
    column.cast(dtype).map_err(column_error(name))
}

fn optional_column(
    df: &DataFrame,
    name: &str,
    dtype: &DataType,
) -> DashboardResult<Option<Column>> {
    match df.column(name) {
        Ok(column) => column.cast(dtype).map(Some).map_err(column_error(name)),
        Err(_) => Ok(None),
    }
}

fn column_error(name: &str) -> impl Fn(PolarsError) -> DashboardError + '_ {
    move |e| {
        DashboardError::validation_with_context(
            format!("Column '{}' has an unexpected type: {}", name, e),
            ErrorContext::new("read_launch_csv").with_entity("column"),
        )
    }
}

fn missing_value(column: &str, row: usize) -> DashboardError {
    DashboardError::validation_with_context(
        format!("Missing or malformed '{}' value", column),
        row_context(row).with_entity(column),
    )
}

fn row_context(row: usize) -> ErrorContext {
    ErrorContext::new("read_launch_csv").with_row(row)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
