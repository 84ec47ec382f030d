//! Error types for dataset loading and query evaluation.
//!
//! Three groups of failures exist:
//!
//! - load failures (`EmptyDataset`, `LoadError`, `ValidationError`): fatal at startup,
//!   the process cannot serve meaningful views;
//! - contract violations (`UnknownSite`, `InvalidRange`): the UI handed the engine a
//!   selector state its widgets should never produce;
//! - configuration failures.
//!
//! Degenerate results (no matching rows, a site without launches) are not errors.

use std::fmt;

/// Result type for engine operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Structured context for load and configuration errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "read_launch_csv")
    pub operation: Option<String>,
    /// The entity involved (e.g., "column", "record")
    pub entity: Option<String>,
    /// Zero-based source row, when the failure is tied to one
    pub row: Option<usize>,
    /// Additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Start a context for the named operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Name the column or record involved.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Pin the failure to a source row.
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    /// Attach free-form details, such as a path or parser position.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref entity) = self.entity {
            parts.push(format!("entity={}", entity));
        }
        if let Some(row) = self.row {
            parts.push(format!("row={}", row));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for the dashboard engine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    /// The source contained zero records; payload bounds are undefined.
    #[error("Dataset is empty {context}")]
    EmptyDataset { context: ErrorContext },

    /// Selector named a site that is neither ALL nor part of the loaded site set.
    #[error("Unknown launch site '{site}'")]
    UnknownSite { site: String },

    /// Payload range with `low > high` (or a NaN bound).
    #[error("Invalid payload range [{low}, {high}]: low bound must not exceed high bound")]
    InvalidRange { low: f64, high: f64 },

    /// The source could not be read or decoded.
    #[error("Load error: {message} {context}")]
    LoadError {
        message: String,
        context: ErrorContext,
    },

    /// A record or column does not conform to the launch schema.
    #[error("Data validation error: {message} {context}")]
    ValidationError {
        message: String,
        context: ErrorContext,
    },

    /// Configuration could not be read, parsed or is inconsistent.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },
}

impl DashboardError {
    pub fn empty_dataset(source: impl Into<String>) -> Self {
        Self::EmptyDataset {
            context: ErrorContext::new("load_dataset").with_details(source),
        }
    }

    pub fn unknown_site(site: impl Into<String>) -> Self {
        Self::UnknownSite { site: site.into() }
    }

    pub fn invalid_range(low: f64, high: f64) -> Self {
        Self::InvalidRange { low, high }
    }

    pub fn load(message: impl Into<String>) -> Self {
        Self::LoadError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn load_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::LoadError {
            message: message.into(),
            context,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn validation_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ValidationError {
            message: message.into(),
            context,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn configuration_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context,
        }
    }

    /// True for errors caused by a selector state the UI should never have built.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::UnknownSite { .. } | Self::InvalidRange { .. })
    }

    /// True for errors raised while producing the dataset.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::EmptyDataset { .. } | Self::LoadError { .. } | Self::ValidationError { .. }
        )
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::EmptyDataset { context }
            | Self::LoadError { context, .. }
            | Self::ValidationError { context, .. }
            | Self::ConfigurationError { context, .. } => Some(context),
            Self::UnknownSite { .. } | Self::InvalidRange { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_context_display() {
        let ctx = ErrorContext::new("read_launch_csv")
            .with_entity("record")
            .with_row(7)
            .with_details("class=2");
        assert_eq!(
            ctx.to_string(),
            "[operation=read_launch_csv, entity=record, row=7, details=class=2]"
        );
    }

    #[test]
    fn test_error_context_display_empty() {
        assert_eq!(ErrorContext::default().to_string(), "[]");
    }

    #[test]
    fn test_contract_violations() {
        assert!(DashboardError::unknown_site("Nowhere").is_contract_violation());
        assert!(DashboardError::invalid_range(500.0, 100.0).is_contract_violation());
        assert!(!DashboardError::empty_dataset("launches.csv").is_contract_violation());
    }

    #[test]
    fn test_load_failures_carry_context() {
        let err = DashboardError::validation_with_context(
            "Missing 'Launch Site'",
            ErrorContext::new("read_launch_csv").with_row(3),
        );
        assert!(err.is_load_failure());
        assert_eq!(err.context().and_then(|c| c.row), Some(3));

        let err = DashboardError::unknown_site("X");
        assert!(err.context().is_none());
    }

    #[test]
    fn test_error_messages() {
        let err = DashboardError::unknown_site("Nonexistent");
        assert_eq!(err.to_string(), "Unknown launch site 'Nonexistent'");

        let err = DashboardError::invalid_range(500.0, 100.0);
        assert!(err.to_string().contains("[500, 100]"));

        let err = DashboardError::empty_dataset("launches.csv");
        assert!(err.to_string().starts_with("Dataset is empty"));
        assert!(err.to_string().contains("launches.csv"));
    }
}
