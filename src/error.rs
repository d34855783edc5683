//! Custom error types for commerce-insights
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for commerce-insights operations
#[derive(Error, Debug)]
pub enum InsightsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV reader/writer errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// A required input column is absent from the header
    #[error("Missing required column: {column}")]
    MissingColumn { column: &'static str },

    /// A field could not be parsed into its expected type
    #[error("Row {row}, column '{column}': invalid value '{value}' ({reason})")]
    InvalidField {
        row: usize,
        column: &'static str,
        value: String,
        reason: String,
    },

    /// Validation errors for user input and configuration
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl InsightsError {
    /// Create an "invalid field" error for a data row
    pub fn invalid_field(
        row: usize,
        column: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            row,
            column,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is an input-schema error (missing column or bad field)
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::MissingColumn { .. } | Self::InvalidField { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for InsightsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for InsightsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for InsightsError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for InsightsError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for commerce-insights operations
pub type InsightsResult<T> = Result<T, InsightsError>;
