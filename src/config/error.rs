//! Configuration Error Types
//!
//! Errors raised while loading and validating the project metadata record.
//! Every error is a load-time failure: metadata that cannot be built
//! correctly is rejected rather than replaced with a fallback value.

use thiserror::Error;

/// Configuration-related errors with detailed context
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Start year is not a four digit number
    #[error("Invalid start year '{value}': {reason}")]
    InvalidYear { value: String, reason: String },

    /// Start year lies after the current calendar year
    #[error("Start year {start_year} is after the current year {current_year}")]
    YearInFuture { start_year: i32, current_year: i32 },

    /// Missing required configuration field
    #[error("Missing required configuration field '{field}' in {context}")]
    MissingRequiredField { field: String, context: String },

    /// Invalid configuration value
    #[error("Invalid value '{value}' for field '{field}': {context}")]
    InvalidValue {
        field: String,
        value: String,
        context: String,
    },

    /// Description template references a field that is not defined before it
    #[error("Unknown placeholder '{{{placeholder}}}' in field '{field}'")]
    UnknownPlaceholder { field: String, placeholder: String },

    /// Description template has a stray brace
    #[error("Unbalanced brace at byte {position} in field '{field}'")]
    UnbalancedTemplate { field: String, position: usize },

    /// File I/O errors during configuration loading
    #[error("Failed to read configuration file '{file_path}': {error}")]
    FileReadError { file_path: String, error: String },

    /// Errors surfaced by the layered configuration builder
    #[error("Configuration source error: {error}")]
    ConfigSourceError { error: String },

    /// JSON serialization/deserialization errors
    #[error("JSON serialization error in {context}: {error}")]
    JsonSerializationError { context: String, error: String },
}

impl ConfigurationError {
    /// Create an invalid year error
    pub fn invalid_year<V: Into<String>, R: Into<String>>(value: V, reason: R) -> Self {
        Self::InvalidYear {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a year-in-future error
    pub fn year_in_future(start_year: i32, current_year: i32) -> Self {
        Self::YearInFuture {
            start_year,
            current_year,
        }
    }

    /// Create a missing required field error
    pub fn missing_required_field<F: Into<String>, C: Into<String>>(field: F, context: C) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
            context: context.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value<F: Into<String>, V: Into<String>, C: Into<String>>(
        field: F,
        value: V,
        context: C,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            context: context.into(),
        }
    }

    pub fn unknown_placeholder<F: Into<String>, P: Into<String>>(field: F, placeholder: P) -> Self {
        Self::UnknownPlaceholder {
            field: field.into(),
            placeholder: placeholder.into(),
        }
    }

    pub fn unbalanced_template<F: Into<String>>(field: F, position: usize) -> Self {
        Self::UnbalancedTemplate {
            field: field.into(),
            position,
        }
    }

    /// Create a file read error
    pub fn file_read_error<P: Into<String>, E: std::fmt::Display>(file_path: P, error: E) -> Self {
        Self::FileReadError {
            file_path: file_path.into(),
            error: error.to_string(),
        }
    }

    /// Create a JSON serialization error
    pub fn json_serialization_error<C: Into<String>, E: std::fmt::Display>(
        context: C,
        error: E,
    ) -> Self {
        Self::JsonSerializationError {
            context: context.into(),
            error: error.to_string(),
        }
    }
}

impl From<::config::ConfigError> for ConfigurationError {
    fn from(error: ::config::ConfigError) -> Self {
        Self::ConfigSourceError {
            error: error.to_string(),
        }
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigurationError>;
