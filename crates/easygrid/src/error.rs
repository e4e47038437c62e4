//! Error types for column construction and table loading.

use thiserror::Error;

/// A column or table configuration was rejected at construction time.
///
/// These are raised by [`ColumnDef::build`](crate::ColumnDef::build) and never
/// deferred to compile or render time: a column that fails validation is
/// never produced at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A status column was declared without any states.
    #[error("status column '{column}' requires a non-empty states list")]
    EmptyStates { column: String },

    /// Two states in the same status column share an id.
    #[error("status column '{column}' has duplicate state id {id}")]
    DuplicateStateId { column: String, id: i64 },

    /// A state has an empty label.
    #[error("status column '{column}': state {id} has an empty label")]
    EmptyStateLabel { column: String, id: i64 },

    /// A state has an empty color.
    #[error("status column '{column}': state {id} has an empty color")]
    EmptyStateColor { column: String, id: i64 },

    /// A color is malformed hex or contains characters that would break
    /// out of generated CSS or script.
    #[error("column '{column}': invalid color '{value}'")]
    InvalidColor { column: String, value: String },

    /// A numeric bound is not finite or not strictly positive.
    #[error("column '{column}': {name} must be a positive number, got {value}")]
    InvalidBound {
        column: String,
        name: &'static str,
        value: f64,
    },

    /// An icon name is not in the catalog.
    #[error("column '{column}': unknown icon '{icon}'")]
    UnknownIcon { column: String, icon: String },

    /// A generated script template failed to render.
    #[error("script template error: {0}")]
    Template(String),
}

impl From<minijinja::Error> for ConfigError {
    fn from(err: minijinja::Error) -> Self {
        ConfigError::Template(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Template(err.to_string())
    }
}

/// Top-level error for loading configs and datasets.
#[derive(Debug, Error)]
pub enum GridError {
    /// A column definition failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// YAML parse error.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parse error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parse error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error (e.g., reading a config file from disk).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unsupported input format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for easygrid loading operations.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display_names_column() {
        let err = ConfigError::DuplicateStateId {
            column: "state".to_string(),
            id: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("state"));
        assert!(msg.contains("duplicate"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn grid_error_wraps_config_error() {
        let err: GridError = ConfigError::EmptyStates {
            column: "state".to_string(),
        }
        .into();
        assert!(matches!(err, GridError::InvalidConfig(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GridError = io_err.into();
        assert!(matches!(err, GridError::Io(_)));
    }
}
