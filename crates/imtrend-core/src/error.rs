//! Error types for imtrend-core
//!
//! Only startup can fail: loading the dataset or reading configuration.
//! Filtering, aggregation, and presentation are total functions; an empty
//! selection yields the "no data" payload rather than an error.

use imtrend_io::LoadError;
use thiserror::Error;

/// Main error type for imtrend operations
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// Dataset could not be loaded
    #[error("Failed to load dataset: {0}")]
    Load(#[from] LoadError),

    /// Configuration could not be read or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML or JSON could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// A value failed validation
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for explorer operations
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_wraps() {
        let err: ExplorerError = LoadError::MissingColumn("Ano".to_string()).into();
        assert!(err.to_string().contains("Ano"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue("server.addr is empty".to_string());
        assert!(err.to_string().contains("server.addr"));
    }
}
