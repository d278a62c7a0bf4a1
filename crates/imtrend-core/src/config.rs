//! Configuration for imtrend
//!
//! Centralized settings for the dataset source, chart labelling, and the
//! hosting server. Loadable from TOML or JSON; every section has defaults.

use crate::chart::ChartKind;
use crate::error::{ConfigError, ConfigResult};
use imtrend_io::{ColumnMapping, LoadOptions, RecordColumn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// System-wide configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImtrendConfig {
    /// Dataset source settings
    pub dataset: DatasetConfig,
    /// Chart titles and defaults
    pub chart: ChartConfig,
    /// Server settings
    pub server: ServerConfig,
}

/// Dataset source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the survey workbook or its CSV/TSV export
    pub path: Option<PathBuf>,
    /// Field delimiter; inferred from the extension when unset
    pub delimiter: Option<char>,
    /// Source column labels
    pub columns: ColumnMapping,
}

impl DatasetConfig {
    /// Loader options for this source
    pub fn load_options(&self) -> ConfigResult<LoadOptions> {
        let mut options = LoadOptions::default().with_columns(self.columns.clone());
        if let Some(delimiter) = self.delimiter {
            if !delimiter.is_ascii() {
                return Err(ConfigError::InvalidValue(format!(
                    "dataset.delimiter must be an ASCII character, got '{}'",
                    delimiter
                )));
            }
            options = options.with_delimiter(delimiter as u8);
        }
        Ok(options)
    }
}

/// Chart labelling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Kind used when a selection does not name one
    pub default_kind: ChartKind,
    /// Title of a chart with data
    pub title: String,
    /// Title of the "no data" placeholder
    pub empty_title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_kind: ChartKind::Line,
            title: "Número de publicações por ano".to_string(),
            empty_title: "Nenhum dado encontrado com os filtros atuais.".to_string(),
            x_label: "Ano".to_string(),
            y_label: "Nº de publicações".to_string(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8050".to_string(),
        }
    }
}

impl ImtrendConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> ConfigResult<Self> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load and validate a configuration file; `.json` files are read as
    /// JSON, anything else as TOML
    pub fn load_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_toml(&content)?
        };
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        let mut seen = HashSet::new();
        for column in RecordColumn::ALL {
            let label = self.dataset.columns.label(column).trim();
            if label.is_empty() {
                return Err(ConfigError::InvalidValue(format!(
                    "dataset.columns.{} must not be empty",
                    column
                )));
            }
            if !seen.insert(label) {
                return Err(ConfigError::InvalidValue(format!(
                    "dataset.columns.{} duplicates another column label: {}",
                    column, label
                )));
            }
        }

        self.dataset.load_options()?;

        if self.server.addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "server.addr must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ImtrendConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ImtrendConfig::from_toml(
            r#"
            [dataset]
            path = "Resultados Finais.csv"

            [dataset.columns]
            year = "Year"

            [chart]
            default_kind = "bar"
            "#,
        )
        .unwrap();

        assert_eq!(config.dataset.path, Some(PathBuf::from("Resultados Finais.csv")));
        assert_eq!(config.dataset.columns.year, "Year");
        assert_eq!(config.dataset.columns.repository, "Repositório");
        assert_eq!(config.chart.default_kind, ChartKind::Bar);
        assert_eq!(config.server.addr, "127.0.0.1:8050");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ImtrendConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = ImtrendConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.chart.title, config.chart.title);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = ImtrendConfig::default();
        config.dataset.path = Some(PathBuf::from("Resultados Finais.xlsx"));
        config.chart.default_kind = ChartKind::Bar;

        let parsed = ImtrendConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed.dataset.path, config.dataset.path);
        assert_eq!(parsed.chart.default_kind, ChartKind::Bar);
        assert_eq!(parsed.server.addr, config.server.addr);
    }

    #[test]
    fn test_json_config() {
        let config = ImtrendConfig::from_json(r#"{"server": {"addr": "0.0.0.0:9000"}}"#).unwrap();
        assert_eq!(config.server.addr, "0.0.0.0:9000");
    }

    #[test]
    fn test_validate_rejects_duplicate_labels() {
        let mut config = ImtrendConfig::default();
        config.dataset.columns.title = "Autor".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_validate_rejects_empty_label() {
        let mut config = ImtrendConfig::default();
        config.dataset.columns.pages = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_ascii_delimiter() {
        let mut config = ImtrendConfig::default();
        config.dataset.delimiter = Some('§');
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("imtrend.toml");
        std::fs::write(&path, "[dataset]\ndelimiter = \";\"\n").unwrap();

        let config = ImtrendConfig::load_file(&path).unwrap();
        assert_eq!(config.dataset.delimiter, Some(';'));
        assert_eq!(config.dataset.load_options().unwrap().delimiter, Some(b';'));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            ImtrendConfig::from_toml("dataset = 3"),
            Err(ConfigError::Parse(_))
        ));
    }
}
