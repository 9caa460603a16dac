//! # Configuration Management for PageHaus
//!
//! This crate provides centralized configuration structures for all PageHaus components:
//! pagination bounds applied while extracting page parameters, and dialect selection.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{DialectConfig, PaginationConfig};
//!
//! let pagination = PaginationConfig::new(1, 20, 0, 100, None);
//! let dialect = DialectConfig::new(Some("mysql".to_string()), None, None);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [pagination]
//! default_page = 1
//! default_size = 20
//! max_page = 0
//! max_size = 100
//! count_column = "id"
//!
//! [dialect]
//! engine = "postgresql"
//! fallback = "mysql"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from pagehaus.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./pagehaus.toml";
const CONFIG_PATH_VAR: &str = "PAGEHAUS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pagination: PaginationConfig,
    pub dialect: DialectConfig,
}

/// Bounds applied when page parameters are extracted.
///
/// A `max_*` value of zero or less disables that clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_page: i64,
    pub default_size: i64,
    pub max_page: i64,
    pub max_size: i64,
    /// Column used by count queries when the parameter object names none
    pub count_column: Option<String>,
}

/// Dialect selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectConfig {
    /// Engine id used when the caller does not name one
    pub engine: Option<String>,
    /// Engine id resolved when a requested id has no registered dialect
    pub fallback: Option<String>,
    /// Connection URL the engine id can be derived from
    pub url: Option<String>,
}

impl AppConfig {
    /// Load configuration from TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e.into());
            }
        }

        let config_path = config_path(env::var(CONFIG_PATH_VAR))?;
        Self::from_file(config_path)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pagination.validate()?;
        self.dialect.validate()
    }
}

/// Pick the config file from the `PAGEHAUS_CONFIG` lookup, else the default path
fn config_path(lookup: Result<String, env::VarError>) -> Result<String, ConfigError> {
    match lookup {
        Ok(path) => Ok(path),
        Err(env::VarError::NotPresent) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            Ok(DEFAULT_CONFIG_PATH.to_string())
        }
        Err(env::VarError::NotPresent) => Err(ConfigError::Invalid(format!(
            "Config path must be specified in .env file as {} or in {} file",
            CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
        ))),
        Err(e) => Err(e.into()),
    }
}

impl PaginationConfig {
    /// Create a new pagination configuration
    pub fn new(
        default_page: i64,
        default_size: i64,
        max_page: i64,
        max_size: i64,
        count_column: Option<String>,
    ) -> Self {
        Self {
            default_page,
            default_size,
            max_page,
            max_size,
            count_column,
        }
    }

    pub fn with_count_column(mut self, column: &str) -> Self {
        self.count_column = Some(column.to_string());
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page < 0 {
            return Err(ConfigError::Invalid(
                "Pagination default_page cannot be negative".to_string(),
            ));
        }
        if self.default_size < 0 {
            return Err(ConfigError::Invalid(
                "Pagination default_size cannot be negative".to_string(),
            ));
        }
        if self.max_page > 0 && self.default_page > self.max_page {
            return Err(ConfigError::Invalid(
                "Pagination default_page cannot be greater than max_page".to_string(),
            ));
        }
        if self.max_size > 0 && self.default_size > self.max_size {
            return Err(ConfigError::Invalid(
                "Pagination default_size cannot be greater than max_size".to_string(),
            ));
        }
        if let Some(column) = &self.count_column {
            if column.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "Pagination count_column cannot be blank".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_size: 10,
            max_page: 0,
            max_size: 0,
            count_column: None,
        }
    }
}

impl DialectConfig {
    /// Create a new dialect configuration
    pub fn new(engine: Option<String>, fallback: Option<String>, url: Option<String>) -> Self {
        Self {
            engine,
            fallback,
            url,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let blank = |value: &Option<String>| value.as_deref().is_some_and(|v| v.trim().is_empty());
        if blank(&self.engine) {
            return Err(ConfigError::Invalid(
                "Dialect engine cannot be blank".to_string(),
            ));
        }
        if blank(&self.fallback) {
            return Err(ConfigError::Invalid(
                "Dialect fallback cannot be blank".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.pagination.default_page, 1);
        assert_eq!(config.pagination.default_size, 10);
        assert_eq!(config.pagination.max_page, 0);
        assert_eq!(config.pagination.max_size, 0);
        assert!(config.pagination.count_column.is_none());
        assert!(config.dialect.engine.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_str_full() {
        let config = AppConfig::from_toml_str(
            r#"
            [pagination]
            default_page = 1
            default_size = 20
            max_page = 500
            max_size = 100
            count_column = "id"

            [dialect]
            engine = "postgresql"
            fallback = "mysql"
            "#,
        )
        .unwrap();

        assert_eq!(config.pagination.default_size, 20);
        assert_eq!(config.pagination.max_page, 500);
        assert_eq!(config.pagination.max_size, 100);
        assert_eq!(config.pagination.count_column.as_deref(), Some("id"));
        assert_eq!(config.dialect.engine.as_deref(), Some("postgresql"));
        assert_eq!(config.dialect.fallback.as_deref(), Some("mysql"));
        assert!(config.dialect.url.is_none());
    }

    #[test]
    fn test_from_toml_str_partial_uses_defaults() {
        let config = AppConfig::from_toml_str("[pagination]\nmax_size = 50\n").unwrap();
        assert_eq!(config.pagination.default_page, 1);
        assert_eq!(config.pagination.default_size, 10);
        assert_eq!(config.pagination.max_size, 50);
        assert_eq!(config.dialect, DialectConfig::default());
    }

    #[test]
    fn test_default_size_above_max_rejected() {
        let result = AppConfig::from_toml_str("[pagination]\ndefault_size = 200\nmax_size = 100\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_negative_default_rejected() {
        let result = AppConfig::from_toml_str("[pagination]\ndefault_page = -1\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_blank_engine_rejected() {
        let result = AppConfig::from_toml_str("[dialect]\nengine = \"  \"\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = AppConfig::from_toml_str("[pagination\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_config_path_lookup() {
        assert_eq!(
            config_path(Ok("config/prod.toml".to_string())).unwrap(),
            "config/prod.toml"
        );

        let not_unicode = env::VarError::NotUnicode(std::ffi::OsString::from("bad"));
        assert!(matches!(config_path(Err(not_unicode)), Err(ConfigError::Env(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = AppConfig::from_file("./definitely/not/here.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
