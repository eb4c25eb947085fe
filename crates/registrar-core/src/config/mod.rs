pub mod schema;

use schema::{ConfigSchemaError, Validate};
use thiserror::Error as ThisError;

pub use schema::{AccessConfig, ConfigModel, LogConfig, ReadAccess, RecordsConfig};

/// Errors related to configuration parsing and validation.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    /// Wrapper for data schema-level errors.
    #[error(transparent)]
    ConfigSchema(#[from] ConfigSchemaError),
}

///
/// Config
///
/// Parses `registrar.toml`. The resulting model is handed to the registry
/// constructor; nothing is cached globally.
///

pub struct Config;

impl Config {
    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml(config_str: &str) -> Result<ConfigModel, ConfigError> {
        let config: ConfigModel =
            toml::from_str(config_str).map_err(|e| ConfigError::CannotParseToml(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}

///
/// TESTS
///
