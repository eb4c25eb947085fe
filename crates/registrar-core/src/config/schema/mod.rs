mod access;
mod log;
mod records;

pub use access::*;
pub use log::*;
pub use records::*;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ConfigSchemaError
///

#[derive(Debug, ThisError)]
pub enum ConfigSchemaError {
    #[error("validation error: {0}")]
    ValidationError(String),
}

///
/// Validate
///

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigSchemaError>;
}

///
/// ConfigModel
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigModel {
    #[serde(default)]
    pub access: AccessConfig,

    #[serde(default)]
    pub records: RecordsConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for ConfigModel {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        self.access.validate()?;
        self.records.validate()?;
        self.log.validate()?;

        Ok(())
    }
}
