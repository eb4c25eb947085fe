use super::{ConfigSchemaError, Validate};
use crate::log::Level;
use serde::{Deserialize, Serialize};

///
/// LogConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    #[serde(default = "LogConfig::default_level")]
    pub level: Level,
}

impl LogConfig {
    const fn default_level() -> Level {
        Level::Info
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        Ok(())
    }
}
