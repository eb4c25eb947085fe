use super::{ConfigSchemaError, Validate};
use serde::{Deserialize, Serialize};

///
/// Defaults
///

mod defaults {
    pub const fn max_record_id() -> u64 {
        super::MAX_RECORD_ID
    }
}

/// Largest id a TOML integer (and a signed 64-bit client) can express.
#[allow(clippy::cast_sign_loss)]
pub const MAX_RECORD_ID: u64 = i64::MAX as u64;

///
/// RecordsConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RecordsConfig {
    /// Highest id the allocator may hand out; lookups above it are invalid.
    #[serde(default = "defaults::max_record_id")]
    pub max_record_id: u64,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            max_record_id: defaults::max_record_id(),
        }
    }
}

impl Validate for RecordsConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.max_record_id == 0 || self.max_record_id > MAX_RECORD_ID {
            return Err(ConfigSchemaError::ValidationError(format!(
                "records.max_record_id must be within 1..={MAX_RECORD_ID}"
            )));
        }

        Ok(())
    }
}
