use super::{ConfigSchemaError, Validate};
use crate::ids::PermissionLevel;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Defaults
///

mod defaults {
    use crate::ids::PermissionLevel;

    pub const fn create() -> PermissionLevel {
        PermissionLevel::ReadWrite
    }

    pub const fn archive() -> PermissionLevel {
        PermissionLevel::Admin
    }
}

///
/// ReadAccess
///
/// Whether record reads need any stored permission at all.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadAccess {
    #[default]
    #[display("open")]
    Open,

    /// Callers need at least `read`.
    #[display("restricted")]
    Restricted,
}

///
/// AccessConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AccessConfig {
    #[serde(default)]
    pub read: ReadAccess,

    /// Minimum level to create records.
    #[serde(default = "defaults::create")]
    pub create: PermissionLevel,

    /// Minimum level to archive or restore records.
    #[serde(default = "defaults::archive")]
    pub archive: PermissionLevel,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            read: ReadAccess::default(),
            create: defaults::create(),
            archive: defaults::archive(),
        }
    }
}

impl Validate for AccessConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.archive < self.create {
            return Err(ConfigSchemaError::ValidationError(format!(
                "access.archive '{}' must not be below access.create '{}'",
                self.archive, self.create
            )));
        }

        Ok(())
    }
}
