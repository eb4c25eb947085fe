use crate::{
    config::{AccessConfig, ReadAccess},
    ids::PermissionLevel,
};
use derive_more::Display;

///
/// Operation
/// Operation classes the policy assigns requirements to
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum Operation {
    ArchiveRecord,
    CreateRecord,
    ListPermissions,
    ManagePermissions,
    ReadRecords,
    RestoreRecord,
}

///
/// Requirement
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Requirement {
    Open,
    Level(PermissionLevel),
    BootstrapAdmin,
}

///
/// AccessPolicy
///
/// Thresholds come from `[access]`; permission management is always
/// reserved to the bootstrap administrator.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AccessPolicy {
    pub read: ReadAccess,
    pub create: PermissionLevel,
    pub archive: PermissionLevel,
}

impl AccessPolicy {
    #[must_use]
    pub const fn from_config(config: &AccessConfig) -> Self {
        Self {
            read: config.read,
            create: config.create,
            archive: config.archive,
        }
    }

    #[must_use]
    pub const fn requirement(&self, op: Operation) -> Requirement {
        match op {
            Operation::ReadRecords => match self.read {
                ReadAccess::Open => Requirement::Open,
                ReadAccess::Restricted => Requirement::Level(PermissionLevel::Read),
            },
            Operation::CreateRecord => Requirement::Level(self.create),
            Operation::ArchiveRecord | Operation::RestoreRecord => {
                Requirement::Level(self.archive)
            }
            Operation::ListPermissions => Requirement::Level(PermissionLevel::Admin),
            Operation::ManagePermissions => Requirement::BootstrapAdmin,
        }
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::from_config(&AccessConfig::default())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_conservative() {
        let policy = AccessPolicy::default();

        assert_eq!(policy.requirement(Operation::ReadRecords), Requirement::Open);
        assert_eq!(
            policy.requirement(Operation::CreateRecord),
            Requirement::Level(PermissionLevel::ReadWrite)
        );
        assert_eq!(
            policy.requirement(Operation::ArchiveRecord),
            Requirement::Level(PermissionLevel::Admin)
        );
        assert_eq!(
            policy.requirement(Operation::RestoreRecord),
            Requirement::Level(PermissionLevel::Admin)
        );
        assert_eq!(
            policy.requirement(Operation::ManagePermissions),
            Requirement::BootstrapAdmin
        );
    }

    #[test]
    fn restricted_reads_need_read_level() {
        let policy = AccessPolicy {
            read: ReadAccess::Restricted,
            ..AccessPolicy::default()
        };

        assert_eq!(
            policy.requirement(Operation::ReadRecords),
            Requirement::Level(PermissionLevel::Read)
        );
    }
}
