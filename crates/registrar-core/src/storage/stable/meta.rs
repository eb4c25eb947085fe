//! Registry-wide metadata kept in a single stable cell.

use crate::{ids::RecordId, impl_storable_bounded};
use candid::Principal;
use serde::{Deserialize, Serialize};

pub const REGISTRY_SCHEMA_VERSION: u32 = 1;

///
/// RegistryMetaRecord
///
/// `next_record_id` holds the last allocated id (0 before the first
/// creation), so it doubles as the total-created count.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistryMetaRecord {
    pub schema_version: u32,
    pub bootstrap_admin: Option<Principal>,
    pub next_record_id: RecordId,
    pub archived_count: u64,
}

impl Default for RegistryMetaRecord {
    fn default() -> Self {
        Self {
            schema_version: REGISTRY_SCHEMA_VERSION,
            bootstrap_admin: None,
            next_record_id: RecordId::SENTINEL,
            archived_count: 0,
        }
    }
}

impl RegistryMetaRecord {
    pub const STORABLE_MAX_SIZE: u32 = 128;
}

impl_storable_bounded!(
    RegistryMetaRecord,
    RegistryMetaRecord::STORABLE_MAX_SIZE,
    false
);
