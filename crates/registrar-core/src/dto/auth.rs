use crate::dto::prelude::*;

///
/// PermissionEntry
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PermissionEntry {
    pub principal: Principal,
    pub level: u8,
}

///
/// RegistryInfo
/// Deployment facts a client needs before calling gated endpoints
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistryInfo {
    pub bootstrap_admin: Principal,
    pub read_restricted: bool,
    pub create_level: u8,
    pub archive_level: u8,
    pub max_record_id: u64,
    pub version: String,
}
