use crate::dto::prelude::*;

///
/// AcademicRecord
/// Read-only copy of a stored record
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AcademicRecord {
    pub id: u64,
    pub student_id: String,
    pub category: String,
    pub score: u8,
    pub created_at: u64,
    pub archived: bool,
}

///
/// CreateRecordArgs
///
/// `score` is wider than the stored `u8` so out-of-range values reach
/// validation instead of failing Candid decoding.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CreateRecordArgs {
    pub student_id: String,
    pub category: String,
    pub score: u32,
}

impl CreateRecordArgs {
    pub fn new(student_id: impl Into<String>, category: impl Into<String>, score: u32) -> Self {
        Self {
            student_id: student_id.into(),
            category: category.into(),
            score,
        }
    }
}

///
/// RecordFilter
///

#[derive(CandidType, Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum RecordFilter {
    #[default]
    All,
    Active,
    Archived,
}

impl RecordFilter {
    #[must_use]
    pub const fn matches(self, archived: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => !archived,
            Self::Archived => archived,
        }
    }
}

///
/// RegistryStats
///

#[derive(CandidType, Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistryStats {
    pub total_created: u64,
    pub archived_count: u64,
    pub active_count: u64,
}
