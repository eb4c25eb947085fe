use crate::{
    dto::{auth::PermissionEntry, record::AcademicRecord},
    ids::PermissionLevel,
    storage::stable::record::RecordData,
};
use candid::Principal;

///
/// RecordMapper
///

pub struct RecordMapper;

impl RecordMapper {
    #[must_use]
    pub fn record_to_view(data: RecordData) -> AcademicRecord {
        AcademicRecord {
            id: data.id.get(),
            student_id: data.student_id,
            category: data.category,
            score: data.score,
            created_at: data.created_at,
            archived: data.archived,
        }
    }
}

///
/// PermissionMapper
///

pub struct PermissionMapper;

impl PermissionMapper {
    #[must_use]
    pub const fn entry_to_view(principal: Principal, level: PermissionLevel) -> PermissionEntry {
        PermissionEntry {
            principal,
            level: level.rank(),
        }
    }
}
