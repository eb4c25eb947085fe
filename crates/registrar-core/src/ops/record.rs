//! Record allocation, validation, and the archive state machine.
//!
//! Every command validates completely before its first write, so a failed
//! command leaves the store untouched.

use crate::{
    ThisError,
    cdk::structures::Memory,
    dto::{
        page::{Page, PageRequest},
        record::{RecordFilter, RegistryStats},
    },
    ids::RecordId,
    ops::paginate::paginate,
    storage::stable::{RegistryStore, record::RecordData},
};

pub const CATEGORY_MAX_CHARS: usize = 32;
pub const STUDENT_ID_MAX_CHARS: usize = 64;
pub const SCORE_MAX: u32 = 100;

///
/// RecordOpsError
///

#[derive(Debug, ThisError)]
pub enum RecordOpsError {
    #[error("record {0} is already archived")]
    AlreadyArchived(RecordId),

    #[error("archived counter {op} out of range (current={current})")]
    CounterOutOfRange { op: &'static str, current: u64 },

    #[error("category must be 1..=32 characters, got {0}")]
    InvalidCategory(usize),

    #[error("record id {id} is invalid (valid ids are 1..={max})")]
    InvalidRecordId { id: RecordId, max: u64 },

    #[error("student id must be 1..=64 characters, got {0}")]
    InvalidStudentId(usize),

    #[error("record {0} is not archived")]
    NotArchived(RecordId),

    #[error("record id space exhausted at {max}")]
    RecordIdExhausted { max: u64 },

    #[error("record {0} not found")]
    RecordNotFound(RecordId),

    #[error("score {0} is outside 0..=100")]
    ScoreOutOfRange(u32),

    #[error("allocated record slot {0} is already occupied")]
    SlotOccupied(RecordId),
}

///
/// NewRecord
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewRecord {
    pub student_id: String,
    pub category: String,
    pub score: u32,
}

///
/// RecordOps
///

pub struct RecordOps;

impl RecordOps {
    // -------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------

    /// Check field constraints in a fixed order: category, student id, score.
    pub fn validate(new: &NewRecord) -> Result<u8, RecordOpsError> {
        let category_len = new.category.chars().count();
        if !(1..=CATEGORY_MAX_CHARS).contains(&category_len) {
            return Err(RecordOpsError::InvalidCategory(category_len));
        }

        let student_len = new.student_id.chars().count();
        if !(1..=STUDENT_ID_MAX_CHARS).contains(&student_len) {
            return Err(RecordOpsError::InvalidStudentId(student_len));
        }

        if new.score > SCORE_MAX {
            return Err(RecordOpsError::ScoreOutOfRange(new.score));
        }

        u8::try_from(new.score).map_err(|_| RecordOpsError::ScoreOutOfRange(new.score))
    }

    /// Reject the sentinel and anything above the configured ceiling.
    pub fn check_id(id: RecordId, max_record_id: u64) -> Result<(), RecordOpsError> {
        if id.is_sentinel() || id.get() > max_record_id {
            return Err(RecordOpsError::InvalidRecordId {
                id,
                max: max_record_id,
            });
        }

        Ok(())
    }

    // -------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------

    pub fn create<M: Memory>(
        store: &mut RegistryStore<M>,
        new: NewRecord,
        created_at: u64,
        max_record_id: u64,
    ) -> Result<RecordData, RecordOpsError> {
        let score = Self::validate(&new)?;

        let mut meta = store.meta();
        let id = meta
            .next_record_id
            .next()
            .filter(|id| id.get() <= max_record_id)
            .ok_or(RecordOpsError::RecordIdExhausted { max: max_record_id })?;

        if store.contains_record(id) {
            return Err(RecordOpsError::SlotOccupied(id));
        }

        let record = RecordData {
            id,
            student_id: new.student_id,
            category: new.category,
            score,
            created_at,
            archived: false,
        };

        meta.next_record_id = id;
        store.insert_record(record.clone());
        store.set_meta(meta);

        Ok(record)
    }

    pub fn archive<M: Memory>(
        store: &mut RegistryStore<M>,
        id: RecordId,
        max_record_id: u64,
    ) -> Result<RecordData, RecordOpsError> {
        let record = Self::get(store, id, max_record_id)?;
        if record.archived {
            return Err(RecordOpsError::AlreadyArchived(id));
        }

        let mut meta = store.meta();
        let current = meta.archived_count;
        meta.archived_count = current
            .checked_add(1)
            .ok_or(RecordOpsError::CounterOutOfRange { op: "increment", current })?;

        let updated = RecordData {
            archived: true,
            ..record
        };

        store.insert_record(updated.clone());
        store.set_meta(meta);

        Ok(updated)
    }

    /// Reverse an archive. The archived counter tracks records currently
    /// archived, so it is decremented here.
    pub fn restore<M: Memory>(
        store: &mut RegistryStore<M>,
        id: RecordId,
        max_record_id: u64,
    ) -> Result<RecordData, RecordOpsError> {
        let record = Self::get(store, id, max_record_id)?;
        if !record.archived {
            return Err(RecordOpsError::NotArchived(id));
        }

        let mut meta = store.meta();
        let current = meta.archived_count;
        meta.archived_count = current
            .checked_sub(1)
            .ok_or(RecordOpsError::CounterOutOfRange { op: "decrement", current })?;

        let updated = RecordData {
            archived: false,
            ..record
        };

        store.insert_record(updated.clone());
        store.set_meta(meta);

        Ok(updated)
    }

    // -------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------

    pub fn get<M: Memory>(
        store: &RegistryStore<M>,
        id: RecordId,
        max_record_id: u64,
    ) -> Result<RecordData, RecordOpsError> {
        Self::check_id(id, max_record_id)?;

        store.record(id).ok_or(RecordOpsError::RecordNotFound(id))
    }

    #[must_use]
    pub fn stats<M: Memory>(store: &RegistryStore<M>) -> RegistryStats {
        let meta = store.meta();
        let total_created = meta.next_record_id.get();

        RegistryStats {
            total_created,
            archived_count: meta.archived_count,
            active_count: total_created.saturating_sub(meta.archived_count),
        }
    }

    #[must_use]
    pub fn page<M: Memory>(
        store: &RegistryStore<M>,
        filter: RecordFilter,
        request: PageRequest,
    ) -> Page<RecordData> {
        paginate(
            store.records().filter(|record| filter.matches(record.archived)),
            request,
        )
    }
}

///
/// TESTS
///
