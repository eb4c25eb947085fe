//! Stored academic records.

use crate::{ids::RecordId, impl_storable_bounded};
use serde::{Deserialize, Serialize};

///
/// RecordData
///
/// Everything but `archived` is written once at creation.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RecordData {
    pub id: RecordId,
    pub student_id: String,
    pub category: String,
    pub score: u8,
    pub created_at: u64,
    pub archived: bool,
}

impl RecordData {
    // 64 + 32 chars at up to 4 UTF-8 bytes each, plus CBOR framing
    pub const STORABLE_MAX_SIZE: u32 = 512;
}

impl_storable_bounded!(RecordData, RecordData::STORABLE_MAX_SIZE, false);

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdk::structures::Storable;

    #[test]
    fn widest_record_fits_its_bound() {
        let record = RecordData {
            id: RecordId(u64::MAX),
            student_id: "𝔸".repeat(64),
            category: "𝔹".repeat(32),
            score: 100,
            created_at: u64::MAX,
            archived: true,
        };

        let bytes = record.to_bytes();
        assert!(bytes.len() <= RecordData::STORABLE_MAX_SIZE as usize);
        assert_eq!(RecordData::from_bytes(bytes), record);
    }
}
