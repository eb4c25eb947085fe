pub mod meta;
pub mod permission;
pub mod record;

use crate::{
    cdk::structures::{
        BTreeMap, Memory,
        cell::Cell,
        memory::{MemoryId, MemoryManager, VirtualMemory},
    },
    ids::RecordId,
    storage::stable::{
        meta::RegistryMetaRecord,
        permission::{PermissionData, PrincipalKey},
        record::RecordData,
    },
};
use candid::Principal;

///
/// Stable memory IDs
///
/// IDs are permanent once assigned and MUST NOT be renumbered or reused.
/// 0 is left unused so a zeroed manager header is never mistaken for data.
///

pub mod memory {
    pub const REGISTRY_META_ID: u8 = 1;
    pub const RECORDS_ID: u8 = 2;
    pub const PERMISSIONS_ID: u8 = 3;
}

///
/// RegistryStore
///
/// Owns every stable structure of one registry. Built over a single memory
/// handed in by the host, which is partitioned with a `MemoryManager`.
///

pub struct RegistryStore<M: Memory> {
    meta: Cell<RegistryMetaRecord, VirtualMemory<M>>,
    records: BTreeMap<RecordId, RecordData, VirtualMemory<M>>,
    permissions: BTreeMap<PrincipalKey, PermissionData, VirtualMemory<M>>,
}

impl<M: Memory> RegistryStore<M> {
    /// Attach to `memory`, loading whatever a previous instance left there
    /// and formatting the slots that are still empty.
    pub fn init(memory: M) -> Self {
        let manager = MemoryManager::init(memory);
        let slot = |id: u8| manager.get(MemoryId::new(id));

        Self {
            meta: Cell::init(
                slot(memory::REGISTRY_META_ID),
                RegistryMetaRecord::default(),
            ),
            records: BTreeMap::init(slot(memory::RECORDS_ID)),
            permissions: BTreeMap::init(slot(memory::PERMISSIONS_ID)),
        }
    }

    // -------------------------------------------------------------
    // Meta
    // -------------------------------------------------------------

    #[must_use]
    pub fn meta(&self) -> RegistryMetaRecord {
        self.meta.get().clone()
    }

    pub fn set_meta(&mut self, meta: RegistryMetaRecord) {
        self.meta.set(meta);
    }

    // -------------------------------------------------------------
    // Records
    // -------------------------------------------------------------

    #[must_use]
    pub fn record(&self, id: RecordId) -> Option<RecordData> {
        self.records.get(&id)
    }

    #[must_use]
    pub fn contains_record(&self, id: RecordId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn insert_record(&mut self, record: RecordData) -> Option<RecordData> {
        self.records.insert(record.id, record)
    }

    #[must_use]
    pub fn record_count(&self) -> u64 {
        self.records.len()
    }

    /// Records in ascending id order.
    pub fn records(&self) -> impl Iterator<Item = RecordData> + '_ {
        self.records.view().map(|(_, record)| record)
    }

    // -------------------------------------------------------------
    // Permissions
    // -------------------------------------------------------------

    #[must_use]
    pub fn permission(&self, principal: Principal) -> Option<PermissionData> {
        self.permissions.get(&PrincipalKey(principal))
    }

    pub fn insert_permission(
        &mut self,
        principal: Principal,
        data: PermissionData,
    ) -> Option<PermissionData> {
        self.permissions.insert(PrincipalKey(principal), data)
    }

    pub fn remove_permission(&mut self, principal: Principal) -> Option<PermissionData> {
        self.permissions.remove(&PrincipalKey(principal))
    }

    #[must_use]
    pub fn permission_count(&self) -> u64 {
        self.permissions.len()
    }

    /// Permission entries in principal byte order.
    pub fn permissions(&self) -> impl Iterator<Item = (Principal, PermissionData)> + '_ {
        self.permissions.view().map(|(key, data)| (key.0, data))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cdk::structures::DefaultMemoryImpl, ids::PermissionLevel};

    fn record(id: u64) -> RecordData {
        RecordData {
            id: RecordId(id),
            student_id: format!("student-{id}"),
            category: "math".to_string(),
            score: 90,
            created_at: 1_000 + id,
            archived: false,
        }
    }

    #[test]
    fn fresh_memory_starts_with_default_meta() {
        let store = RegistryStore::init(DefaultMemoryImpl::default());

        assert_eq!(store.meta(), RegistryMetaRecord::default());
        assert_eq!(store.record_count(), 0);
        assert_eq!(store.permission_count(), 0);
    }

    #[test]
    fn reopening_the_same_memory_keeps_state() {
        let memory = DefaultMemoryImpl::default();
        let user = Principal::from_slice(&[7; 29]);

        {
            let mut store = RegistryStore::init(memory.clone());
            let mut meta = store.meta();
            meta.next_record_id = RecordId(2);
            store.set_meta(meta);
            store.insert_record(record(1));
            store.insert_record(record(2));
            store.insert_permission(
                user,
                PermissionData {
                    level: PermissionLevel::ReadWrite,
                },
            );
        }

        let store = RegistryStore::init(memory);

        assert_eq!(store.meta().next_record_id, RecordId(2));
        assert_eq!(store.record(RecordId(2)), Some(record(2)));
        assert_eq!(
            store.permission(user).map(|p| p.level),
            Some(PermissionLevel::ReadWrite)
        );
    }

    #[test]
    fn records_iterate_in_id_order() {
        let mut store = RegistryStore::init(DefaultMemoryImpl::default());

        for id in [300, 2, 17] {
            store.insert_record(record(id));
        }

        let ids: Vec<_> = store.records().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![2, 17, 300]);
    }

    #[test]
    fn removing_a_permission_returns_the_old_entry() {
        let mut store = RegistryStore::init(DefaultMemoryImpl::default());
        let user = Principal::from_slice(&[3; 10]);

        store.insert_permission(
            user,
            PermissionData {
                level: PermissionLevel::Read,
            },
        );

        assert!(store.remove_permission(user).is_some());
        assert!(store.remove_permission(user).is_none());
        assert!(store.permission(user).is_none());
    }
}
