//! Mechanical permission entry operations (no authorization).

use crate::{
    cdk::structures::Memory,
    dto::page::{Page, PageRequest},
    ids::PermissionLevel,
    ops::paginate::paginate,
    storage::stable::{RegistryStore, permission::PermissionData},
};
use candid::Principal;

///
/// PermissionOps
///

pub struct PermissionOps;

impl PermissionOps {
    #[must_use]
    pub fn get<M: Memory>(store: &RegistryStore<M>, principal: Principal) -> Option<PermissionLevel> {
        store.permission(principal).map(|data| data.level)
    }

    /// Insert or overwrite; returns the previous level.
    pub fn set<M: Memory>(
        store: &mut RegistryStore<M>,
        principal: Principal,
        level: PermissionLevel,
    ) -> Option<PermissionLevel> {
        store
            .insert_permission(principal, PermissionData { level })
            .map(|data| data.level)
    }

    pub fn remove<M: Memory>(
        store: &mut RegistryStore<M>,
        principal: Principal,
    ) -> Option<PermissionLevel> {
        store.remove_permission(principal).map(|data| data.level)
    }

    #[must_use]
    pub fn page<M: Memory>(
        store: &RegistryStore<M>,
        request: PageRequest,
    ) -> Page<(Principal, PermissionLevel)> {
        paginate(
            store
                .permissions()
                .map(|(principal, data)| (principal, data.level)),
            request,
        )
    }
}

///
/// TESTS
///
