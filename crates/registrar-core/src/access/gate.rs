//! Resolves caller levels and enforces policy requirements.

use crate::{
    access::{AccessError, is_reserved_principal, policy::Requirement},
    cdk::structures::Memory,
    ids::PermissionLevel,
    log,
    log::Topic,
    ops::permission::PermissionOps,
    storage::stable::RegistryStore,
};
use candid::Principal;

///
/// PermissionGate
///
/// Holds the bootstrap administrator fixed at install. Stored grants are
/// read from the registry store on every check, so changes apply to the
/// very next call.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PermissionGate {
    bootstrap_admin: Principal,
}

impl PermissionGate {
    #[must_use]
    pub const fn new(bootstrap_admin: Principal) -> Self {
        Self { bootstrap_admin }
    }

    #[must_use]
    pub const fn bootstrap_admin(&self) -> Principal {
        self.bootstrap_admin
    }

    #[must_use]
    pub fn is_bootstrap_admin(&self, principal: Principal) -> bool {
        principal == self.bootstrap_admin
    }

    /// Effective level: implicit admin for the bootstrap administrator,
    /// otherwise whatever is stored.
    #[must_use]
    pub fn level_of<M: Memory>(
        &self,
        store: &RegistryStore<M>,
        principal: Principal,
    ) -> Option<PermissionLevel> {
        if self.is_bootstrap_admin(principal) {
            return Some(PermissionLevel::Admin);
        }

        PermissionOps::get(store, principal)
    }

    pub fn authorize<M: Memory>(
        &self,
        store: &RegistryStore<M>,
        caller: Principal,
        requirement: Requirement,
    ) -> Result<(), AccessError> {
        let result = match requirement {
            Requirement::Open => Ok(()),
            Requirement::Level(required) => {
                let level = self.level_of(store, caller);

                if level >= Some(required) {
                    Ok(())
                } else {
                    Err(AccessError::InsufficientPermission {
                        caller,
                        required,
                        actual: PermissionLevel::rank_of(level),
                    })
                }
            }
            Requirement::BootstrapAdmin => self.require_bootstrap_admin(caller),
        };

        if let Err(err) = &result {
            log!(Topic::Access, Warn, "denied: {err}");
        }

        result
    }

    /// Grant `rank` to `target`, replacing any existing grant. Returns the
    /// level that was replaced. The caller must already satisfy the
    /// permission-management requirement.
    pub fn grant<M: Memory>(
        store: &mut RegistryStore<M>,
        target: Principal,
        rank: u8,
    ) -> Result<Option<PermissionLevel>, AccessError> {
        let level =
            PermissionLevel::from_rank(rank).ok_or(AccessError::InvalidPermissionLevel(rank))?;

        if is_reserved_principal(target) {
            return Err(AccessError::InvalidPrincipal(target));
        }

        let previous = PermissionOps::set(store, target, level);
        log!(
            Topic::Access,
            Ok,
            "granted '{level}' to {target} (previous: {previous:?})"
        );

        Ok(previous)
    }

    /// Remove any grant held by `target`; returns whether one existed.
    pub fn revoke<M: Memory>(store: &mut RegistryStore<M>, target: Principal) -> bool {
        let removed = PermissionOps::remove(store, target);
        if let Some(level) = removed {
            log!(Topic::Access, Ok, "revoked '{level}' from {target}");
        }

        removed.is_some()
    }

    fn require_bootstrap_admin(&self, caller: Principal) -> Result<(), AccessError> {
        if self.is_bootstrap_admin(caller) {
            Ok(())
        } else {
            Err(AccessError::AdministratorRequired(caller))
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cdk::structures::DefaultMemoryImpl;

    fn admin() -> Principal {
        Principal::from_slice(&[1; 29])
    }

    fn user() -> Principal {
        Principal::from_slice(&[2; 29])
    }

    fn setup() -> (PermissionGate, RegistryStore<DefaultMemoryImpl>) {
        (
            PermissionGate::new(admin()),
            RegistryStore::init(DefaultMemoryImpl::default()),
        )
    }

    #[test]
    fn bootstrap_admin_is_implicitly_admin() {
        let (gate, store) = setup();

        assert_eq!(gate.level_of(&store, admin()), Some(PermissionLevel::Admin));
        assert_eq!(gate.level_of(&store, user()), None);
    }

    #[test]
    fn bootstrap_admin_keeps_admin_even_with_lower_grant() {
        let (gate, mut store) = setup();

        PermissionGate::grant(&mut store, admin(), 1)
            .expect("admin may hold an explicit grant");

        assert_eq!(gate.level_of(&store, admin()), Some(PermissionLevel::Admin));
    }

    #[test]
    fn grant_checks_level_then_target() {
        struct Case {
            name: &'static str,
            target: Principal,
            rank: u8,
            check: fn(&AccessError) -> bool,
        }

        let cases = [
            Case {
                name: "level zero with reserved target",
                target: Principal::anonymous(),
                rank: 0,
                check: |e| matches!(e, AccessError::InvalidPermissionLevel(0)),
            },
            Case {
                name: "level four",
                target: user(),
                rank: 4,
                check: |e| matches!(e, AccessError::InvalidPermissionLevel(4)),
            },
            Case {
                name: "anonymous target",
                target: Principal::anonymous(),
                rank: 1,
                check: |e| matches!(e, AccessError::InvalidPrincipal(_)),
            },
            Case {
                name: "burn target",
                target: Principal::management_canister(),
                rank: 1,
                check: |e| matches!(e, AccessError::InvalidPrincipal(_)),
            },
        ];

        for case in cases {
            let (_, mut store) = setup();
            let err = PermissionGate::grant(&mut store, case.target, case.rank)
                .expect_err(case.name);

            assert!((case.check)(&err), "case {}: {err}", case.name);
            assert_eq!(store.permission_count(), 0, "case {}", case.name);
        }
    }

    #[test]
    fn bootstrap_admin_requirement_ignores_granted_admins() {
        let (gate, mut store) = setup();
        PermissionGate::grant(&mut store, user(), 3).expect("grant");

        let err = gate
            .authorize(&store, user(), Requirement::BootstrapAdmin)
            .expect_err("only the bootstrap admin manages permissions");
        assert!(matches!(err, AccessError::AdministratorRequired(_)));

        assert!(
            gate.authorize(&store, admin(), Requirement::BootstrapAdmin)
                .is_ok()
        );
    }

    #[test]
    fn authorize_compares_ranks() {
        let (gate, mut store) = setup();
        PermissionGate::grant(&mut store, user(), 2).expect("grant");

        let need = |level| Requirement::Level(level);

        assert!(gate.authorize(&store, user(), need(PermissionLevel::Read)).is_ok());
        assert!(
            gate.authorize(&store, user(), need(PermissionLevel::ReadWrite))
                .is_ok()
        );

        let err = gate
            .authorize(&store, user(), need(PermissionLevel::Admin))
            .expect_err("read-write is below admin");
        assert!(matches!(
            err,
            AccessError::InsufficientPermission {
                required: PermissionLevel::Admin,
                actual: 2,
                ..
            }
        ));

        let err = gate
            .authorize(&store, Principal::anonymous(), need(PermissionLevel::Read))
            .expect_err("no grant");
        assert!(matches!(
            err,
            AccessError::InsufficientPermission { actual: 0, .. }
        ));

        assert!(
            gate.authorize(&store, Principal::anonymous(), Requirement::Open)
                .is_ok()
        );
    }

    #[test]
    fn revoke_reports_whether_an_entry_existed() {
        let (gate, mut store) = setup();
        PermissionGate::grant(&mut store, user(), 1).expect("grant");

        assert!(PermissionGate::revoke(&mut store, user()));
        assert!(!PermissionGate::revoke(&mut store, user()));
        assert_eq!(gate.level_of(&store, user()), None);
    }
}
