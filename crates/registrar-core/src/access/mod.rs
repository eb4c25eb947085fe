//! Identity and permission gate.
//!
//! The host authenticates callers; this module only authorizes them. The
//! [`policy`] decides what each operation requires and the [`gate`]
//! resolves a caller's level and enforces the requirement.

pub(crate) mod gate;
pub mod policy;

use crate::{ThisError, ids::PermissionLevel};
use candid::Principal;

///
/// AccessError
///

#[derive(Debug, ThisError)]
pub enum AccessError {
    #[error("caller '{0}' is not the bootstrap administrator")]
    AdministratorRequired(Principal),

    #[error("caller '{caller}' has level {actual}, '{required}' required")]
    InsufficientPermission {
        caller: Principal,
        required: PermissionLevel,
        actual: u8,
    },

    #[error("permission level {0} is invalid (expected 1, 2 or 3)")]
    InvalidPermissionLevel(u8),

    #[error("principal '{0}' is reserved and cannot hold permissions")]
    InvalidPrincipal(Principal),
}

/// The anonymous principal and the empty management-canister principal can
/// never be granted anything or act as the administrator.
#[must_use]
pub fn is_reserved_principal(principal: Principal) -> bool {
    principal == Principal::anonymous() || principal == Principal::management_canister()
}
