//! Stored permission grants.

use crate::{
    cdk::structures::{Storable, storable::Bound},
    ids::PermissionLevel,
    impl_storable_bounded,
};
use candid::Principal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

///
/// PrincipalKey
///
/// Raw principal bytes as a stable map key.
///

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct PrincipalKey(pub Principal);

impl Storable for PrincipalKey {
    const BOUND: Bound = Bound::Bounded {
        max_size: 29,
        is_fixed_size: false,
    };

    fn to_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Owned(self.0.as_slice().to_vec())
    }

    fn into_bytes(self) -> Vec<u8> {
        self.0.as_slice().to_vec()
    }

    fn from_bytes(bytes: Cow<[u8]>) -> Self {
        Self(Principal::from_slice(&bytes))
    }
}

///
/// PermissionData
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PermissionData {
    pub level: PermissionLevel,
}

impl PermissionData {
    pub const STORABLE_MAX_SIZE: u32 = 32;
}

impl_storable_bounded!(PermissionData, PermissionData::STORABLE_MAX_SIZE, false);

///
/// TESTS
///
