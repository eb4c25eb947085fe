//!
//! Strongly-typed identifiers and ranks shared by storage, access, and the
//! public DTOs.
//!

use crate::cdk::structures::{Storable, storable::Bound};
use candid::CandidType;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

///
/// RecordId
///
/// Allocator-assigned record identifier. Zero is reserved as the
/// "not found / invalid" sentinel, so the first record is id 1.
///

#[derive(
    CandidType,
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    pub const SENTINEL: Self = Self(0);

    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        self.0 == 0
    }

    /// The id allocated after this one, or `None` once `u64` is exhausted.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

// big-endian so stable BTreeMap order matches numeric order
impl Storable for RecordId {
    const BOUND: Bound = Bound::Bounded {
        max_size: 8,
        is_fixed_size: true,
    };

    fn to_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Owned(self.0.to_be_bytes().to_vec())
    }

    fn into_bytes(self) -> Vec<u8> {
        self.0.to_be_bytes().to_vec()
    }

    fn from_bytes(bytes: Cow<[u8]>) -> Self {
        let b = bytes.as_ref();

        if b.len() != 8 {
            return Self::default();
        }

        let mut arr = [0u8; 8];
        arr.copy_from_slice(b);

        Self(u64::from_be_bytes(arr))
    }
}

///
/// PermissionLevel
///
/// Ordered capability rank. Absence of a level (no entry) is rank 0 and is
/// modelled as `Option::None` rather than a variant.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionLevel {
    #[display("read")]
    Read,
    #[display("read-write")]
    ReadWrite,
    #[display("admin")]
    Admin,
}

impl PermissionLevel {
    pub const NONE_RANK: u8 = 0;

    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Self::Read),
            2 => Some(Self::ReadWrite),
            3 => Some(Self::Admin),
            _ => None,
        }
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Read => 1,
            Self::ReadWrite => 2,
            Self::Admin => 3,
        }
    }

    /// Rank of an optional level, 0 when absent.
    #[must_use]
    pub const fn rank_of(level: Option<Self>) -> u8 {
        match level {
            Some(level) => level.rank(),
            None => Self::NONE_RANK,
        }
    }
}

///
/// TESTS
///
