//! Persistent state model.
//!
//! This module owns the data records kept in stable memory and the layout of
//! the virtual memory slots they occupy. It enforces nothing beyond schema
//! versioning; allocation, validation, and state transitions live in `ops`.

pub mod stable;

use crate::ThisError;
use candid::Principal;

///
/// StoreError
///

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("registry already initialized with bootstrap administrator '{0}'")]
    AlreadyInitialized(Principal),

    #[error("registry has not been initialized")]
    NotInitialized,

    #[error("registry schema mismatch (expected {expected}, found {found})")]
    SchemaMismatch { expected: u32, found: u32 },
}
