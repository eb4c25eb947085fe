//! Candid-exposed data transfer types. Nothing here touches storage.

pub mod auth;
pub mod error;
pub mod page;
pub mod record;

///
/// PRELUDE
///

pub mod prelude {
    pub use candid::{CandidType, Principal};
    pub use serde::{Deserialize, Serialize};
}
