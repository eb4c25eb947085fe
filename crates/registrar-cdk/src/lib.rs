///
/// Unified façade over the Internet Computer SDK
///
/// Re-exports the IC crates the registry builds on (`ic_cdk`, `candid`,
/// `ic_stable_structures`) under one namespace so the core crate and the
/// canister import a single surface and can move with SDK releases
/// without touching call sites.
///
pub use candid;
pub use ic_cdk::{api, println, trap};

pub mod structures;
pub mod time;
