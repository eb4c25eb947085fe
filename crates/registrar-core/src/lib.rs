//! Core library for the Registrar academic record canister.
//!
//! The canister crate owns lifecycle hooks and the Candid surface; everything
//! else lives here so it can be exercised natively against in-memory stable
//! structures.
//!
//! ## Layering
//!
//! - `api/` exposes the [`Registry`](api::registry::Registry) service object and
//!   converts internal errors into the public [`dto::error::Error`] envelope.
//! - `access/` owns the permission gate and the configurable access policy.
//! - `ops/` provides mechanical operations that enforce storage invariants
//!   (monotonic ids, archive state machine, counter bookkeeping).
//! - `storage/` owns the stable-memory records and their layout.
//! - `config/` parses and validates `registrar.toml`.
//!
//! The default flow is: endpoints → api → access → ops → storage.

pub mod access;
pub mod api;
pub mod config;
pub mod dto;
pub mod ids;
pub mod log;
pub mod macros;
pub mod serialize;

pub(crate) mod error;
pub(crate) mod ops;
pub(crate) mod storage;

pub use ::registrar_cdk as cdk;
pub use dto::error::{Error, ErrorCode};
pub use thiserror::Error as ThisError;

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
