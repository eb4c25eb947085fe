//! Public API façade for canister endpoints.
//!
//! The [`Registry`](registry::Registry) service object translates endpoint
//! calls into access checks and ops calls, and maps internal errors into the
//! public [`Error`](crate::Error) envelope. No storage invariants are
//! enforced here.
//!
//! Every wrapper that can fail returns a `Result`, so errors are mapped at
//! this boundary and nowhere else.

pub mod registry;

pub use registry::Registry;
