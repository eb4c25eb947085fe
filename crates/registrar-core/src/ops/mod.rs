//! Mechanical operations over the registry store.
//!
//! Ops enforce storage invariants (monotonic ids, the archive state machine,
//! counter bookkeeping) and never consult caller identity; authorization
//! happens in `access` before any op runs.

pub mod mapper;
pub mod paginate;
pub mod permission;
pub mod record;
