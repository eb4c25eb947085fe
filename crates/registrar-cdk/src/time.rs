//!
//! Logical clock for record timestamps. On the IC this is the replica's
//! monotonic system time; host builds fall back to the wall clock so
//! native tests and tools can share call sites.
//!

use std::time::SystemTime;

/// Returns the current UNIX epoch time in nanoseconds.
#[must_use]
#[allow(unreachable_code)]
#[allow(clippy::cast_possible_truncation)]
pub fn now_nanos() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        return crate::api::time();
    }

    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}

///
/// TESTS
///
