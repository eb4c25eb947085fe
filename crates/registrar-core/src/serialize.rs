//!
//! serde_cbor-powered serialization helpers used by every stable-memory
//! value, so records and metadata share one deterministic codec.
//!

use serde::{Serialize, de::DeserializeOwned};
use serde_cbor::{from_slice, to_vec};
use thiserror::Error as ThisError;

///
/// SerializeError
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("deserialize error: {0}")]
    Deserialize(String),
}

/// Serialize a value into CBOR bytes.
pub fn serialize<T>(t: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize,
{
    to_vec(t).map_err(|e| SerializeError::Serialize(e.to_string()))
}

/// Deserialize CBOR bytes into a value.
pub fn deserialize<T>(bytes: &[u8]) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    from_slice(bytes).map_err(|e| SerializeError::Deserialize(e.to_string()))
}

///
/// TESTS
///
