use crate::dto::prelude::*;
use std::fmt::{self, Display};

///
/// Error
///
/// Public error envelope. `code` preserves the failure kind so clients can
/// branch on it; `message` carries the context.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    #[must_use]
    pub const fn new(code: ErrorCode, message: String) -> Self {
        Self { code, message }
    }
}

///
/// ErrorCode
///

#[derive(CandidType, Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[non_exhaustive]
#[remain::sorted]
pub enum ErrorCode {
    AdministratorRequired,
    AlreadyArchived,
    AlreadyInitialized,
    InsufficientPermission,
    Internal,
    InvalidCategory,
    InvalidConfig,
    InvalidPermissionLevel,
    InvalidPrincipal,
    InvalidRecordId,
    InvalidStudentId,
    NotArchived,
    NotInitialized,
    RecordIdExhausted,
    RecordNotFound,
    ScoreOutOfRange,
}
