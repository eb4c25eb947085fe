use crate::{
    ThisError,
    access::AccessError,
    config::ConfigError,
    dto::error::{Error, ErrorCode},
    ops::record::RecordOpsError,
    storage::StoreError,
};

///
/// InternalError
///
/// Structured error raised below the api layer. Never crosses the Candid
/// boundary; `api` converts it into the public [`Error`] envelope.
///

#[derive(Debug, ThisError)]
pub(crate) enum InternalError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Record(#[from] RecordOpsError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl InternalError {
    /// Public code for this failure. Broken invariants collapse to `Internal`.
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Access(err) => match err {
                AccessError::AdministratorRequired(_) => ErrorCode::AdministratorRequired,
                AccessError::InsufficientPermission { .. } => ErrorCode::InsufficientPermission,
                AccessError::InvalidPermissionLevel(_) => ErrorCode::InvalidPermissionLevel,
                AccessError::InvalidPrincipal(_) => ErrorCode::InvalidPrincipal,
            },
            Self::Config(_) => ErrorCode::InvalidConfig,
            Self::Record(err) => match err {
                RecordOpsError::AlreadyArchived(_) => ErrorCode::AlreadyArchived,
                RecordOpsError::InvalidCategory(_) => ErrorCode::InvalidCategory,
                RecordOpsError::InvalidRecordId { .. } => ErrorCode::InvalidRecordId,
                RecordOpsError::InvalidStudentId(_) => ErrorCode::InvalidStudentId,
                RecordOpsError::NotArchived(_) => ErrorCode::NotArchived,
                RecordOpsError::RecordIdExhausted { .. } => ErrorCode::RecordIdExhausted,
                RecordOpsError::RecordNotFound(_) => ErrorCode::RecordNotFound,
                RecordOpsError::ScoreOutOfRange(_) => ErrorCode::ScoreOutOfRange,
                RecordOpsError::CounterOutOfRange { .. } | RecordOpsError::SlotOccupied(_) => {
                    ErrorCode::Internal
                }
            },
            Self::Store(err) => match err {
                StoreError::AlreadyInitialized(_) => ErrorCode::AlreadyInitialized,
                StoreError::NotInitialized => ErrorCode::NotInitialized,
                StoreError::SchemaMismatch { .. } => ErrorCode::Internal,
            },
        }
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// Convert any layer error straight into the public envelope, for use
/// with `map_err` at the api boundary.
pub(crate) fn to_public(err: impl Into<InternalError>) -> Error {
    Error::from(err.into())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{PermissionLevel, RecordId};
    use candid::Principal;

    #[test]
    fn public_codes_follow_the_failure_kind() {
        let cases: Vec<(InternalError, ErrorCode)> = vec![
            (
                AccessError::AdministratorRequired(Principal::anonymous()).into(),
                ErrorCode::AdministratorRequired,
            ),
            (
                AccessError::InsufficientPermission {
                    caller: Principal::anonymous(),
                    required: PermissionLevel::Read,
                    actual: 0,
                }
                .into(),
                ErrorCode::InsufficientPermission,
            ),
            (
                RecordOpsError::RecordNotFound(RecordId::new(7)).into(),
                ErrorCode::RecordNotFound,
            ),
            (
                RecordOpsError::SlotOccupied(RecordId::new(7)).into(),
                ErrorCode::Internal,
            ),
            (StoreError::NotInitialized.into(), ErrorCode::NotInitialized),
            (
                ConfigError::CannotParseToml("bad".to_string()).into(),
                ErrorCode::InvalidConfig,
            ),
            (
                StoreError::SchemaMismatch {
                    expected: 1,
                    found: 2,
                }
                .into(),
                ErrorCode::Internal,
            ),
        ];

        for (err, code) in cases {
            let public = Error::from(err);
            assert_eq!(public.code, code, "{public}");
            assert!(!public.message.is_empty());
        }
    }

    #[test]
    fn message_keeps_the_context() {
        let public = to_public(RecordOpsError::ScoreOutOfRange(101));

        assert_eq!(public.code, ErrorCode::ScoreOutOfRange);
        assert!(public.message.contains("101"));
    }
}
