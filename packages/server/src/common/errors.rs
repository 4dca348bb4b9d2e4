use thiserror::Error;

use crate::kernel::StoreError;

/// Failure kinds surfaced by every core operation.
///
/// Each variant carries a human-readable reason. Nothing in the core swallows
/// an error: callers always receive one of these kinds or the fresh record.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Malformed or out-of-range input. Never retried.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The caller is not allowed to perform this operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The operation is not legal from the record's current state.
    #[error("Invalid state ({status}): {reason}")]
    InvalidState { status: String, reason: String },

    #[error("Feedback already submitted for this swap")]
    AlreadySubmitted,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden(reason.into())
    }

    pub fn invalid_state(status: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidState {
            status: status.to_string(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable kind, used by the HTTP layer.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
            Self::Forbidden(_) => "forbidden",
            Self::InvalidState { .. } => "invalid_state",
            Self::AlreadySubmitted => "already_submitted",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => Self::NotFound(what),
            StoreError::Duplicate(reason) => Self::Validation(reason),
            // Activities resolve version conflicts themselves; reaching this arm
            // means a caller skipped the retry path.
            StoreError::VersionConflict => Self::InvalidState {
                status: "changed".to_string(),
                reason: "Record was modified concurrently".to_string(),
            },
            StoreError::Database(e) => Self::Internal(e.into()),
            StoreError::Other(e) => Self::Internal(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_message_includes_status() {
        let err = DomainError::invalid_state("accepted", "Swap is not pending");
        assert_eq!(
            err.to_string(),
            "Invalid state (accepted): Swap is not pending"
        );
        assert_eq!(err.kind(), "invalid_state");
    }

    #[test]
    fn test_store_duplicate_becomes_validation() {
        let err: DomainError = StoreError::Duplicate("email taken".into()).into();
        assert!(matches!(err, DomainError::Validation(ref m) if m == "email taken"));
    }
}
