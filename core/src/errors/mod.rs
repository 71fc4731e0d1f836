//! Error types for the verification flow.

mod types;

pub use types::{BackendError, ChallengeError};

use thiserror::Error;

/// Errors surfaced by the verification entry points
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The supplied phone number was empty
    #[error("Missing phone number")]
    MissingPhoneNumber,

    /// Silent push notifications cannot be forwarded to this process
    #[error("Silent push notifications are not forwarded to this app")]
    NotificationsNotForwarded,

    /// The backend answered in a way the client cannot act on
    #[error("Unexpected response from the verification backend")]
    UnexpectedBackendResponse,

    // Bridges to collaborator error types
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Challenge(#[from] ChallengeError),
}

pub type VerifyResult<T> = Result<T, VerifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_bridges_transparently() {
        let err: VerifyError = BackendError::QuotaExceeded.into();
        assert_eq!(
            err.to_string(),
            "SMS quota for this project has been exceeded"
        );
        assert!(matches!(err, VerifyError::Backend(BackendError::QuotaExceeded)));
    }

    #[test]
    fn test_challenge_error_bridges_transparently() {
        let err: VerifyError = ChallengeError::Cancelled.into();
        assert!(matches!(err, VerifyError::Challenge(ChallengeError::Cancelled)));
    }
}
