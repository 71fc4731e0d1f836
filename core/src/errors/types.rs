//! Collaborator-facing error types.
//!
//! `BackendError` mirrors the error codes the identity backend signals on
//! its verification endpoints; transport and decoding failures use the
//! `Network`/`Http`/`Serialization` variants. `ChallengeError` carries
//! failures of the interactive web challenge and is surfaced to callers
//! unchanged.

use thiserror::Error;

/// Errors signaled by the identity backend or its transport
#[derive(Error, Debug, Clone)]
pub enum BackendError {
    #[error("Invalid app credential")]
    InvalidAppCredential,

    #[error("Invalid phone number")]
    InvalidPhoneNumber,

    #[error("SMS quota for this project has been exceeded")]
    QuotaExceeded,

    #[error("App identity could not be verified")]
    AppNotVerified,

    #[error("reCAPTCHA check failed")]
    CaptchaCheckFailed,

    #[error("Unexpected backend error code: {code}")]
    Unexpected { code: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to decode backend response: {message}")]
    Serialization { message: String },
}

/// Errors from the interactive challenge resolver
#[derive(Error, Debug, Clone)]
pub enum ChallengeError {
    #[error("Challenge was cancelled by the user")]
    Cancelled,

    #[error("Challenge web flow failed: {message}")]
    Web { message: String },
}
