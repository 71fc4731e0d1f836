//! # VerifyKit Infrastructure
//!
//! Concrete collaborator implementations for the VerifyKit core:
//! - **Backend**: reqwest client for the Identity Toolkit REST endpoints
//! - **Push**: APNs token source and silent-push receipt waiter
//! - **Credential**: in-memory app credential storage

/// Identity backend client
pub mod backend;

/// App credential storage
pub mod credential;

/// APNs push integration
pub mod push;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
