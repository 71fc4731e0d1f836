//! Phone number verification orchestration
//!
//! This module coordinates the app-credential store, the push-token source,
//! the receipt waiter, and the backend client to produce a verification
//! identifier for a phone number, via either the silent attestation path or
//! the interactive challenge path.

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationConfig;
pub use service::PhoneVerificationService;
pub use traits::{
    BackendClient, ChallengeResolver, CredentialStore, PushTokenSource, ReceiptWaiter,
};
pub use types::PendingVerification;
