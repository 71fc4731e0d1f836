//! Traits for the orchestrator's external collaborators

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::{
    AppCredential, PhoneNumber, ProjectConfig, PushToken, VerificationId, VerificationReceipt,
};
use crate::errors::{BackendError, ChallengeError};

/// Storage for the app credential established by a previous attestation
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// The currently stored credential, if any
    async fn current(&self) -> Option<AppCredential>;

    /// Drop the stored credential
    async fn clear(&self);
}

/// Source of the device push token
#[async_trait]
pub trait PushTokenSource: Send + Sync {
    /// The current device push token, suspending until one is registered
    async fn current_token(&self) -> PushToken;
}

/// Waits for the silent push that completes an attestation receipt
#[async_trait]
pub trait ReceiptWaiter: Send + Sync {
    /// Whether the platform forwards silent push notifications to this process
    async fn forwarding_available(&self) -> bool;

    /// Wait up to `timeout` for the push matching `receipt`.
    ///
    /// Always resolves: on timeout the returned credential carries no
    /// secret, which the backend still accepts for one send attempt.
    async fn wait_for_credential(&self, receipt: &str, timeout: Duration) -> AppCredential;
}

/// Typed request/response calls against the identity backend
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Submit a push token for app verification, obtaining a receipt
    async fn verify_client(
        &self,
        token: &PushToken,
    ) -> Result<VerificationReceipt, BackendError>;

    /// Ask the backend to send an SMS code, returning the verification id
    async fn send_verification_code(
        &self,
        phone_number: &PhoneNumber,
        credential: Option<&AppCredential>,
        recaptcha_token: Option<&str>,
    ) -> Result<VerificationId, BackendError>;

    /// Fetch the project configuration for the interactive challenge
    async fn get_project_config(&self) -> Result<ProjectConfig, BackendError>;
}

/// Presents the interactive challenge and resolves its token
#[async_trait]
pub trait ChallengeResolver: Send + Sync {
    /// Drive the web challenge at `url` to completion, yielding its token
    async fn resolve(&self, url: &str) -> Result<String, ChallengeError>;
}
