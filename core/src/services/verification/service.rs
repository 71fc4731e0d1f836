//! Verification orchestrator implementation

use std::collections::HashMap;
use std::sync::Arc;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing;
use uuid::Uuid;

use vk_shared::config::RequestConfiguration;

use crate::domain::{AppCredential, PhoneNumber, VerificationId};
use crate::errors::{BackendError, VerifyError, VerifyResult};
use crate::services::challenge::{
    build_challenge_url, select_authorized_domain, ChallengeUrlParams,
};

use super::config::VerificationConfig;
use super::traits::{
    BackendClient, ChallengeResolver, CredentialStore, PushTokenSource, ReceiptWaiter,
};
use super::types::PendingVerification;

/// Orchestrates phone number verification against the identity backend.
///
/// Two entry points are exposed: [`verify_phone_number`] proves app identity
/// silently through a push-notification receipt, and
/// [`verify_phone_number_with_challenge`] falls back to an interactive
/// reCAPTCHA-style challenge when silent attestation is unavailable. Both
/// yield exactly one verification identifier or one error.
///
/// [`verify_phone_number`]: PhoneVerificationService::verify_phone_number
/// [`verify_phone_number_with_challenge`]: PhoneVerificationService::verify_phone_number_with_challenge
pub struct PhoneVerificationService<S, P, W, B>
where
    S: CredentialStore,
    P: PushTokenSource,
    W: ReceiptWaiter,
    B: BackendClient,
{
    /// Store holding the app credential between attestations
    credential_store: Arc<S>,
    /// Source of the device push token
    token_source: Arc<P>,
    /// Waiter matching backend receipts against incoming silent pushes
    receipt_waiter: Arc<W>,
    /// Typed backend client
    backend: Arc<B>,
    /// Read-only request context for this auth session
    request_config: RequestConfiguration,
    /// Orchestrator configuration
    config: VerificationConfig,
    /// Serializes attempts so credential reads and clears cannot race
    attempt_lock: Mutex<()>,
    /// Side table tagging issued identifiers with their phone numbers
    pending: Mutex<HashMap<String, PendingVerification>>,
}

impl<S, P, W, B> PhoneVerificationService<S, P, W, B>
where
    S: CredentialStore,
    P: PushTokenSource,
    W: ReceiptWaiter,
    B: BackendClient,
{
    /// Create a new verification orchestrator
    pub fn new(
        credential_store: Arc<S>,
        token_source: Arc<P>,
        receipt_waiter: Arc<W>,
        backend: Arc<B>,
        request_config: RequestConfiguration,
        config: VerificationConfig,
    ) -> Self {
        Self {
            credential_store,
            token_source,
            receipt_waiter,
            backend,
            request_config,
            config,
            attempt_lock: Mutex::new(()),
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Verify a phone number via the silent attestation path.
    ///
    /// This method:
    /// 1. Rejects empty phone numbers before any collaborator is touched
    /// 2. Confirms silent pushes are forwarded to this process
    /// 3. Resolves an app credential (stored, or freshly attested through
    ///    the verify-client round trip and the receipt waiter)
    /// 4. Asks the backend to send the SMS code
    /// 5. Retries exactly once with a fresh credential if the backend
    ///    rejects the stored one
    ///
    /// # Arguments
    ///
    /// * `phone_number` - The phone number to verify (E.164 recommended)
    ///
    /// # Returns
    ///
    /// * `Ok(VerificationId)` - Identifier to redeem with the SMS code
    /// * `Err(VerifyError)` - Precondition or collaborator failure
    pub async fn verify_phone_number(&self, phone_number: &str) -> VerifyResult<VerificationId> {
        let phone = PhoneNumber::parse(phone_number)?;
        let session_id = Uuid::new_v4();

        if !phone.looks_like_e164() {
            tracing::warn!(
                phone = %phone.masked(),
                session_id = %session_id,
                event = "phone_format_suspect",
                "Phone number is not shaped like E.164; the backend decides deliverability"
            );
        }

        // Single ordering domain per service instance: credential reads,
        // clears, and the retry sequence are linearized here.
        let _attempt = self.attempt_lock.lock().await;

        tracing::info!(
            phone = %phone.masked(),
            phone_hash = %phone.hashed(),
            session_id = %session_id,
            event = "verification_started",
            "Starting silent phone number verification"
        );

        if !self.receipt_waiter.forwarding_available().await {
            tracing::warn!(
                session_id = %session_id,
                event = "notifications_not_forwarded",
                "Silent pushes are not forwarded to this process"
            );
            return Err(VerifyError::NotificationsNotForwarded);
        }

        // The invalid-credential retry is bounded to exactly one repeat.
        let mut retried = false;
        loop {
            let credential = self.resolve_app_credential(retried, session_id).await?;

            match self
                .backend
                .send_verification_code(&phone, Some(&credential), None)
                .await
            {
                Ok(id) => {
                    self.record_pending(&id, &phone).await;
                    tracing::info!(
                        phone = %phone.masked(),
                        session_id = %session_id,
                        event = "verification_code_sent",
                        "Verification code request accepted"
                    );
                    return Ok(id);
                }
                Err(BackendError::InvalidAppCredential) if !retried => {
                    tracing::warn!(
                        session_id = %session_id,
                        event = "credential_rejected",
                        "Backend rejected the app credential; retrying once with a fresh one"
                    );
                    self.credential_store.clear().await;
                    retried = true;
                }
                Err(BackendError::InvalidAppCredential) => {
                    tracing::error!(
                        session_id = %session_id,
                        event = "credential_rejected_after_retry",
                        "Backend rejected a freshly attested credential"
                    );
                    return Err(VerifyError::UnexpectedBackendResponse);
                }
                Err(err) => {
                    tracing::error!(
                        session_id = %session_id,
                        error = %err,
                        event = "send_code_failed",
                        "Backend rejected the verification code request"
                    );
                    return Err(err.into());
                }
            }
        }
    }

    /// Verify a phone number via the interactive challenge path.
    ///
    /// Fetches the project configuration, selects an authorized domain for
    /// the challenge handler, drives the resolver against the challenge URL,
    /// and sends the resulting token to the backend. There is no retry on
    /// this path; any failure is surfaced directly.
    ///
    /// # Arguments
    ///
    /// * `phone_number` - The phone number to verify
    /// * `resolver` - UI-driven resolver for the web challenge
    pub async fn verify_phone_number_with_challenge(
        &self,
        phone_number: &str,
        resolver: &dyn ChallengeResolver,
    ) -> VerifyResult<VerificationId> {
        let phone = PhoneNumber::parse(phone_number)?;
        let session_id = Uuid::new_v4();

        let _attempt = self.attempt_lock.lock().await;

        tracing::info!(
            phone = %phone.masked(),
            phone_hash = %phone.hashed(),
            session_id = %session_id,
            event = "challenge_verification_started",
            "Starting interactive phone number verification"
        );

        // Fetched fresh on every attempt; never cached here.
        let project = self.backend.get_project_config().await?;

        let domain = match select_authorized_domain(
            &project.authorized_domains,
            &self.config.authorized_domain_suffix,
        ) {
            Some(domain) => domain,
            None => {
                tracing::error!(
                    session_id = %session_id,
                    candidates = project.authorized_domains.len(),
                    event = "no_authorized_domain",
                    "No authorized domain is eligible to host the challenge"
                );
                return Err(VerifyError::UnexpectedBackendResponse);
            }
        };

        let event_id = session_id.to_string();
        let url = build_challenge_url(&ChallengeUrlParams {
            auth_domain: domain,
            api_key: &self.request_config.api_key,
            bundle_id: &self.request_config.bundle_id,
            client_id: &self.request_config.client_id,
            language_code: self
                .request_config
                .language_code
                .as_ref()
                .map(|language| language.as_str()),
            client_version: &self.request_config.client_version,
            event_id: &event_id,
        });

        let token = resolver.resolve(&url).await?;

        let id = self
            .backend
            .send_verification_code(&phone, None, Some(&token))
            .await
            .map_err(|err| {
                tracing::error!(
                    session_id = %session_id,
                    error = %err,
                    event = "send_code_failed",
                    "Backend rejected the verification code request"
                );
                err
            })?;

        self.record_pending(&id, &phone).await;
        tracing::info!(
            phone = %phone.masked(),
            session_id = %session_id,
            event = "verification_code_sent",
            "Verification code request accepted"
        );
        Ok(id)
    }

    /// Phone number a verification identifier was issued for
    pub async fn phone_number_for(&self, id: &VerificationId) -> Option<String> {
        self.pending
            .lock()
            .await
            .get(id.as_str())
            .map(|entry| entry.phone_number.clone())
    }

    /// Remove and return the association once the SMS code is redeemed
    pub async fn take_phone_number_for(&self, id: &VerificationId) -> Option<String> {
        self.pending
            .lock()
            .await
            .remove(id.as_str())
            .map(|entry| entry.phone_number)
    }

    /// Resolve an app credential for one send attempt.
    ///
    /// Reuses the stored credential unless `force_refresh` is set; otherwise
    /// runs the verify-client round trip and waits for the silent push. A
    /// receipt-waiter timeout is not an error: the credential degrades to a
    /// receipt-only placeholder and the attempt continues.
    async fn resolve_app_credential(
        &self,
        force_refresh: bool,
        session_id: Uuid,
    ) -> VerifyResult<AppCredential> {
        if !force_refresh {
            if let Some(credential) = self.credential_store.current().await {
                tracing::debug!(
                    session_id = %session_id,
                    has_secret = credential.has_secret(),
                    event = "credential_reused",
                    "Using stored app credential"
                );
                return Ok(credential);
            }
        }

        let token = self.token_source.current_token().await;
        let receipt = self.backend.verify_client(&token).await?;

        let timeout = if receipt.suggested_timeout.is_zero() {
            self.config.receipt_timeout_fallback
        } else {
            receipt.suggested_timeout
        };

        tracing::debug!(
            session_id = %session_id,
            timeout_ms = timeout.as_millis() as u64,
            event = "attestation_wait",
            "Waiting for silent push to complete attestation"
        );

        let credential = self
            .receipt_waiter
            .wait_for_credential(&receipt.receipt, timeout)
            .await;

        if !credential.has_secret() {
            // Not an error: a receipt-only credential is still usable for
            // one send attempt.
            tracing::warn!(
                session_id = %session_id,
                event = "attestation_timeout",
                "Silent push did not arrive in time; continuing with a receipt-only credential"
            );
        }

        Ok(credential)
    }

    /// Tag an issued identifier with the phone number that produced it
    async fn record_pending(&self, id: &VerificationId, phone: &PhoneNumber) {
        let entry = PendingVerification {
            phone_number: phone.as_str().to_string(),
            recorded_at: Utc::now(),
        };
        self.pending
            .lock()
            .await
            .insert(id.as_str().to_string(), entry);
    }
}
