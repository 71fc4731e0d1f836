//! In-memory app credential store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use vk_core::domain::AppCredential;
use vk_core::services::verification::CredentialStore;

/// Process-local credential store.
///
/// Credentials do not survive a restart; the next verification attempt
/// simply runs a fresh attestation. Population happens from the push
/// handler once a silent push completes an attestation.
#[derive(Default)]
pub struct MemoryCredentialStore {
    credential: RwLock<Option<AppCredential>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a credential established by the attestation flow
    pub async fn store(&self, credential: AppCredential) {
        debug!(
            has_secret = credential.has_secret(),
            event = "credential_stored",
            "Storing app credential"
        );
        *self.credential.write().await = Some(credential);
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn current(&self) -> Option<AppCredential> {
        self.credential.read().await.clone()
    }

    async fn clear(&self) {
        debug!(event = "credential_cleared", "Clearing stored app credential");
        *self.credential.write().await = None;
    }
}
