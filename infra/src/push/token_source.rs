//! Device push token source.

use async_trait::async_trait;
use tokio::sync::watch;

use vk_core::domain::{PushEnvironment, PushToken};
use vk_core::services::verification::PushTokenSource;

/// Holds the APNs device token registered by the platform and hands it to
/// the orchestrator, suspending callers until registration completes.
pub struct ApnsTokenSource {
    sender: watch::Sender<Option<PushToken>>,
    receiver: watch::Receiver<Option<PushToken>>,
}

impl ApnsTokenSource {
    pub fn new() -> Self {
        let (sender, receiver) = watch::channel(None);
        Self { sender, receiver }
    }

    /// Record the token handed over by the push-registration callback.
    ///
    /// Replaces any previously registered token and wakes suspended callers.
    pub fn set_token(&self, data: Vec<u8>, environment: PushEnvironment) {
        let token = PushToken::new(data, environment);
        // send only fails when every receiver is gone; we hold one ourselves
        let _ = self.sender.send(Some(token));
    }

    /// The registered token, if any, without waiting
    pub fn try_current(&self) -> Option<PushToken> {
        self.receiver.borrow().clone()
    }
}

impl Default for ApnsTokenSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PushTokenSource for ApnsTokenSource {
    async fn current_token(&self) -> PushToken {
        let mut receiver = self.receiver.clone();
        loop {
            if let Some(token) = receiver.borrow_and_update().clone() {
                return token;
            }
            if receiver.changed().await.is_err() {
                // The sender half lives on this struct, so the channel can
                // only close once the source itself is gone; there is no
                // token to hand out, keep the caller suspended.
                std::future::pending::<()>().await;
            }
        }
    }
}
