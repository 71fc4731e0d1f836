//! Receipt waiter backed by the silent push pipeline.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::{oneshot, Mutex};
use tracing::{debug, warn};

use vk_core::domain::AppCredential;
use vk_core::services::verification::ReceiptWaiter;

/// Matches backend-issued receipts against secrets delivered by silent
/// push notifications.
///
/// `deliver` is called from the app's push handler; `wait_for_credential`
/// is called by the orchestrator. Either order works: secrets that arrive
/// before anyone waits are parked until the matching wait shows up.
pub struct ApnsReceiptWaiter {
    forwarding: AtomicBool,
    pending: Mutex<PendingReceipts>,
}

#[derive(Default)]
struct PendingReceipts {
    waiters: HashMap<String, oneshot::Sender<String>>,
    delivered: HashMap<String, String>,
}

impl ApnsReceiptWaiter {
    pub fn new() -> Self {
        Self {
            forwarding: AtomicBool::new(false),
            pending: Mutex::new(PendingReceipts::default()),
        }
    }

    /// Record that the push pipeline is wired up and silent notifications
    /// reach this process
    pub fn mark_forwarding_available(&self) {
        self.forwarding.store(true, Ordering::SeqCst);
    }

    /// Hand the secret from an incoming silent push to the matching waiter.
    ///
    /// Returns `true` when an active waiter consumed the delivery. Unmatched
    /// deliveries are parked for a future waiter on the same receipt.
    pub async fn deliver(&self, receipt: &str, secret: String) -> bool {
        let mut pending = self.pending.lock().await;
        if let Some(sender) = pending.waiters.remove(receipt) {
            match sender.send(secret) {
                Ok(()) => {
                    debug!(
                        event = "attestation_secret_delivered",
                        "Silent push completed a waiting attestation"
                    );
                    return true;
                }
                // The waiter timed out between registration and delivery;
                // park the secret in case the receipt is retried.
                Err(secret) => {
                    pending.delivered.insert(receipt.to_string(), secret);
                    return false;
                }
            }
        }
        pending.delivered.insert(receipt.to_string(), secret);
        false
    }
}

impl Default for ApnsReceiptWaiter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReceiptWaiter for ApnsReceiptWaiter {
    async fn forwarding_available(&self) -> bool {
        self.forwarding.load(Ordering::SeqCst)
    }

    async fn wait_for_credential(&self, receipt: &str, timeout: Duration) -> AppCredential {
        let receiver = {
            let mut pending = self.pending.lock().await;
            if let Some(secret) = pending.delivered.remove(receipt) {
                return AppCredential::new(receipt, Some(secret));
            }
            let (sender, receiver) = oneshot::channel();
            pending.waiters.insert(receipt.to_string(), sender);
            receiver
        };

        match tokio::time::timeout(timeout, receiver).await {
            Ok(Ok(secret)) => AppCredential::new(receipt, Some(secret)),
            Ok(Err(_)) | Err(_) => {
                self.pending.lock().await.waiters.remove(receipt);
                warn!(
                    timeout_ms = timeout.as_millis() as u64,
                    event = "attestation_receipt_timeout",
                    "No silent push arrived for receipt; degrading to a receipt-only credential"
                );
                AppCredential::new(receipt, None)
            }
        }
    }
}
