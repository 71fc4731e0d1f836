//! Verification receipt returned by the backend verify-client call.

use std::time::Duration;

/// Receipt handed back by the backend when a push token is submitted for
/// app verification.
///
/// Consumed immediately to drive the receipt waiter; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReceipt {
    /// Opaque receipt matched against the incoming silent push
    pub receipt: String,

    /// How long the backend suggests waiting for the push to arrive
    pub suggested_timeout: Duration,
}

impl VerificationReceipt {
    /// Create a receipt with a suggested wait
    pub fn new(receipt: impl Into<String>, suggested_timeout: Duration) -> Self {
        Self {
            receipt: receipt.into(),
            suggested_timeout,
        }
    }
}
