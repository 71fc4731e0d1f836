//! Verification identifier value object.

use serde::{Deserialize, Serialize};

/// Opaque handle returned after successful attestation.
///
/// Redeemed later together with the user-entered SMS code. The value is
/// backend-owned and is never modified by the client; its association with
/// a phone number lives in the orchestrator's pending-verification table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationId(String);

impl VerificationId {
    /// Wrap a backend-issued identifier
    pub fn new(value: impl Into<String>) -> Self {
        VerificationId(value.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VerificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
