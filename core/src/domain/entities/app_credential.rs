//! App credential entity for silent app attestation.

use serde::{Deserialize, Serialize};

/// Credential asserting that the current app instance is genuine.
///
/// A full credential carries both the backend-issued receipt and the secret
/// delivered through a silent push notification. When the push never arrives
/// the credential degrades to a receipt-only placeholder, which the backend
/// still accepts for a single send attempt.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCredential {
    /// Receipt issued by the backend's verify-client call
    receipt: String,

    /// Secret delivered via silent push; absent when attestation timed out
    secret: Option<String>,
}

impl AppCredential {
    /// Create a credential from a receipt and an optional secret
    pub fn new(receipt: impl Into<String>, secret: Option<String>) -> Self {
        Self {
            receipt: receipt.into(),
            secret,
        }
    }

    /// The backend-issued receipt
    pub fn receipt(&self) -> &str {
        &self.receipt
    }

    /// The attestation secret, if the silent push arrived in time
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    /// Whether this credential carries the attestation secret
    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }
}

// The secret must never end up in logs, so Debug redacts it.
impl std::fmt::Debug for AppCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppCredential")
            .field("receipt", &self.receipt)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_credential() {
        let credential = AppCredential::new("receipt-1", Some("secret-1".to_string()));
        assert_eq!(credential.receipt(), "receipt-1");
        assert_eq!(credential.secret(), Some("secret-1"));
        assert!(credential.has_secret());
    }

    #[test]
    fn test_receipt_only_credential() {
        let credential = AppCredential::new("receipt-1", None);
        assert!(!credential.has_secret());
        assert_eq!(credential.secret(), None);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let credential = AppCredential::new("receipt-1", Some("secret-1".to_string()));
        let printed = format!("{:?}", credential);
        assert!(printed.contains("receipt-1"));
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("secret-1"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let credential = AppCredential::new("receipt-1", Some("secret-1".to_string()));
        let json = serde_json::to_string(&credential).unwrap();
        let restored: AppCredential = serde_json::from_str(&json).unwrap();
        assert_eq!(credential, restored);
    }
}
