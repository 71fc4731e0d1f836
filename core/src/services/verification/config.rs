//! Configuration for the verification orchestrator

use std::time::Duration;

/// Domain suffix an authorized challenge host must carry
pub const AUTHORIZED_DOMAIN_SUFFIX: &str = "firebaseapp.com";

/// Receipt wait applied when the backend suggests no timeout
pub const DEFAULT_RECEIPT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the verification orchestrator
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// Suffix an authorized domain must end with to host the challenge
    pub authorized_domain_suffix: String,

    /// Receipt wait applied when the backend suggests a zero timeout
    pub receipt_timeout_fallback: Duration,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            authorized_domain_suffix: AUTHORIZED_DOMAIN_SUFFIX.to_string(),
            receipt_timeout_fallback: DEFAULT_RECEIPT_TIMEOUT,
        }
    }
}
