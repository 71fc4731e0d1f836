//! Device push token supplied by the platform push-registration subsystem.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// APNs environment a push token was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PushEnvironment {
    Production,
    Sandbox,
}

/// Opaque device push token.
///
/// The orchestrator never inspects the token bytes; they are forwarded to
/// the backend's verify-client call as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct PushToken {
    data: Vec<u8>,
    environment: PushEnvironment,
}

impl PushToken {
    /// Create a token from the raw bytes handed over at registration
    pub fn new(data: Vec<u8>, environment: PushEnvironment) -> Self {
        Self { data, environment }
    }

    /// The environment the token was issued for
    pub fn environment(&self) -> PushEnvironment {
        self.environment
    }

    /// Whether the token belongs to the sandbox push environment
    pub fn is_sandbox(&self) -> bool {
        self.environment == PushEnvironment::Sandbox
    }

    /// Token bytes encoded for the wire
    pub fn as_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }
}

// Token bytes are opaque device material; Debug shows shape only.
impl std::fmt::Debug for PushToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushToken")
            .field("len", &self.data.len())
            .field("environment", &self.environment)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_encoding() {
        let token = PushToken::new(vec![0x00, 0x01, 0xFF], PushEnvironment::Production);
        assert_eq!(token.as_base64(), "AAH/");
    }

    #[test]
    fn test_environment() {
        let token = PushToken::new(vec![1, 2, 3], PushEnvironment::Sandbox);
        assert!(token.is_sandbox());
        assert_eq!(token.environment(), PushEnvironment::Sandbox);
    }

    #[test]
    fn test_debug_hides_bytes() {
        let token = PushToken::new(vec![0xAB; 32], PushEnvironment::Production);
        let printed = format!("{:?}", token);
        assert!(printed.contains("len: 32"));
        assert!(!printed.contains("171")); // 0xAB
    }
}
