//! Per-session request configuration
//!
//! Read-only context threaded through every backend call and challenge URL
//! construction. Owned by the surrounding auth session and immutable for
//! the duration of one verification attempt.

use serde::{Deserialize, Serialize};

use crate::types::LanguageCode;

/// Client library version reported to the backend
pub const CLIENT_VERSION: &str = concat!("Rust/VerifyKit/", env!("CARGO_PKG_VERSION"));

/// Request context for one auth session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfiguration {
    /// Browser API key of the backend project
    pub api_key: String,

    /// Application bundle identifier
    pub bundle_id: String,

    /// OAuth client id of the app, as registered with the project
    pub client_id: String,

    /// Preferred language for backend-driven UI and SMS templates
    #[serde(default)]
    pub language_code: Option<LanguageCode>,

    /// Client library version string
    #[serde(default = "default_client_version")]
    pub client_version: String,
}

impl RequestConfiguration {
    /// Create a configuration for a project
    pub fn new(
        api_key: impl Into<String>,
        bundle_id: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            bundle_id: bundle_id.into(),
            client_id: client_id.into(),
            language_code: None,
            client_version: default_client_version(),
        }
    }

    /// Set the preferred language
    pub fn with_language_code(mut self, language_code: LanguageCode) -> Self {
        self.language_code = Some(language_code);
        self
    }

    /// Create a configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("VERIFYKIT_API_KEY").unwrap_or_default(),
            bundle_id: std::env::var("VERIFYKIT_BUNDLE_ID").unwrap_or_default(),
            client_id: std::env::var("VERIFYKIT_CLIENT_ID").unwrap_or_default(),
            language_code: std::env::var("VERIFYKIT_LANGUAGE_CODE")
                .ok()
                .and_then(LanguageCode::new),
            client_version: default_client_version(),
        }
    }
}

fn default_client_version() -> String {
    CLIENT_VERSION.to_string()
}
