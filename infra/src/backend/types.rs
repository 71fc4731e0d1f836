//! Wire types for the Identity Toolkit endpoints

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerifyClientRequest {
    /// Device push token, base64 encoded
    pub app_token: String,
    /// Whether the token belongs to the sandbox push environment
    pub is_sandbox: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerifyClientResponse {
    pub receipt: String,
    /// Suggested wait for the silent push, in milliseconds (stringified)
    #[serde(default)]
    pub suggested_timeout: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SendVerificationCodeRequest {
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios_receipt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recaptcha_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SendVerificationCodeResponse {
    pub session_info: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetProjectConfigResponse {
    #[serde(default)]
    pub authorized_domains: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: String,
}
