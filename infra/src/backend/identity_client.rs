//! Identity Toolkit REST client
//!
//! Implements the core `BackendClient` trait over the relyingparty
//! endpoints. The orchestrator owns the only retry in the verification
//! flow, so this client performs none of its own.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, warn};

use vk_core::domain::{
    AppCredential, PhoneNumber, ProjectConfig, PushToken, VerificationId, VerificationReceipt,
};
use vk_core::errors::BackendError;
use vk_core::services::verification::BackendClient;
use vk_shared::config::RequestConfiguration;

use super::types::{
    ErrorEnvelope, GetProjectConfigResponse, SendVerificationCodeRequest,
    SendVerificationCodeResponse, VerifyClientRequest, VerifyClientResponse,
};
use crate::InfrastructureError;

/// Default API host for the identity backend
pub const DEFAULT_API_HOST: &str = "https://www.googleapis.com";

const RELYING_PARTY_PATH: &str = "identitytoolkit/v3/relyingparty";

/// Identity client configuration
#[derive(Debug, Clone)]
pub struct IdentityClientConfig {
    /// Base URL of the identity backend
    pub api_host: String,

    /// Timeout for individual API requests
    pub request_timeout: Duration,
}

impl Default for IdentityClientConfig {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl IdentityClientConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            api_host: std::env::var("VERIFYKIT_API_HOST")
                .unwrap_or_else(|_| DEFAULT_API_HOST.to_string()),
            request_timeout: std::env::var("VERIFYKIT_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or_else(|| Duration::from_secs(30)),
        }
    }
}

/// Identity Toolkit client
pub struct IdentityClient {
    client: reqwest::Client,
    config: IdentityClientConfig,
    request_config: RequestConfiguration,
}

impl IdentityClient {
    /// Create a new client for a project
    pub fn new(
        config: IdentityClientConfig,
        request_config: RequestConfiguration,
    ) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            config,
            request_config,
        })
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(
            IdentityClientConfig::from_env(),
            RequestConfiguration::from_env(),
        )
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}/{}?key={}",
            self.config.api_host.trim_end_matches('/'),
            RELYING_PARTY_PATH,
            endpoint,
            urlencoding::encode(&self.request_config.api_key),
        )
    }

    fn apply_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let mut request = request
            .header("X-Client-Version", &self.request_config.client_version)
            .header("X-Ios-Bundle-Identifier", &self.request_config.bundle_id);
        if let Some(language) = &self.request_config.language_code {
            request = request.header("X-Firebase-Locale", language.as_str());
        }
        request
    }

    async fn post<Req, Resp>(&self, endpoint: &str, body: &Req) -> Result<Resp, BackendError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        debug!(endpoint = endpoint, "Calling identity backend");
        let request = self.apply_headers(self.client.post(self.endpoint_url(endpoint)));
        let response = request.json(body).send().await.map_err(|err| {
            BackendError::Network {
                message: err.to_string(),
            }
        })?;
        Self::decode(endpoint, response).await
    }

    async fn get<Resp>(&self, endpoint: &str) -> Result<Resp, BackendError>
    where
        Resp: DeserializeOwned,
    {
        debug!(endpoint = endpoint, "Calling identity backend");
        let request = self.apply_headers(self.client.get(self.endpoint_url(endpoint)));
        let response = request.send().await.map_err(|err| BackendError::Network {
            message: err.to_string(),
        })?;
        Self::decode(endpoint, response).await
    }

    async fn decode<Resp>(endpoint: &str, response: reqwest::Response) -> Result<Resp, BackendError>
    where
        Resp: DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await.map_err(|err| BackendError::Network {
            message: err.to_string(),
        })?;

        if !status.is_success() {
            return Err(Self::map_failure(endpoint, status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|err| BackendError::Serialization {
            message: format!("{} response: {}", endpoint, err),
        })
    }

    fn map_failure(endpoint: &str, status: u16, body: &str) -> BackendError {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => {
                warn!(
                    endpoint = endpoint,
                    status = status,
                    code = %envelope.error.message,
                    "Identity backend returned an error"
                );
                map_error_code(&envelope.error.message)
            }
            Err(_) => {
                error!(
                    endpoint = endpoint,
                    status = status,
                    "Identity backend returned a non-JSON error body"
                );
                BackendError::Http {
                    status,
                    message: body.chars().take(200).collect(),
                }
            }
        }
    }
}

/// Map a backend error code onto `BackendError`.
///
/// The backend sometimes appends detail after a colon
/// (`"INVALID_PHONE_NUMBER : Invalid format."`); only the leading code is
/// significant.
pub(crate) fn map_error_code(message: &str) -> BackendError {
    let code = message.split(':').next().unwrap_or(message).trim();
    match code {
        "INVALID_APP_CREDENTIAL" | "MISSING_APP_CREDENTIAL" => BackendError::InvalidAppCredential,
        "INVALID_PHONE_NUMBER" | "MISSING_PHONE_NUMBER" => BackendError::InvalidPhoneNumber,
        "QUOTA_EXCEEDED" => BackendError::QuotaExceeded,
        "APP_NOT_VERIFIED" => BackendError::AppNotVerified,
        "CAPTCHA_CHECK_FAILED" => BackendError::CaptchaCheckFailed,
        _ => BackendError::Unexpected {
            code: code.to_string(),
        },
    }
}

#[async_trait]
impl BackendClient for IdentityClient {
    async fn verify_client(
        &self,
        token: &PushToken,
    ) -> Result<VerificationReceipt, BackendError> {
        let request = VerifyClientRequest {
            app_token: token.as_base64(),
            is_sandbox: token.is_sandbox(),
        };
        let response: VerifyClientResponse = self.post("verifyClient", &request).await?;

        let suggested_timeout = response
            .suggested_timeout
            .as_deref()
            .and_then(|millis| millis.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::ZERO);

        Ok(VerificationReceipt::new(response.receipt, suggested_timeout))
    }

    async fn send_verification_code(
        &self,
        phone_number: &PhoneNumber,
        credential: Option<&AppCredential>,
        recaptcha_token: Option<&str>,
    ) -> Result<VerificationId, BackendError> {
        let request = SendVerificationCodeRequest {
            phone_number: phone_number.as_str().to_string(),
            ios_receipt: credential.map(|c| c.receipt().to_string()),
            ios_secret: credential.and_then(|c| c.secret().map(str::to_string)),
            recaptcha_token: recaptcha_token.map(str::to_string),
        };
        let response: SendVerificationCodeResponse =
            self.post("sendVerificationCode", &request).await?;
        Ok(VerificationId::new(response.session_info))
    }

    async fn get_project_config(&self) -> Result<ProjectConfig, BackendError> {
        let response: GetProjectConfigResponse = self.get("getProjectConfig").await?;
        Ok(ProjectConfig::new(response.authorized_domains))
    }
}
