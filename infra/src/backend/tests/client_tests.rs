//! Tests for error-code mapping and wire-type serialization

use serde_json::json;

use vk_core::errors::BackendError;

use crate::backend::identity_client::map_error_code;
use crate::backend::types::{
    GetProjectConfigResponse, SendVerificationCodeRequest, SendVerificationCodeResponse,
    VerifyClientRequest, VerifyClientResponse,
};

#[test]
fn test_map_known_error_codes() {
    assert!(matches!(
        map_error_code("INVALID_APP_CREDENTIAL"),
        BackendError::InvalidAppCredential
    ));
    assert!(matches!(
        map_error_code("MISSING_APP_CREDENTIAL"),
        BackendError::InvalidAppCredential
    ));
    assert!(matches!(
        map_error_code("INVALID_PHONE_NUMBER"),
        BackendError::InvalidPhoneNumber
    ));
    assert!(matches!(
        map_error_code("MISSING_PHONE_NUMBER"),
        BackendError::InvalidPhoneNumber
    ));
    assert!(matches!(
        map_error_code("QUOTA_EXCEEDED"),
        BackendError::QuotaExceeded
    ));
    assert!(matches!(
        map_error_code("APP_NOT_VERIFIED"),
        BackendError::AppNotVerified
    ));
    assert!(matches!(
        map_error_code("CAPTCHA_CHECK_FAILED"),
        BackendError::CaptchaCheckFailed
    ));
}

#[test]
fn test_map_error_code_strips_detail_suffix() {
    assert!(matches!(
        map_error_code("INVALID_PHONE_NUMBER : Invalid format."),
        BackendError::InvalidPhoneNumber
    ));
}

#[test]
fn test_map_unknown_error_code() {
    match map_error_code("OPERATION_NOT_ALLOWED") {
        BackendError::Unexpected { code } => assert_eq!(code, "OPERATION_NOT_ALLOWED"),
        other => panic!("expected Unexpected, got {:?}", other),
    }
}

#[test]
fn test_verify_client_request_serializes_camel_case() {
    let request = VerifyClientRequest {
        app_token: "dG9rZW4=".to_string(),
        is_sandbox: true,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({"appToken": "dG9rZW4=", "isSandbox": true})
    );
}

#[test]
fn test_verify_client_response_parses_optional_timeout() {
    let with_timeout: VerifyClientResponse =
        serde_json::from_value(json!({"receipt": "r-1", "suggestedTimeout": "5000"})).unwrap();
    assert_eq!(with_timeout.receipt, "r-1");
    assert_eq!(with_timeout.suggested_timeout.as_deref(), Some("5000"));

    let without_timeout: VerifyClientResponse =
        serde_json::from_value(json!({"receipt": "r-2"})).unwrap();
    assert!(without_timeout.suggested_timeout.is_none());
}

#[test]
fn test_send_request_omits_absent_fields() {
    let request = SendVerificationCodeRequest {
        phone_number: "+15555550100".to_string(),
        ios_receipt: Some("r-1".to_string()),
        ios_secret: None,
        recaptcha_token: None,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({"phoneNumber": "+15555550100", "iosReceipt": "r-1"})
    );
}

#[test]
fn test_send_request_with_recaptcha_token() {
    let request = SendVerificationCodeRequest {
        phone_number: "+15555550100".to_string(),
        ios_receipt: None,
        ios_secret: None,
        recaptcha_token: Some("token-1".to_string()),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({"phoneNumber": "+15555550100", "recaptchaToken": "token-1"})
    );
}

#[test]
fn test_send_response_parses_session_info() {
    let response: SendVerificationCodeResponse =
        serde_json::from_value(json!({"sessionInfo": "opaque-handle"})).unwrap();
    assert_eq!(response.session_info, "opaque-handle");
}

#[test]
fn test_project_config_response_defaults_to_empty() {
    let response: GetProjectConfigResponse = serde_json::from_value(json!({})).unwrap();
    assert!(response.authorized_domains.is_empty());

    let response: GetProjectConfigResponse = serde_json::from_value(json!({
        "authorizedDomains": ["demo.firebaseapp.com"]
    }))
    .unwrap();
    assert_eq!(response.authorized_domains, vec!["demo.firebaseapp.com"]);
}
