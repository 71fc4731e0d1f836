//! Challenge URL construction.

use urlencoding::encode;

/// Fixed auth-type marker for app verification challenges
pub const AUTH_TYPE_VERIFY_APP: &str = "verifyApp";

/// Inputs for one challenge URL.
///
/// Every field is percent-encoded on interpolation, so two distinct inputs
/// can never collide on the same output string.
#[derive(Debug, Clone)]
pub struct ChallengeUrlParams<'a> {
    /// Authorized domain hosting the challenge handler
    pub auth_domain: &'a str,

    /// Project API key
    pub api_key: &'a str,

    /// App bundle identifier
    pub bundle_id: &'a str,

    /// OAuth client id registered with the project
    pub client_id: &'a str,

    /// Preferred language tag; "en" is substituted when absent
    pub language_code: Option<&'a str>,

    /// Client library version
    pub client_version: &'a str,

    /// Correlation id tying the challenge back to a verification attempt
    pub event_id: &'a str,
}

/// Build the interactive challenge URL.
///
/// Pure and deterministic: identical inputs always produce the identical
/// string, with no network or state access.
pub fn build_challenge_url(params: &ChallengeUrlParams<'_>) -> String {
    let language = params.language_code.unwrap_or("en");
    format!(
        "https://{}/__/auth/handler?apiKey={}&authType={}&ibi={}&clientId={}&hl={}&v={}&eventId={}",
        params.auth_domain,
        encode(params.api_key),
        AUTH_TYPE_VERIFY_APP,
        encode(params.bundle_id),
        encode(params.client_id),
        encode(language),
        encode(params.client_version),
        encode(params.event_id),
    )
}
