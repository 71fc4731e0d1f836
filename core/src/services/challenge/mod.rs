//! Interactive challenge helpers
//!
//! When silent attestation is unavailable the orchestrator falls back to a
//! reCAPTCHA-style web challenge hosted on one of the project's authorized
//! domains. This module selects that domain and builds the challenge URL.

mod domain;
mod url_builder;

pub use domain::select_authorized_domain;
pub use url_builder::{build_challenge_url, ChallengeUrlParams, AUTH_TYPE_VERIFY_APP};
