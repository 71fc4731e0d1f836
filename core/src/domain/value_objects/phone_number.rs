//! Phone number value object.

use serde::{Deserialize, Serialize};

use crate::errors::{VerifyError, VerifyResult};
use vk_shared::utils::phone::{hash_phone_number, is_valid_e164, mask_phone_number};

/// Phone number to be verified.
///
/// The only hard precondition is that the number is non-empty; the backend
/// is the authority on deliverability. Numbers that do not look like E.164
/// are accepted but can be flagged via [`PhoneNumber::looks_like_e164`]
/// before the round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a raw phone number, failing on empty or whitespace-only input
    pub fn parse(raw: &str) -> VerifyResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(VerifyError::MissingPhoneNumber);
        }
        Ok(PhoneNumber(trimmed.to_string()))
    }

    /// The phone number as supplied by the caller
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Masked form safe for logs
    pub fn masked(&self) -> String {
        mask_phone_number(&self.0)
    }

    /// Stable hash for correlating log events without exposing the number
    pub fn hashed(&self) -> String {
        hash_phone_number(&self.0)
    }

    /// Whether the number is shaped like E.164
    pub fn looks_like_e164(&self) -> bool {
        is_valid_e164(&self.0)
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(
            PhoneNumber::parse(""),
            Err(VerifyError::MissingPhoneNumber)
        ));
        assert!(matches!(
            PhoneNumber::parse("   "),
            Err(VerifyError::MissingPhoneNumber)
        ));
    }

    #[test]
    fn test_parse_trims() {
        let phone = PhoneNumber::parse(" +15555550100 ").unwrap();
        assert_eq!(phone.as_str(), "+15555550100");
    }

    #[test]
    fn test_non_e164_is_accepted_but_flagged() {
        let phone = PhoneNumber::parse("5550100").unwrap();
        assert!(!phone.looks_like_e164());

        let phone = PhoneNumber::parse("+15555550100").unwrap();
        assert!(phone.looks_like_e164());
    }

    #[test]
    fn test_masked_hides_middle_digits() {
        let phone = PhoneNumber::parse("+15555550100").unwrap();
        assert_eq!(phone.masked(), "+155***0100");
    }
}
