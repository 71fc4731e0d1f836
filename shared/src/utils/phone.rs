//! Phone number utilities
//!
//! Validation here is advisory: the backend is the authority on what a
//! deliverable phone number is. These helpers exist for logging hygiene
//! (masking, hashing) and early-warning diagnostics.

use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

// E.164 format: '+', a country code that does not start with 0, at most
// 15 digits total
static E164_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").unwrap()
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check whether a phone number is in E.164 format
pub fn is_valid_e164(phone: &str) -> bool {
    E164_REGEX.is_match(&normalize_phone_number(phone))
}

/// Mask a phone number for display and logs (e.g. +155***0100)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 8 {
        format!(
            "{}***{}",
            &normalized[..4],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "***".to_string()
    }
}

/// Hash a phone number for correlation without exposing the raw value
pub fn hash_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    let digest = Sha256::digest(normalized.as_bytes());
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("+1 (555) 555-0100"), "+15555550100");
        assert_eq!(normalize_phone_number("555.0100"), "5550100");
        assert_eq!(normalize_phone_number("+44 20 7183 8750"), "+442071838750");
    }

    #[test]
    fn test_is_valid_e164() {
        assert!(is_valid_e164("+15555550100"));
        assert!(is_valid_e164("+442071838750"));
        assert!(is_valid_e164("+86 138 1234 5678"));
        assert!(!is_valid_e164("15555550100")); // Missing +
        assert!(!is_valid_e164("+0123456789")); // Country code starts with 0
        assert!(!is_valid_e164(""));
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+15555550100"), "+155***0100");
        assert_eq!(mask_phone_number("+44 20 7183 8750"), "+442***8750");
        assert_eq!(mask_phone_number("12345"), "***");
    }

    #[test]
    fn test_hash_phone_number_is_stable_over_formatting() {
        let a = hash_phone_number("+15555550100");
        let b = hash_phone_number("+1 (555) 555-0100");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert_ne!(a, hash_phone_number("+15555550101"));
    }
}
