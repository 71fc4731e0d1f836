//! Language and localization types

use serde::{Deserialize, Serialize};

/// Language tag for localized backend flows (BCP-47 style, e.g. "en", "fr-CA")
///
/// Used for the `hl` parameter of the interactive challenge URL and for the
/// locale header on backend calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl Default for LanguageCode {
    fn default() -> Self {
        LanguageCode("en".to_string())
    }
}

impl LanguageCode {
    /// Create a language code, rejecting empty input
    pub fn new(tag: impl Into<String>) -> Option<Self> {
        let tag = tag.into().trim().to_string();
        if tag.is_empty() {
            None
        } else {
            Some(LanguageCode(tag))
        }
    }

    /// Get the language tag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the primary subtag (the part before any '-')
    pub fn primary_subtag(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::new(s).ok_or_else(|| "Empty language tag".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(LanguageCode::default().as_str(), "en");
    }

    #[test]
    fn test_new_trims_and_rejects_empty() {
        assert_eq!(LanguageCode::new(" fr ").unwrap().as_str(), "fr");
        assert!(LanguageCode::new("").is_none());
        assert!(LanguageCode::new("   ").is_none());
    }

    #[test]
    fn test_primary_subtag() {
        assert_eq!(LanguageCode::new("fr-CA").unwrap().primary_subtag(), "fr");
        assert_eq!(LanguageCode::new("en").unwrap().primary_subtag(), "en");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("zh-CN".parse::<LanguageCode>().unwrap().as_str(), "zh-CN");
        assert!("".parse::<LanguageCode>().is_err());
    }
}
