//! Shared utilities and common types for the VerifyKit client
//!
//! This crate provides common functionality used across the VerifyKit crates:
//! - Request configuration threaded through backend calls
//! - Language code handling for localized flows
//! - Phone number utilities (normalization, masking, hashing)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::RequestConfiguration;
pub use types::LanguageCode;
pub use utils::phone;
