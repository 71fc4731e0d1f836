//! Domain value objects

pub mod phone_number;
pub mod project_config;
pub mod verification_id;

pub use phone_number::PhoneNumber;
pub use project_config::ProjectConfig;
pub use verification_id::VerificationId;
