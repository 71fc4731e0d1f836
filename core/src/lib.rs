//! # VerifyKit Core
//!
//! Core domain layer and verification orchestration for the VerifyKit client.
//! This crate contains the domain entities, the collaborator traits the
//! orchestrator is generic over, the interactive challenge helpers, and the
//! error types shared with the infrastructure layer.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
