//! Identity backend client
//!
//! Typed request/response calls against the Identity Toolkit REST API:
//! verify-client, send-verification-code, and project configuration.

mod identity_client;
mod types;

#[cfg(test)]
mod tests;

pub use identity_client::{IdentityClient, IdentityClientConfig, DEFAULT_API_HOST};
