//! Project configuration fetched from the backend.

use serde::{Deserialize, Serialize};

/// Backend project configuration relevant to the interactive challenge.
///
/// Fetched fresh for every interactive attempt; the orchestrator never
/// caches it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Domains authorized to host the challenge handler, in listed order
    pub authorized_domains: Vec<String>,
}

impl ProjectConfig {
    /// Create a configuration from a list of authorized domains
    pub fn new(authorized_domains: Vec<String>) -> Self {
        Self { authorized_domains }
    }
}
