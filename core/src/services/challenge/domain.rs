//! Authorized domain selection for the challenge handler.

/// Minimum characters a domain must carry in front of the platform suffix.
/// The bare suffix and single-character hosts are treated as untrusted.
const MIN_PREFIX_LEN: usize = 2;

/// Select the first authorized domain eligible to host the challenge.
///
/// A domain is eligible when it ends with `suffix` exactly (case-sensitive)
/// and carries at least two characters in front of it. The backend's listed
/// order is preserved; the first match wins.
pub fn select_authorized_domain<'a>(domains: &'a [String], suffix: &str) -> Option<&'a str> {
    domains
        .iter()
        .map(String::as_str)
        .find(|domain| domain.len() >= suffix.len() + MIN_PREFIX_LEN && domain.ends_with(suffix))
}
