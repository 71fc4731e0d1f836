//! Types for verification orchestration results

use chrono::{DateTime, Utc};

/// Ledger entry associating a verification identifier with the phone number
/// that produced it.
///
/// The identifier value itself is never mutated; the association lives in
/// this side table until the SMS code is redeemed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingVerification {
    /// Phone number the identifier was issued for
    pub phone_number: String,

    /// When the identifier was recorded
    pub recorded_at: DateTime<Utc>,
}
