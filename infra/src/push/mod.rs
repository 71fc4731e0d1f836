//! APNs push integration
//!
//! The token source hands out the registered device token; the receipt
//! waiter matches backend-issued receipts against incoming silent pushes.

mod receipt_waiter;
mod token_source;

#[cfg(test)]
mod tests;

pub use receipt_waiter::ApnsReceiptWaiter;
pub use token_source::ApnsTokenSource;
