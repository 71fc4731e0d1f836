//! Business services for phone number verification

pub mod challenge;
pub mod verification;

pub use challenge::*;
pub use verification::*;
