//! Configuration types shared across the VerifyKit crates

pub mod request;

pub use request::RequestConfiguration;
