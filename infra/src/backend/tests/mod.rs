//! Unit tests for the identity backend client

mod client_tests;
