//! Unit tests for the push integration
