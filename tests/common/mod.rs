//! Common test utilities and helpers
//!
//! Shared across integration test modules to reduce duplication.

#![allow(dead_code)]

pub mod mock_services;
pub mod test_fixtures;
