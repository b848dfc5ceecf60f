//! Shared utilities: error type, result alias, and progress reporting.

pub mod error;
pub mod progress;
pub mod result;
