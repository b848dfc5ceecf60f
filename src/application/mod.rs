//! Application layer: use cases orchestrating domain and infrastructure.

pub mod use_cases;
