//! GitHub REST API access.

pub mod tag_client;

pub use tag_client::{GithubTagClient, TagSource};
