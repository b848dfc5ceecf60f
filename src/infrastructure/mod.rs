//! Infrastructure layer: network, git, file system, and process adapters.

pub mod filesystem;
pub mod git;
pub mod github;
pub mod process;
