//! File system operations on scaffolded projects.

pub mod manifest_store;

pub use manifest_store::{ManifestStore, MANIFEST_FILE_NAME};
