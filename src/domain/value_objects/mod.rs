//! Value objects with validation and type safety.

pub mod project_name;
pub mod version_tag;

pub use project_name::{ProjectName, ProjectNameError};
pub use version_tag::VersionTag;
