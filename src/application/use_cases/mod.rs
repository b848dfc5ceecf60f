//! Application use cases.

pub mod list_versions;
pub mod scaffold_project;

pub use list_versions::ListVersionsUseCase;
pub use scaffold_project::{ScaffoldProjectConfig, ScaffoldProjectUseCase, ScaffoldResult};
