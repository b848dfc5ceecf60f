//! Core domain entities.

pub mod scaffold_request;
pub mod template;

pub use scaffold_request::{ManifestPatch, ScaffoldRequest};
pub use template::{TemplateDescriptor, TemplateRegistry};
