//! Template download via the system git executable.

pub mod template_source;

pub use template_source::{GitTemplateSource, TemplateSource};
