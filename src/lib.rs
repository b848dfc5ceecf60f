//! # progen - Project Scaffolding CLI
//!
//! `progen` creates new projects from versioned git templates. Pick a named
//! template, choose one of its released tags, and progen clones it, stamps
//! your name/author/description into the generated `package.json`, and runs
//! the dependency install for you.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a project interactively
//! progen init myapp
//!
//! # See the released versions of a template
//! progen list antd-pro
//! ```
//!
//! ## Architecture
//!
//! The crate is organized using clean architecture principles:
//!
//! - [`domain`]: Core entities and value objects
//! - [`application`]: Use cases and business workflows
//! - [`infrastructure`]: External dependencies and I/O operations
//! - [`presentation`]: CLI interface and user interaction
//! - [`common`]: Shared utilities and error handling
//!
//! ## Domain Model
//!
//! - [`domain::entities::template::TemplateRegistry`]: Immutable mapping from
//!   template key to repository coordinate, fixed at process start
//! - [`domain::entities::scaffold_request::ScaffoldRequest`]: One fully
//!   populated scaffold operation
//! - [`domain::value_objects::project_name::ProjectName`]: Validated project
//!   name, safe as a directory name and manifest `name` field
//! - [`domain::value_objects::version_tag::VersionTag`]: Opaque released tag
//!
//! ## Use Cases
//!
//! - [`application::use_cases::scaffold_project`]: Name check, template
//!   download, manifest patch, dependency install
//! - [`application::use_cases::list_versions`]: Fetch a template's tag list
//!
//! ## Error Handling
//!
//! - [`common::error::ProgenError`]: Main error type with detailed context
//! - [`common::result::ProgenResult`]: Type alias for `Result<T, ProgenError>`
//!
//! Every failure aborts the remaining steps of the current subcommand; no
//! step is retried. Dependency-install failures are the single advisory
//! exception, reported as a warning after the project is already created.

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::ProgenError;
pub use crate::common::result::ProgenResult as Result;
