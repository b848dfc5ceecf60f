//! Child-process execution for dependency installation.

pub mod installer;

pub use installer::{NpmInstaller, PackageInstaller};
