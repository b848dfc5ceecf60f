//! Colored console messages.

use console::style;

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message to stderr.
pub fn warn(message: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), message);
}

/// Print an informational message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", style("::").blue().bold(), message);
}
