//! User-facing output utilities for clean, colored terminal messages
//!
//! These go to stderr without logger decoration (timestamps, levels,
//! module paths) so stdout carries only the extracted entries.

use owo_colors::OwoColorize;

/// Display a warning message to the user in yellow with padding
///
/// # Example
/// ```ignore
/// output::warn("Config file has no [extract] section; using defaults.");
/// ```
pub fn warn(message: &str) {
    eprintln!("\n{}\n", message.yellow());
}

/// Display an error message to the user in red with padding
///
/// # Example
/// ```ignore
/// output::error("Error: Failed to read include/enums.hpp");
/// ```
pub fn error(message: &str) {
    eprintln!("\n{}\n", message.red());
}
