//! Centralized warning and error messages for CLI output.

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow). Warnings never abort the
/// run.
pub fn warn(msg: &str) {
    eprintln!("{YELLOW}{msg}{RESET}");
}

/// Print an error message to stderr (red).
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}
