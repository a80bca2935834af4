//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: hints
//!
//! Inside a GitHub runner errors and warnings are emitted as workflow
//! commands so they show up as annotations on the job.

use console::style;

use crate::core::constants::GITHUB_ACTIONS;
use crate::core::sink::escape_data;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Check if running as a GitHub Actions step.
fn in_github_actions() -> bool {
    std::env::var(GITHUB_ACTIONS).is_ok_and(|v| v == "true")
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ loaded 3 variables`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red), or an `::error::` command.
///
/// Example: `✗ failed to fetch secret 'prod/db'`
pub fn error(msg: &str) {
    if in_github_actions() {
        println!("::error::{}", escape_data(msg));
    } else if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow), or a `::warning::` command.
///
/// Example: `⚠ GITHUB_ENV is not set`
pub fn warn(msg: &str) {
    if in_github_actions() {
        println!("::warning::{}", escape_data(msg));
    } else if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ check the secret name and IAM permissions`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}
