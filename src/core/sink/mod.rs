//! Environment sinks.
//!
//! Injected variables must outlive the current step, so where they end up
//! depends on the host: the GitHub runner reads them from the `GITHUB_ENV`
//! file, a child command inherits them from the process environment.
//! [`EnvSink`] is the only path through which the pipeline mutates the
//! environment.

use crate::error::SinkError;

mod github;
mod memory;
mod process;

pub(crate) use github::escape_data;
pub use github::GithubEnv;
pub use memory::{MemoryEnv, SinkEvent};
pub use process::ProcessEnv;

/// Destination for injected environment variables.
pub trait EnvSink {
    /// Export `name=value` for the rest of the job.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the variable cannot be written.
    fn set(&mut self, name: &str, value: &str) -> Result<(), SinkError>;

    /// Remove `name` for the rest of the job.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the change cannot be written.
    fn unset(&mut self, name: &str) -> Result<(), SinkError>;

    /// Register `value` as sensitive so the host redacts it from logs.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the host cannot be told; the value must not be
    /// exported then.
    fn mask(&mut self, value: &str) -> Result<(), SinkError>;
}

/// Check that the process environment can hold `name=value`.
///
/// # Errors
///
/// `SinkError::InvalidName` for an empty name or one containing `=` or NUL,
/// `SinkError::NulValue` for a value containing NUL.
pub(crate) fn check_variable(name: &str, value: &str) -> Result<(), SinkError> {
    if name.is_empty() || name.contains(['=', '\0']) {
        return Err(SinkError::InvalidName(name.to_string()));
    }
    if value.contains('\0') {
        return Err(SinkError::NulValue(name.to_string()));
    }
    Ok(())
}
