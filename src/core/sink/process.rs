//! Process environment sink.

use tracing::trace;

use super::{check_variable, EnvSink};
use crate::error::SinkError;

/// Writes straight into this process's environment.
///
/// Variables reach child processes spawned afterwards and disappear when the
/// process exits. There is no log redaction to hook into, so masking is a
/// no-op.
#[derive(Debug, Default)]
pub struct ProcessEnv;

impl EnvSink for ProcessEnv {
    fn set(&mut self, name: &str, value: &str) -> Result<(), SinkError> {
        trace!(name, "setting process variable");
        check_variable(name, value)?;
        std::env::set_var(name, value);
        Ok(())
    }

    fn unset(&mut self, name: &str) -> Result<(), SinkError> {
        trace!(name, "removing process variable");
        check_variable(name, "")?;
        std::env::remove_var(name);
        Ok(())
    }

    fn mask(&mut self, _value: &str) -> Result<(), SinkError> {
        Ok(())
    }
}
