//! Cleanup command.
//!
//! Unsets the variables a previous `fetch` exported, as recorded in the
//! cleanup list.

use crate::cli::{host_sink, output};
use crate::core::cleanup::cleanup;
use crate::core::constants::CLEANUP_NAME;
use crate::error::Result;

/// Unset previously exported secrets.
pub fn execute() -> Result<()> {
    let encoded = std::env::var(CLEANUP_NAME).ok();
    if encoded.as_deref().map_or(true, |list| list.trim().is_empty()) {
        output::success("nothing to clean up");
        return Ok(());
    }

    let mut sink = host_sink()?;
    let removed = cleanup(sink.as_mut(), encoded.as_deref())?;

    output::success(&format!("cleanup complete: removed {} variable(s)", removed.len()));
    Ok(())
}
