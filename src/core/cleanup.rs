//! Post-job cleanup.
//!
//! Unsets every variable recorded in the cleanup list by a previous run,
//! then the cleanup list itself.

use tracing::debug;

use crate::core::constants::CLEANUP_NAME;
use crate::core::sink::EnvSink;
use crate::error::{Error, Result};

/// Decode a cleanup list.
///
/// # Errors
///
/// Returns `Error::Cleanup` if `encoded` is not a JSON array of strings.
pub fn decode_cleanup_list(encoded: &str) -> Result<Vec<String>> {
    serde_json::from_str(encoded).map_err(|e| Error::Cleanup(e.to_string()))
}

/// Unset the variables listed in `encoded`.
///
/// A missing or blank list means nothing was injected.
///
/// # Returns
///
/// Names unset, excluding the cleanup variable.
///
/// # Errors
///
/// Returns `Error::Cleanup` for a malformed list and `Error::Sink` if a
/// variable cannot be unset.
pub fn cleanup(sink: &mut dyn EnvSink, encoded: Option<&str>) -> Result<Vec<String>> {
    let encoded = match encoded.map(str::trim) {
        Some(encoded) if !encoded.is_empty() => encoded,
        _ => {
            debug!("no cleanup list found");
            return Ok(Vec::new());
        }
    };

    let names = decode_cleanup_list(encoded)?;
    for name in &names {
        debug!(name = %name, "removing secret from environment");
        sink.unset(name)?;
    }
    sink.unset(CLEANUP_NAME)?;

    Ok(names)
}
