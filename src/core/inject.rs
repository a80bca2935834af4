//! Secret injection.
//!
//! Decides the variable name(s) for a fetched secret and writes them to an
//! [`EnvSink`]. A JSON object secret can be flattened into one variable per
//! top-level key; everything else becomes a single variable.

use serde_json::{Map, Value};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::constants::{CLEANUP_NAME, KEY_SEPARATOR};
use crate::core::sink::EnvSink;
use crate::core::transform::{to_env_name, NameTransformation};
use crate::error::SinkError;

/// Parse `value` as a JSON object.
///
/// Arrays, scalars and malformed JSON yield `None`.
pub fn parse_json_object(value: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(value) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Whether `value` is a JSON object.
pub fn is_json_object(value: &str) -> bool {
    parse_json_object(value).is_some()
}

/// Write a secret to `sink`.
///
/// # Arguments
///
/// * `name` - Alias, canonical name or secret id; empty to name flattened
///   keys on their own
/// * `value` - Secret value
/// * `parse_json` - Flatten JSON object values
/// * `transformation` - Applied to `name` and to every JSON key
///
/// # Returns
///
/// Names written, in write order.
///
/// # Errors
///
/// Returns `SinkError::NulValue`, before anything is written, if a variable
/// would hold a NUL byte, and any other `SinkError` if the sink fails. Values
/// that are not JSON objects are never an error; they are written as-is.
pub fn inject_secret(
    sink: &mut dyn EnvSink,
    name: &str,
    value: &str,
    parse_json: bool,
    transformation: NameTransformation,
) -> Result<Vec<String>, SinkError> {
    let variables = secret_variables(name, value, parse_json, transformation);

    // Nothing is written for a secret the environment cannot hold
    if let Some((name, _)) = variables.iter().find(|(_, value)| value.contains('\0')) {
        return Err(SinkError::NulValue(name.clone()));
    }

    let mut written = Vec::new();
    for (env_name, field) in variables {
        write(sink, &mut written, env_name, &field)?;
    }

    Ok(written)
}

/// Variables a secret expands to, in write order.
///
/// Same naming rules as [`inject_secret`], without touching a sink.
pub fn secret_variables(
    name: &str,
    value: &str,
    parse_json: bool,
    transformation: NameTransformation,
) -> Vec<(String, Zeroizing<String>)> {
    let base = to_env_name(name, transformation);

    let object = if parse_json {
        parse_json_object(value)
    } else {
        None
    };

    match object {
        Some(map) => {
            debug!(base = %base, keys = map.len(), "flattening JSON secret");
            map.into_iter()
                .map(|(key, field)| {
                    let env_name = join_key(&base, &to_env_name(&key, transformation));
                    let field = match field {
                        Value::String(s) => s,
                        other => other.to_string(),
                    };
                    (env_name, Zeroizing::new(field))
                })
                .collect()
        }
        None => vec![(base, Zeroizing::new(value.to_string()))],
    }
}

/// `BASE_KEY`, or whichever part is non-empty.
fn join_key(base: &str, key: &str) -> String {
    [base, key]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(KEY_SEPARATOR)
}

fn write(
    sink: &mut dyn EnvSink,
    written: &mut Vec<String>,
    name: String,
    value: &str,
) -> Result<(), SinkError> {
    if name.is_empty() {
        warn!("skipping secret that resolves to an empty variable name");
        return Ok(());
    }
    if name == CLEANUP_NAME {
        warn!(name = %name, "variable name is reserved for the cleanup list and will be overwritten");
    }
    if written.contains(&name) {
        warn!(name = %name, "variable written more than once; the last value wins");
    }

    if !value.is_empty() {
        sink.mask(value)?;
    }
    debug!(name = %name, "injecting secret");
    sink.set(&name, value)?;
    written.push(name);

    Ok(())
}
