//! Run configuration.
//!
//! Inputs arrive as strings (command-line flags or the `INPUT_*` variables a
//! workflow step receives) and are validated here, before any client is
//! created.

use tracing::debug;

use crate::core::reference::SecretRef;
use crate::core::transform::NameTransformation;
use crate::error::ConfigError;

/// Validated inputs for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Input lines, trimmed, non-empty, unique, in first-seen order
    pub secret_ids: Vec<String>,
    /// Flatten JSON object secrets into one variable per key
    pub parse_json: bool,
    pub transformation: NameTransformation,
}

impl Config {
    /// Build a configuration from raw inputs.
    ///
    /// # Arguments
    ///
    /// * `secret_ids` - Multi-line strings, one secret reference per line
    /// * `parse_json` - Boolean input; `None` means false
    /// * `transformation` - Transformation mode; `None` means uppercase
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no ids remain, the boolean is not a YAML 1.2
    /// core schema boolean, the transformation is unknown, or a line is not a
    /// valid secret reference.
    pub fn from_inputs<S: AsRef<str>>(
        secret_ids: &[S],
        parse_json: Option<&str>,
        transformation: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let secret_ids = collect_lines(secret_ids);
        if secret_ids.is_empty() {
            return Err(ConfigError::NoSecretIds);
        }

        let parse_json = match parse_json {
            Some(value) => parse_bool_input("parse-json-secrets", value)?,
            None => false,
        };

        let transformation = match transformation {
            Some(mode) => mode.parse()?,
            None => NameTransformation::default(),
        };

        for line in &secret_ids {
            SecretRef::parse(line, transformation)?.prefix()?;
        }

        debug!(
            secret_ids = secret_ids.len(),
            parse_json,
            transformation = %transformation,
            "config loaded"
        );

        Ok(Self {
            secret_ids,
            parse_json,
            transformation,
        })
    }
}

/// Split multi-line inputs into unique, trimmed, non-empty lines.
fn collect_lines<S: AsRef<str>>(inputs: &[S]) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for line in inputs.iter().flat_map(|input| input.as_ref().lines()) {
        let line = line.trim();
        if !line.is_empty() && !lines.iter().any(|seen| seen == line) {
            lines.push(line.to_string());
        }
    }

    lines
}

/// Parse a boolean the way workflow inputs are parsed.
///
/// # Errors
///
/// `ConfigError::InvalidBoolean` for anything outside
/// `true | True | TRUE | false | False | FALSE`.
pub fn parse_bool_input(input: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        other => Err(ConfigError::InvalidBoolean {
            input: input.to_string(),
            value: other.to_string(),
        }),
    }
}
