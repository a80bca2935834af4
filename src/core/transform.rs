//! Environment variable name derivation.
//!
//! Secret names and JSON keys are rarely valid environment variable names
//! (`prod/db-password`, `0-key`). [`to_env_name`] rewrites them and then
//! applies the configured [`NameTransformation`].

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Case folding applied to derived names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameTransformation {
    /// Keep the case as written
    None,
    /// Uppercase every letter (default)
    #[default]
    Uppercase,
    /// Lowercase every letter
    Lowercase,
}

impl NameTransformation {
    /// Apply the case folding only.
    pub fn apply(self, raw: &str) -> String {
        match self {
            Self::None => raw.to_string(),
            Self::Uppercase => raw.to_uppercase(),
            Self::Lowercase => raw.to_lowercase(),
        }
    }

    /// Name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
        }
    }
}

impl FromStr for NameTransformation {
    type Err = ConfigError;

    /// Parse a transformation mode.
    ///
    /// Matching is case-insensitive. An empty string selects the default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = s.trim();
        if mode.is_empty() {
            return Ok(Self::default());
        }

        match mode.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "uppercase" => Ok(Self::Uppercase),
            "lowercase" => Ok(Self::Lowercase),
            _ => Err(ConfigError::InvalidTransformation(s.to_string())),
        }
    }
}

impl fmt::Display for NameTransformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Derive a valid environment variable name from `raw`.
///
/// - a leading digit is prefixed with `_`
/// - characters outside `[A-Za-z0-9_]` become `_`
/// - the transformation is applied last
///
/// The empty string stays empty.
pub fn to_env_name(raw: &str, transformation: NameTransformation) -> String {
    let mut name = String::with_capacity(raw.len() + 1);

    if raw.starts_with(|c: char| c.is_ascii_digit()) {
        name.push('_');
    }

    name.extend(raw.chars().map(|c| {
        if c.is_ascii_alphanumeric() || c == '_' {
            c
        } else {
            '_'
        }
    }));

    transformation.apply(&name)
}

/// Whether `name` is already in the form [`to_env_name`] would produce.
pub fn is_env_name(name: &str, transformation: NameTransformation) -> bool {
    !name.is_empty() && to_env_name(name, transformation) == name
}
