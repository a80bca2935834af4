//! Secret references.
//!
//! Each configured input line names one secret, optionally preceded by an
//! alias: `ALIAS,secret-id`. A trailing `*` turns the id into a name prefix
//! that the lister expands.

use std::fmt;

use crate::core::constants::{ALIAS_SEPARATOR, PREFIX_MARKER};
use crate::core::transform::{is_env_name, NameTransformation};
use crate::error::ConfigError;

/// A parsed input line.
///
/// `alias` is `None` when the line has no separator, `Some("")` when the
/// alias was left blank on purpose, and a valid environment name otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRef {
    pub alias: Option<String>,
    pub id: String,
}

impl SecretRef {
    /// Reference without alias.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            alias: None,
            id: id.into(),
        }
    }

    /// Reference with an alias (possibly blank).
    pub fn with_alias(alias: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            id: id.into(),
        }
    }

    /// Parse an input line.
    ///
    /// # Errors
    ///
    /// - `ConfigError::EmptySecretId` if nothing follows the alias
    /// - `ConfigError::InvalidAlias` if a non-empty alias is not already a
    ///   valid environment name under `transformation`
    pub fn parse(line: &str, transformation: NameTransformation) -> Result<Self, ConfigError> {
        let reference = match line.split_once(ALIAS_SEPARATOR) {
            Some((alias, id)) => {
                let alias = alias.trim();
                if !alias.is_empty() && !is_env_name(alias, transformation) {
                    return Err(ConfigError::InvalidAlias(alias.to_string()));
                }
                Self::with_alias(alias, id.trim())
            }
            None => Self::new(line.trim()),
        };

        if reference.id.is_empty() {
            return Err(ConfigError::EmptySecretId(line.to_string()));
        }

        Ok(reference)
    }

    /// Name prefix to expand, if the id ends with `*`.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidPrefix` when `*` appears anywhere but once at the
    /// end, or nothing precedes it.
    pub fn prefix(&self) -> Result<Option<&str>, ConfigError> {
        let markers = self.id.matches(PREFIX_MARKER).count();
        if markers == 0 {
            return Ok(None);
        }

        match self.id.strip_suffix(PREFIX_MARKER) {
            Some(prefix) if markers == 1 && !prefix.is_empty() => Ok(Some(prefix)),
            _ => Err(ConfigError::InvalidPrefix(self.id.clone())),
        }
    }

    /// Whether the alias was explicitly left blank.
    pub fn has_blank_alias(&self) -> bool {
        matches!(self.alias.as_deref(), Some(""))
    }
}

impl fmt::Display for SecretRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{}{}{}", alias, ALIAS_SEPARATOR, self.id),
            None => f.write_str(&self.id),
        }
    }
}

/// Whether `id` is a Secrets Manager ARN rather than a plain name.
///
/// Format: `arn:<partition>:secretsmanager:<region>:<account>:secret:<name>`
/// with a 12-digit account id.
pub fn is_secret_arn(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(7, ':').collect();
    if parts.len() != 7 {
        return false;
    }

    parts[0] == "arn"
        && parts[1].starts_with("aws")
        && parts[2] == "secretsmanager"
        && parts[4].len() == 12
        && parts[4].chars().all(|c| c.is_ascii_digit())
        && parts[5] == "secret"
        && !parts[6].is_empty()
}
