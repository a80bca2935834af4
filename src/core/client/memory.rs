//! In-memory secrets store.
//!
//! Behaves like Secrets Manager for the calls the pipeline makes: secrets
//! resolve by name or ARN, listings are paginated, and failures can be
//! injected per secret id. Every fetch is recorded so callers can check
//! which ids were requested.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use super::{SecretPage, SecretSummary, SecretValueResponse, SecretsClient};
use crate::error::ClientError;

const ARN_PREFIX: &str = "arn:aws:secretsmanager:us-east-1:123456789012:secret:";
const ARN_SUFFIX: &str = "-AbCdEf";

#[derive(Debug, Clone)]
struct Entry {
    value: Payload,
    deleted: bool,
}

#[derive(Debug, Clone)]
enum Payload {
    String(String),
    Binary(Vec<u8>),
}

/// In-memory [`SecretsClient`].
#[derive(Debug)]
pub struct MemoryClient {
    secrets: BTreeMap<String, Entry>,
    failures: BTreeMap<String, ClientError>,
    list_failures: BTreeSet<String>,
    page_size: usize,
    fetched: RefCell<Vec<String>>,
    list_calls: RefCell<usize>,
}

impl Default for MemoryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryClient {
    /// Create an empty store returning pages of 100 entries.
    pub fn new() -> Self {
        Self {
            secrets: BTreeMap::new(),
            failures: BTreeMap::new(),
            list_failures: BTreeSet::new(),
            page_size: 100,
            fetched: RefCell::new(Vec::new()),
            list_calls: RefCell::new(0),
        }
    }

    /// Add a secret with a string value.
    pub fn with_secret(mut self, name: &str, value: &str) -> Self {
        self.secrets.insert(
            name.to_string(),
            Entry {
                value: Payload::String(value.to_string()),
                deleted: false,
            },
        );
        self
    }

    /// Add a secret with a binary value.
    pub fn with_binary_secret(mut self, name: &str, value: &[u8]) -> Self {
        self.secrets.insert(
            name.to_string(),
            Entry {
                value: Payload::Binary(value.to_vec()),
                deleted: false,
            },
        );
        self
    }

    /// Add a secret that is scheduled for deletion.
    pub fn with_deleted_secret(mut self, name: &str, value: &str) -> Self {
        self.secrets.insert(
            name.to_string(),
            Entry {
                value: Payload::String(value.to_string()),
                deleted: true,
            },
        );
        self
    }

    /// Make fetches of `secret_id` fail with `error`.
    pub fn with_failure(mut self, secret_id: &str, error: ClientError) -> Self {
        self.failures.insert(secret_id.to_string(), error);
        self
    }

    /// Make listings of `prefix` fail.
    pub fn with_list_failure(mut self, prefix: &str) -> Self {
        self.list_failures.insert(prefix.to_string());
        self
    }

    /// Set the listing page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// ARN the store reports for `name`.
    pub fn arn_for(name: &str) -> String {
        format!("{}{}{}", ARN_PREFIX, name, ARN_SUFFIX)
    }

    /// Secret ids passed to `get_secret_value`, in call order.
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.borrow().clone()
    }

    /// Number of `list_secrets` calls made.
    pub fn list_calls(&self) -> usize {
        *self.list_calls.borrow()
    }

    fn resolve(&self, secret_id: &str) -> Option<(&String, &Entry)> {
        let name = secret_id
            .strip_prefix(ARN_PREFIX)
            .and_then(|rest| rest.strip_suffix(ARN_SUFFIX))
            .unwrap_or(secret_id);
        self.secrets.get_key_value(name)
    }
}

impl SecretsClient for MemoryClient {
    fn get_secret_value(&self, secret_id: &str) -> Result<SecretValueResponse, ClientError> {
        self.fetched.borrow_mut().push(secret_id.to_string());

        if let Some(error) = self.failures.get(secret_id) {
            return Err(error.clone());
        }

        let (name, entry) = self
            .resolve(secret_id)
            .filter(|(_, entry)| !entry.deleted)
            .ok_or_else(|| ClientError::NotFound(secret_id.to_string()))?;

        let (secret_string, secret_binary) = match &entry.value {
            Payload::String(s) => (Some(s.clone()), None),
            Payload::Binary(b) => (None, Some(b.clone())),
        };

        Ok(SecretValueResponse {
            name: Some(name.clone()),
            secret_string,
            secret_binary,
        })
    }

    fn list_secrets(
        &self,
        prefix: &str,
        next_token: Option<&str>,
    ) -> Result<SecretPage, ClientError> {
        *self.list_calls.borrow_mut() += 1;

        if self.list_failures.contains(prefix) {
            return Err(ClientError::AccessDenied(format!("ListSecrets {}", prefix)));
        }

        let offset = match next_token {
            Some(token) => token
                .parse::<usize>()
                .map_err(|_| ClientError::Service(format!("invalid next token: {}", token)))?,
            None => 0,
        };

        let matching: Vec<SecretSummary> = self
            .secrets
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(name, entry)| SecretSummary {
                name: name.clone(),
                deleted: entry.deleted,
            })
            .collect();

        let end = (offset + self.page_size).min(matching.len());
        let entries = matching.get(offset..end).unwrap_or_default().to_vec();
        let next_token = (end < matching.len()).then(|| end.to_string());

        Ok(SecretPage {
            entries,
            next_token,
        })
    }
}
