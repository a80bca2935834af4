//! Secrets store clients.
//!
//! The pipeline only needs two calls from the store: fetch one secret value
//! and list secret names under a prefix. [`SecretsClient`] captures that
//! surface so the pipeline can run against AWS or an in-memory store.
//!
//! ## Backends
//!
//! - **AWS Secrets Manager**: Feature-gated (`aws`, on by default).
//! - **Memory**: Always available. Backs the tests and benches.

use crate::error::ClientError;

#[cfg(feature = "aws")]
pub mod aws;

pub mod memory;

#[cfg(feature = "aws")]
pub use aws::AwsClient;
pub use memory::MemoryClient;

/// Raw response of a single secret lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretValueResponse {
    /// Canonical secret name as known by the store
    pub name: Option<String>,
    /// String payload
    pub secret_string: Option<String>,
    /// Binary payload
    pub secret_binary: Option<Vec<u8>>,
}

/// One entry of a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretSummary {
    pub name: String,
    /// Scheduled for deletion
    pub deleted: bool,
}

/// A page of listing results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretPage {
    pub entries: Vec<SecretSummary>,
    /// Token for the next page, `None` on the last page
    pub next_token: Option<String>,
}

/// Secrets store client.
///
/// Calls are blocking. Each call completes before the pipeline issues the
/// next one.
pub trait SecretsClient {
    /// Fetch the current value of a secret by name or ARN.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` for missing secrets, denied access, throttling
    /// and transport failures. Implementations do not retry.
    fn get_secret_value(&self, secret_id: &str) -> Result<SecretValueResponse, ClientError>;

    /// List secrets whose name starts with `prefix`.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Name prefix to match
    /// * `next_token` - Token from the previous page, `None` for the first
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the listing call fails.
    fn list_secrets(&self, prefix: &str, next_token: Option<&str>)
        -> Result<SecretPage, ClientError>;
}
