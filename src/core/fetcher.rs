//! Single secret retrieval.

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::client::SecretsClient;
use crate::error::{ClientError, FetchError};

/// A fetched secret.
///
/// The value is wiped from memory when dropped.
#[derive(Debug)]
pub struct SecretValue {
    /// Canonical name as known by the store
    pub name: String,
    pub value: Zeroizing<String>,
}

/// Fetch one secret by name or ARN.
///
/// Makes exactly one call. A string payload wins over a binary payload;
/// binary payloads are decoded as UTF-8 with invalid sequences replaced. A
/// secret with neither payload has an empty value.
///
/// # Errors
///
/// Returns `FetchError` tagged with `secret_id` if the call fails or the
/// response carries no secret name.
pub fn fetch_secret(client: &dyn SecretsClient, secret_id: &str) -> Result<SecretValue, FetchError> {
    let tag = |source: ClientError| FetchError {
        secret_id: secret_id.to_string(),
        source,
    };

    let response = client.get_secret_value(secret_id).map_err(tag)?;

    let name = response
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| tag(ClientError::Service("invalid name for secret".to_string())))?;

    let value = match (response.secret_string, response.secret_binary) {
        (Some(s), _) => s,
        (None, Some(bytes)) => String::from_utf8_lossy(&bytes).into_owned(),
        (None, None) => String::new(),
    };

    debug!(secret_id, name = %name, "fetched secret");

    Ok(SecretValue {
        name,
        value: Zeroizing::new(value),
    })
}
