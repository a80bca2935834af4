//! Test fixtures and sample data.

use smenv::core::client::MemoryClient;

/// JSON object secret with two credentials.
pub const DB_CREDENTIALS: &str = r#"{"user":"admin","password":"hunter2"}"#;

/// JSON object secret with nested and non-string values.
pub const MIXED_JSON: &str = r#"{"host":"db.internal","port":5432,"tls":true,"extra":{"a":1}}"#;

/// Multi-line plain text secret.
pub const PEM_KEY: &str = "-----BEGIN KEY-----\nabc123\n-----END KEY-----";

/// A store shaped like a typical project account.
pub fn sample_store() -> MemoryClient {
    MemoryClient::new()
        .with_secret("prod/db", DB_CREDENTIALS)
        .with_secret("prod/api-key", "sk-live-123")
        .with_secret("prod/tls", PEM_KEY)
        .with_secret("prod/settings", MIXED_JSON)
        .with_secret("staging/db", DB_CREDENTIALS)
        .with_deleted_secret("prod/retired", "old")
}
