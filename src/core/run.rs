//! Run orchestration.
//!
//! Expands the configured references, then fetches and injects each secret
//! in turn. A failed fetch is recorded and the loop moves on, so every secret
//! that can be loaded is loaded. The names written are exported once at the
//! end as the cleanup list.

use tracing::{debug, info, warn};

use crate::core::client::SecretsClient;
use crate::core::config::Config;
use crate::core::constants::CLEANUP_NAME;
use crate::core::fetcher::{fetch_secret, SecretValue};
use crate::core::inject::{inject_secret, is_json_object};
use crate::core::lister::build_secret_list;
use crate::core::reference::{is_secret_arn, SecretRef};
use crate::core::sink::EnvSink;
use crate::error::{ClientError, Error, FetchError, Result, SinkError};

/// Outcome of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Variable names written, in write order
    pub injected: Vec<String>,
    /// Secret ids fetched and injected
    pub succeeded: Vec<String>,
    /// Secret ids that failed, in processing order
    pub failed: Vec<FetchError>,
}

impl RunReport {
    /// True when every secret was fetched.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// The most recent failure.
    pub fn last_failure(&self) -> Option<&FetchError> {
        self.failed.last()
    }
}

/// Load every configured secret into `sink`.
///
/// # Errors
///
/// Returns `Error::Config` or `Error::List` before any secret is fetched,
/// and `Error::Sink` if writing a variable fails. Fetch failures, and values
/// the environment cannot hold, are not errors; they are collected in
/// [`RunReport::failed`].
pub fn run(
    client: &dyn SecretsClient,
    sink: &mut dyn EnvSink,
    config: &Config,
) -> Result<RunReport> {
    info!("building secrets list");
    let secrets = build_secret_list(client, &config.secret_ids, config.transformation)?;
    debug!(count = secrets.len(), "secrets to fetch");

    info!(
        "secret names may be transformed to be valid environment variables; enable debug logging to see them"
    );

    let mut report = RunReport::default();

    for reference in &secrets {
        debug!(secret_id = %reference.id, "processing secret");

        let secret = match fetch_secret(client, &reference.id) {
            Ok(secret) => secret,
            Err(err) => {
                warn!(secret_id = %reference.id, "failed to fetch secret");
                report.failed.push(err);
                continue;
            }
        };

        let name = resolve_name(reference, &secret, config.parse_json);
        let names = match inject_secret(
            sink,
            &name,
            &secret.value,
            config.parse_json,
            config.transformation,
        ) {
            Ok(names) => names,
            Err(SinkError::NulValue(variable)) => {
                warn!(secret_id = %reference.id, variable = %variable, "secret value contains a NUL byte");
                report.failed.push(FetchError {
                    secret_id: reference.id.clone(),
                    source: ClientError::InvalidValue(format!(
                        "'{}' would contain a NUL byte, which environment variables cannot hold",
                        variable
                    )),
                });
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        for injected in &names {
            if report.injected.contains(injected) {
                warn!(
                    name = %injected,
                    "variable name already set by another secret; use an alias to keep names unique"
                );
            }
        }

        report.injected.extend(names);
        report.succeeded.push(reference.id.clone());
    }

    let cleanup = serde_json::to_string(&report.injected)
        .map_err(|e| Error::Other(format!("failed to encode cleanup list: {}", e)))?;
    sink.set(CLEANUP_NAME, &cleanup)?;

    info!(
        injected = report.injected.len(),
        failed = report.failed.len(),
        "completed adding secrets"
    );

    Ok(report)
}

/// Name passed to the injector for a fetched secret.
///
/// A blank alias only survives when the value will be flattened, so that
/// JSON keys are exported without a prefix. Without an alias, ARNs resolve
/// to the canonical secret name and plain ids to themselves.
fn resolve_name(reference: &SecretRef, secret: &SecretValue, parse_json: bool) -> String {
    if reference.has_blank_alias() && parse_json && is_json_object(&secret.value) {
        return String::new();
    }

    match reference.alias.as_deref() {
        Some(alias) if !alias.is_empty() => alias.to_string(),
        _ if is_secret_arn(&reference.id) => secret.name.clone(),
        _ => reference.id.clone(),
    }
}
