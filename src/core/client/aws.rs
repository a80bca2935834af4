//! AWS Secrets Manager client.
//!
//! Enable with `--features aws` (on by default).
//!
//! Credentials come from the default provider chain (`AWS_ACCESS_KEY_ID`,
//! web identity, instance profile, ...). The region comes from `--region`,
//! `AWS_DEFAULT_REGION` or the provider chain.

use aws_config::{AppName, BehaviorVersion, Region};
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::types::{Filter, FilterNameStringType};
use tracing::{debug, trace};

use super::{SecretPage, SecretSummary, SecretValueResponse, SecretsClient};
use crate::core::constants::{LIST_SECRETS_PAGE_SIZE, USER_AGENT_APP_NAME};
use crate::error::ClientError;

/// Secrets Manager client driven by a private current-thread runtime.
///
/// The AWS SDK is async; the pipeline is not. Each call blocks on the runtime
/// until the request completes.
pub struct AwsClient {
    runtime: tokio::runtime::Runtime,
    client: aws_sdk_secretsmanager::Client,
}

impl AwsClient {
    /// Build a client from the environment.
    ///
    /// # Arguments
    ///
    /// * `region` - Region override; `None` defers to the provider chain
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Runtime` if the tokio runtime cannot be created.
    pub fn from_env(region: Option<String>) -> Result<Self, ClientError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ClientError::Runtime(format!("failed to create runtime: {}", e)))?;

        let config = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest());
            if let Some(region) = region {
                loader = loader.region(Region::new(region));
            }
            if let Ok(app_name) = AppName::new(USER_AGENT_APP_NAME) {
                loader = loader.app_name(app_name);
            }
            loader.load().await
        });

        debug!(
            region = config.region().map(|r| r.as_ref()).unwrap_or("<unset>"),
            "created secrets manager client"
        );

        Ok(Self {
            runtime,
            client: aws_sdk_secretsmanager::Client::new(&config),
        })
    }
}

impl SecretsClient for AwsClient {
    fn get_secret_value(&self, secret_id: &str) -> Result<SecretValueResponse, ClientError> {
        trace!(secret_id, "GetSecretValue");

        let output = self
            .runtime
            .block_on(self.client.get_secret_value().secret_id(secret_id).send())
            .map_err(classify)?;

        Ok(SecretValueResponse {
            name: output.name().map(str::to_string),
            secret_string: output.secret_string().map(str::to_string),
            secret_binary: output.secret_binary().map(|blob| blob.as_ref().to_vec()),
        })
    }

    fn list_secrets(
        &self,
        prefix: &str,
        next_token: Option<&str>,
    ) -> Result<SecretPage, ClientError> {
        trace!(prefix, has_token = next_token.is_some(), "ListSecrets");

        let filter = Filter::builder()
            .key(FilterNameStringType::Name)
            .values(prefix)
            .build();

        let output = self
            .runtime
            .block_on(
                self.client
                    .list_secrets()
                    .filters(filter)
                    .include_planned_deletion(false)
                    .max_results(LIST_SECRETS_PAGE_SIZE)
                    .set_next_token(next_token.map(str::to_string))
                    .send(),
            )
            .map_err(classify)?;

        let entries = output
            .secret_list()
            .iter()
            .filter_map(|entry| {
                Some(SecretSummary {
                    name: entry.name()?.to_string(),
                    deleted: entry.deleted_date().is_some(),
                })
            })
            .collect();

        Ok(SecretPage {
            entries,
            next_token: output.next_token().map(str::to_string),
        })
    }
}

/// Map an SDK error onto the client error kinds.
fn classify<E, R>(err: SdkError<E, R>) -> ClientError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(&err).to_string();

    if matches!(err, SdkError::DispatchFailure(_) | SdkError::TimeoutError(_)) {
        return ClientError::Transport(message);
    }

    classify_code(err.code(), message)
}

/// Map a service error code onto the client error kinds.
fn classify_code(code: Option<&str>, message: String) -> ClientError {
    match code {
        Some("ResourceNotFoundException") => ClientError::NotFound(message),
        Some("AccessDeniedException" | "UnrecognizedClientException") => {
            ClientError::AccessDenied(message)
        }
        Some("ThrottlingException" | "TooManyRequestsException" | "RequestLimitExceeded") => {
            ClientError::Throttled(message)
        }
        _ => ClientError::Service(message),
    }
}
