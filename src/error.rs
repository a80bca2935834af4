//! Error types.
//!
//! `Error` is the top-level type returned by the CLI and the orchestrator.
//! Each concern has its own enum so callers can match on the failure kind.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to list secrets with prefix '{prefix}': {source}")]
    List {
        prefix: String,
        #[source]
        source: ClientError,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("invalid cleanup list: {0}")]
    Cleanup(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Input validation failures. Raised before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no secret ids provided")]
    NoSecretIds,

    #[error("invalid name transformation '{0}': expected one of none, uppercase, lowercase")]
    InvalidTransformation(String),

    #[error("input '{input}' does not meet YAML 1.2 core schema: got '{value}', expected true or false")]
    InvalidBoolean { input: String, value: String },

    #[error("the alias '{0}' is not a valid environment name: use letters, digits and underscores only, matching the name transformation")]
    InvalidAlias(String),

    #[error("empty secret id in input '{0}'")]
    EmptySecretId(String),

    #[error("invalid prefix '{0}': use a single '*' at the end of a non-empty prefix")]
    InvalidPrefix(String),
}

/// Failures reported by a secrets store client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("secret not found: {0}")]
    NotFound(String),

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("request throttled: {0}")]
    Throttled(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("service error: {0}")]
    Service(String),

    #[error("client runtime error: {0}")]
    Runtime(String),

    #[error("invalid secret value: {0}")]
    InvalidValue(String),
}

/// A single secret could not be fetched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to fetch secret '{secret_id}': {source}")]
pub struct FetchError {
    pub secret_id: String,
    #[source]
    pub source: ClientError,
}

/// Failures writing to an environment sink.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("GITHUB_ENV is not set")]
    MissingEnvFile,

    #[error("unexpected delimiter collision while writing '{0}'")]
    DelimiterCollision(String),

    #[error("invalid variable name '{0}'")]
    InvalidName(String),

    #[error("value of '{0}' contains a NUL byte")]
    NulValue(String),

    #[error("failed to write environment file: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
