//! smenv - Load AWS Secrets Manager secrets into CI job environment variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use smenv::cli::output;
use smenv::cli::{execute, Cli};
use smenv::core::constants::RUNNER_DEBUG;
use smenv::error::{ClientError, ConfigError, Error, FetchError};

fn main() {
    let cli = Cli::parse();

    // SMENV_LOG wins; a debug re-run of the workflow turns on debug logs too
    let filter = EnvFilter::try_from_env("SMENV_LOG").unwrap_or_else(|_| {
        let runner_debug = std::env::var(RUNNER_DEBUG).is_ok_and(|v| v == "1");
        if cli.verbose || runner_debug {
            EnvFilter::new("smenv=debug")
        } else {
            EnvFilter::new("smenv=info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let error_msg = e.to_string();
        let suggestion = match &e {
            Error::Config(ConfigError::NoSecretIds) => {
                Some("pass --secret-ids or set INPUT_SECRET-IDS")
            }
            Error::Config(ConfigError::InvalidTransformation(_)) => {
                Some("use --name-transformation none, uppercase or lowercase")
            }
            Error::List {
                source: ClientError::AccessDenied(_),
                ..
            }
            | Error::Fetch(FetchError {
                source: ClientError::AccessDenied(_),
                ..
            }) => Some("check the IAM permissions of the job's AWS credentials"),
            Error::Fetch(FetchError {
                source: ClientError::NotFound(_),
                ..
            }) => Some("check the secret name or ARN and the AWS region"),
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
