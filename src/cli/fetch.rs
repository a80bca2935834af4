//! Fetch command.
//!
//! Loads the configured secrets into the environment. With a trailing
//! command, the secrets are injected into this process and the command runs
//! with them; otherwise they are exported for the following job steps.

use tracing::debug;

use crate::cli::{host_sink, output, FetchArgs};
use crate::core::client::SecretsClient;
use crate::core::config::Config;
use crate::core::run::{run, RunReport};
use crate::core::sink::ProcessEnv;
use crate::error::{Error, Result};

/// Fetch secrets into the environment.
pub fn execute(args: FetchArgs) -> Result<()> {
    // Validate inputs before touching the network
    let config = Config::from_inputs(
        &args.secret_ids,
        args.parse_json_secrets.as_deref(),
        args.name_transformation.as_deref(),
    )?;
    let client = connect(args.region)?;

    if args.command.is_empty() {
        let mut sink = host_sink()?;
        let report = run(client.as_ref(), sink.as_mut(), &config)?;
        return finish(report);
    }

    let report = run(client.as_ref(), &mut ProcessEnv, &config)?;
    finish(report)?;

    let exit_code = run_command(&args.command)?;
    std::process::exit(exit_code);
}

#[cfg(feature = "aws")]
fn connect(region: Option<String>) -> Result<Box<dyn SecretsClient>> {
    let client = crate::core::client::AwsClient::from_env(region)?;
    Ok(Box::new(client))
}

#[cfg(not(feature = "aws"))]
fn connect(_region: Option<String>) -> Result<Box<dyn SecretsClient>> {
    Err(Error::Other(
        "AWS support not compiled. Rebuild with: cargo install smenv --features aws".to_string(),
    ))
}

/// Report the outcome; any failed secret fails the command.
///
/// Every failure but the last is printed here, the last is returned.
fn finish(report: RunReport) -> Result<()> {
    debug!(names = ?report.injected, "injected variables");
    output::success(&format!(
        "loaded {} variable(s) from {} secret(s)",
        report.injected.len(),
        report.succeeded.len()
    ));

    let mut failed = report.failed;
    match failed.pop() {
        None => Ok(()),
        Some(last) => {
            for failure in &failed {
                output::error(&failure.to_string());
            }
            Err(Error::Fetch(last))
        }
    }
}

/// Run a command that inherits this process's environment.
fn run_command(command: &[String]) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::Other("no command specified".to_string()))?;

    let status = std::process::Command::new(program).args(args).status()?;
    // Terminated by a signal: no code, report failure
    Ok(status.code().unwrap_or(1))
}
