//! Command-line interface.

pub mod cleanup;
pub mod completions;
pub mod fetch;
pub mod output;

use clap::{Args, Parser, Subcommand};

use crate::core::constants::GITHUB_ENV;
use crate::core::sink::{EnvSink, GithubEnv, ProcessEnv};
use crate::error::Result;

/// smenv - Load AWS Secrets Manager secrets into CI job environment variables.
#[derive(Parser)]
#[command(
    name = "smenv",
    about = "Load AWS Secrets Manager secrets into CI job environment variables",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Fetch secrets and export them as environment variables
    Fetch(FetchArgs),

    /// Unset every variable exported by a previous fetch
    Cleanup,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Inputs for `fetch`.
#[derive(Args, Debug, Default)]
pub struct FetchArgs {
    /// Secret references, one per line: [ALIAS,]NAME_OR_ARN, or a prefix ending in '*'
    #[arg(long = "secret-ids", env = "INPUT_SECRET-IDS", value_name = "LINES")]
    pub secret_ids: Vec<String>,

    /// Flatten JSON object secrets into one variable per key
    #[arg(
        long,
        env = "INPUT_PARSE-JSON-SECRETS",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub parse_json_secrets: Option<String>,

    /// Case of derived variable names: none, uppercase or lowercase
    #[arg(long, env = "INPUT_NAME-TRANSFORMATION", value_name = "MODE")]
    pub name_transformation: Option<String>,

    /// AWS region of the secrets
    #[arg(long, env = "AWS_DEFAULT_REGION")]
    pub region: Option<String>,

    /// Command to run with the secrets in its environment
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Execute a command.
pub fn execute(command: Command) -> Result<()> {
    match command {
        Command::Fetch(args) => fetch::execute(args),
        Command::Cleanup => cleanup::execute(),
        Command::Completions { shell } => completions::execute(shell),
    }
}

/// Sink for the current host.
///
/// Inside a GitHub runner variables go to `$GITHUB_ENV`; elsewhere they can
/// only live in this process.
pub(crate) fn host_sink() -> Result<Box<dyn EnvSink>> {
    if std::env::var_os(GITHUB_ENV).is_some_and(|path| !path.is_empty()) {
        return Ok(Box::new(GithubEnv::from_env()?));
    }

    output::warn("GITHUB_ENV is not set: variables only last for this process");
    Ok(Box::new(ProcessEnv))
}
