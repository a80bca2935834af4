//! GitHub Actions environment file sink.
//!
//! The runner loads `$GITHUB_ENV` between steps. Each variable is appended
//! as a heredoc block with a random delimiter so values may span lines:
//!
//! ```text
//! NAME<<ghadelimiter_6f1c...
//! value
//! ghadelimiter_6f1c...
//! ```

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use uuid::Uuid;

use super::{check_variable, EnvSink};
use crate::core::constants::{DELIMITER_PREFIX, GITHUB_ENV};
use crate::error::SinkError;

/// Appends variables to the runner's environment file.
pub struct GithubEnv {
    path: PathBuf,
    commands: Box<dyn Write>,
    mirror_process: bool,
}

impl GithubEnv {
    /// Sink writing to `path`, with workflow commands discarded and the
    /// process environment left alone.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            commands: Box::new(io::sink()),
            mirror_process: false,
        }
    }

    /// Sink for the current runner step.
    ///
    /// Writes to `$GITHUB_ENV`, prints workflow commands to stdout and
    /// mirrors every change into this process.
    ///
    /// # Errors
    ///
    /// Returns `SinkError::MissingEnvFile` outside a runner.
    pub fn from_env() -> Result<Self, SinkError> {
        let path = std::env::var_os(GITHUB_ENV)
            .filter(|p| !p.is_empty())
            .ok_or(SinkError::MissingEnvFile)?;
        debug!(path = %Path::new(&path).display(), "using GitHub environment file");

        Ok(Self {
            path: path.into(),
            commands: Box::new(io::stdout()),
            mirror_process: true,
        })
    }

    /// Send workflow commands (masks) to `writer`.
    pub fn with_commands(mut self, writer: impl Write + 'static) -> Self {
        self.commands = Box::new(writer);
        self
    }

    fn append(&self, name: &str, value: &str) -> Result<(), SinkError> {
        check_variable(name, value)?;

        let delimiter = format!("{}{}", DELIMITER_PREFIX, Uuid::new_v4());
        if name.contains(&delimiter) || value.contains(&delimiter) {
            return Err(SinkError::DelimiterCollision(name.to_string()));
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}<<{}", name, delimiter)?;
        writeln!(file, "{}", value)?;
        writeln!(file, "{}", delimiter)?;
        file.flush()?;

        Ok(())
    }
}

impl EnvSink for GithubEnv {
    fn set(&mut self, name: &str, value: &str) -> Result<(), SinkError> {
        trace!(name, "exporting variable");
        self.append(name, value)?;
        if self.mirror_process {
            std::env::set_var(name, value);
        }
        Ok(())
    }

    fn unset(&mut self, name: &str) -> Result<(), SinkError> {
        trace!(name, "clearing variable");
        self.append(name, "")?;
        if self.mirror_process {
            std::env::remove_var(name);
        }
        Ok(())
    }

    fn mask(&mut self, value: &str) -> Result<(), SinkError> {
        for line in value.lines().map(str::trim).filter(|l| !l.is_empty()) {
            writeln!(self.commands, "::add-mask::{}", escape_data(line))?;
        }
        self.commands.flush()?;
        Ok(())
    }
}

/// Escape data for a workflow command.
pub(crate) fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
