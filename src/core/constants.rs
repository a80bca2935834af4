//! Constants used throughout smenv.
//!
//! Centralizes magic strings and configuration values.

/// Environment variable holding the JSON list of injected names.
pub const CLEANUP_NAME: &str = "SECRETS_LIST_CLEAN_UP";

/// Separator between an alias and a secret id in an input line.
pub const ALIAS_SEPARATOR: char = ',';

/// Trailing marker requesting expansion of a name prefix.
pub const PREFIX_MARKER: char = '*';

/// Separator between a base name and a flattened JSON key.
pub const KEY_SEPARATOR: &str = "_";

/// Page size requested from the ListSecrets API.
pub const LIST_SECRETS_PAGE_SIZE: i32 = 100;

/// Application name reported to AWS in the user agent.
pub const USER_AGENT_APP_NAME: &str = "github-action";

/// File the GitHub runner reads exported variables from.
pub const GITHUB_ENV: &str = "GITHUB_ENV";

/// Set to `true` by the GitHub runner.
pub const GITHUB_ACTIONS: &str = "GITHUB_ACTIONS";

/// Set to `1` when a workflow is re-run with debug logging.
pub const RUNNER_DEBUG: &str = "RUNNER_DEBUG";

/// Prefix of the heredoc delimiter used in the GitHub env file.
pub const DELIMITER_PREFIX: &str = "ghadelimiter_";
