//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Variables a runner or developer shell may carry into the child.
const INHERITED: &[&str] = &[
    "GITHUB_ENV",
    "GITHUB_ACTIONS",
    "RUNNER_DEBUG",
    "SMENV_LOG",
    "SECRETS_LIST_CLEAN_UP",
    "INPUT_SECRET-IDS",
    "INPUT_PARSE-JSON-SECRETS",
    "INPUT_NAME-TRANSFORMATION",
    "AWS_DEFAULT_REGION",
];

impl Test {
    /// Create an smenv command outside any runner.
    ///
    /// Returns a Command with runner and input variables removed, colors
    /// disabled and the test directory as working directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("smenv").expect("failed to find smenv binary");
        for name in INHERITED {
            cmd.env_remove(name);
        }
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Create an smenv command as a GitHub Actions step.
    ///
    /// `$GITHUB_ENV` points at [`Test::env_file`].
    pub fn runner_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env("GITHUB_ACTIONS", "true");
        cmd.env("GITHUB_ENV", self.env_file());
        cmd
    }

    /// Shortcut for `smenv fetch` with extra arguments.
    pub fn fetch(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("fetch")
            .args(args)
            .output()
            .expect("failed to run smenv fetch")
    }

    /// Shortcut for `smenv cleanup` on a runner with `list` recorded.
    pub fn cleanup(&self, list: &str) -> Output {
        self.runner_cmd()
            .arg("cleanup")
            .env("SECRETS_LIST_CLEAN_UP", list)
            .output()
            .expect("failed to run smenv cleanup")
    }
}
