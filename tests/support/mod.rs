//! Test support utilities for smenv integration tests.
//!
//! Provides an isolated runner environment and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated runner directory.
///
/// Child processes get an explicit environment, so tests can run in
/// parallel and on a real runner without picking up its variables.
pub struct Test {
    /// Temporary directory holding the environment file
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Path of the `$GITHUB_ENV` file for this test.
    pub fn env_file(&self) -> PathBuf {
        self.dir.path().join("github_env")
    }

    /// Contents of the environment file, empty if nothing was written.
    pub fn env_file_contents(&self) -> String {
        std::fs::read_to_string(self.env_file()).unwrap_or_default()
    }
}
