//! Shared helpers for the integration suite.

#![allow(dead_code)]

use anyhow::{Context, Result};
use hydrate_cli::test_utils::DocTree;
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A document tree the binary runs in, with its own (absent by default)
/// config file.
///
/// Derefs to [`DocTree`] for writing and reading project files.
pub struct TestProject {
    docs: DocTree,
    config_path: PathBuf,
}

impl Deref for TestProject {
    type Target = DocTree;

    fn deref(&self) -> &DocTree {
        &self.docs
    }
}

impl TestProject {
    /// Create an empty project.
    pub fn new() -> Result<Self> {
        let docs = DocTree::new()?;
        let config_path = docs.path(".hydrate/config.toml");
        Ok(Self {
            docs,
            config_path,
        })
    }

    /// The directory commands run in.
    pub fn project_path(&self) -> &Path {
        self.docs.root()
    }

    /// Write the config file the binary picks up through `HYDRATE_CONFIG`.
    pub fn write_config(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.config_path, content)
            .with_context(|| format!("Failed to write {}", self.config_path.display()))?;
        Ok(())
    }

    /// Run the hydrate binary in the project directory.
    pub fn run_hydrate(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = self.command(args).output().context("Failed to run hydrate command")?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }

    /// A prepared command, for use with `assert_cmd` assertions.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_hydrate"));
        command
            .args(args)
            .current_dir(self.docs.root())
            .env("HYDRATE_CONFIG", &self.config_path)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        command
    }
}

/// Command output helper
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Assert the command succeeded
    pub fn assert_success(&self) -> &Self {
        assert!(self.success, "Command failed with code {:?}\nStderr: {}", self.code, self.stderr);
        self
    }

    /// Assert the command failed with exit status 1
    pub fn assert_failure(&self) -> &Self {
        assert_eq!(self.code, Some(1), "Expected exit code 1\nStdout: {}", self.stdout);
        self
    }

    /// Assert stdout contains the given text
    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Expected stdout to contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }

    /// Assert stderr contains the given text
    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "Expected stderr to contain '{}'\nActual stderr: {}",
            text,
            self.stderr
        );
        self
    }
}
