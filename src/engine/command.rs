//! Engine command builder
//!
//! Builds and executes single engine invocations with consistent error
//! handling. Interactive and streaming commands inherit the caller's stdio;
//! capture mode is only used where the output belongs to the containerized
//! process (e.g. `pip freeze`), never to parse the engine's own output.

use crate::error::PydockError;
use anyhow::{Context as _, Result};
use std::process::{Command, Stdio};
use tracing::debug;

/// A single engine invocation under construction
#[derive(Debug, Clone)]
pub struct EngineCommand {
    binary: String,
    sudo: bool,
    args: Vec<String>,
}

impl EngineCommand {
    pub(crate) fn new(binary: &str, sudo: bool, subcommand: &str) -> Self {
        Self {
            binary: binary.to_owned(),
            sudo,
            args: vec![subcommand.to_owned()],
        }
    }

    /// Add a single argument
    #[must_use]
    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The invocation as a single displayable line
    #[must_use]
    pub fn rendered(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 2);
        if self.sudo {
            parts.push("sudo");
        }
        parts.push(&self.binary);
        parts.extend(self.args.iter().map(String::as_str));
        parts.join(" ")
    }

    fn build_command(&self) -> Command {
        let mut cmd = if self.sudo {
            let mut cmd = Command::new("sudo");
            cmd.arg(&self.binary);
            cmd
        } else {
            Command::new(&self.binary)
        };
        cmd.args(&self.args);
        cmd
    }

    /// Execute with inherited stdio, blocking until the command exits.
    ///
    /// A non-zero exit status becomes an engine error carrying that status,
    /// so the process exit code can propagate it verbatim.
    pub fn run(self) -> Result<()> {
        debug!("Running: {}", self.rendered());

        let status = self
            .build_command()
            .status()
            .with_context(|| format!("Failed to execute: {}", self.rendered()))?;

        if status.success() {
            return Ok(());
        }

        Err(PydockError::engine(
            format!("Command failed: {}", self.rendered()),
            status.code().unwrap_or(1),
        )
        .into())
    }

    /// Execute with captured output, blocking until the command exits.
    ///
    /// Returns the command's stdout on success; stderr is passed through to
    /// the caller's stderr either way.
    pub fn run_captured(self) -> Result<String> {
        debug!("Running (captured): {}", self.rendered());

        let output = self
            .build_command()
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .with_context(|| format!("Failed to execute: {}", self.rendered()))?;

        if !output.status.success() {
            return Err(PydockError::engine(
                format!("Command failed: {}", self.rendered()),
                output.status.code().unwrap_or(1),
            )
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Execute silently, ignoring the exit status.
    ///
    /// Used for best-effort cleanup (e.g. removing a stale staging container
    /// left behind by an interrupted run).
    pub fn run_best_effort(self) {
        debug!("Running (best effort): {}", self.rendered());

        let _result = self
            .build_command()
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
    }
}
