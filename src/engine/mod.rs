//! Container engine invocation
//!
//! The engine is treated as an opaque command-line service: this module only
//! constructs invocations and inspects exit status. Which executable is used
//! (and whether it runs under `sudo`) comes from the configuration store.

pub mod command;

pub use command::EngineCommand;

use crate::config::DockerSettings;
use crate::error::PydockError;
use anyhow::Result;

/// Handle for invoking the configured container engine
#[derive(Debug, Clone)]
pub struct Engine {
    binary: String,
    sudo: bool,
}

impl Engine {
    /// Build an engine handle from the persisted settings
    #[must_use]
    pub fn from_settings(settings: &DockerSettings) -> Self {
        Self {
            binary: settings.binary.clone(),
            sudo: settings.sudo,
        }
    }

    /// Check that the engine executable can be found before starting a
    /// sequence of invocations
    pub fn preflight(&self) -> Result<()> {
        which::which(&self.binary).map_err(|_err| {
            PydockError::configuration(format!(
                "Container engine '{}' not found in PATH; install it or set docker.binary",
                self.binary
            ))
        })?;
        Ok(())
    }

    /// Start building an engine invocation for the given subcommand
    /// (e.g. "build", "run", "commit")
    #[must_use]
    pub fn command(&self, subcommand: &str) -> EngineCommand {
        EngineCommand::new(&self.binary, self.sudo, subcommand)
    }
}
