//! Configuration management module
//!
//! Handles the persisted per-store settings and the environment metadata
//! registry kept in sync with the `envs/` directory.

pub mod store;
pub mod yaml;

pub use store::{Store, StoreMode};

use crate::system::System;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fallback user name when the environment gives no answer
const DEFAULT_USERNAME: &str = "dev";

/// Main configuration structure, persisted as `pydock.yaml` at the store root
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Container engine settings
    #[serde(default)]
    pub docker: DockerSettings,

    /// Defaults applied to every environment
    #[serde(default)]
    pub environment: EnvironmentSettings,

    /// Recorded metadata per environment name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub envs: BTreeMap<String, EnvRecord>,
}

/// Settings controlling how the container engine is invoked
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DockerSettings {
    /// Engine executable to invoke
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Registry prefix prepended to the base image name (e.g. "mirror.local/")
    #[serde(default)]
    pub repository: String,

    /// Prefix engine invocations with `sudo`
    #[serde(default)]
    pub sudo: bool,
}

/// Defaults applied to environments at creation time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentSettings {
    /// User created inside images and used for interactive shells
    #[serde(default)]
    pub username: String,
}

/// Metadata recorded for a single environment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvRecord {
    /// Python version the environment was created with
    pub python: String,
}

fn default_binary() -> String {
    return "docker".to_owned();
}

impl Default for DockerSettings {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            repository: String::new(),
            sudo: false,
        }
    }
}

impl Settings {
    /// Load settings from the store root, falling back to defaults when the
    /// file does not exist yet
    pub fn load(system: &dyn System, store: &Store) -> anyhow::Result<Self> {
        let mut settings = yaml::load_settings(system, &store.config_file())?;
        settings.fill_defaults(system);
        Ok(settings)
    }

    /// Write settings back to the store root
    pub fn save(&self, system: &dyn System, store: &Store) -> anyhow::Result<()> {
        yaml::save_settings(system, &store.config_file(), self)
    }

    /// Fill in values that depend on the invoking user's environment
    fn fill_defaults(&mut self, system: &dyn System) {
        if self.environment.username.is_empty() {
            self.environment.username = system
                .env_var("USER")
                .or_else(|_| system.env_var("USERNAME"))
                .unwrap_or_else(|_| DEFAULT_USERNAME.to_owned());
        }
        if self.docker.binary.is_empty() {
            self.docker.binary = default_binary();
        }
    }
}
