//! Environment registry
//!
//! Lists, creates, and looks up environment records under the resolved store
//! root. An environment on disk is a directory under `envs/<name>/` holding a
//! `dockerfile` and a `requirements.txt`; its Python version is recorded in
//! the configuration file so the two stay in sync.

pub mod template;

use crate::config::{EnvRecord, Settings, Store};
use crate::error::PydockError;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::PathBuf;

/// File name of the generated dockerfile inside an environment directory
pub const DOCKERFILE_NAME: &str = "dockerfile";

/// File name of the requirements listing inside an environment directory
pub const REQUIREMENTS_NAME: &str = "requirements.txt";

/// A single environment record
#[derive(Debug, Clone)]
pub struct Environment {
    /// Unique name, doubles as the image tag suffix
    pub name: String,
    /// Python version recorded at creation time, if known
    pub python: Option<String>,
    /// Directory holding the environment's template files
    pub dir: PathBuf,
}

impl Environment {
    /// Tag of the Docker image backing this environment
    #[must_use]
    pub fn image_tag(&self) -> String {
        format!("pydock-{}:latest", self.name)
    }

    /// Path of the generated dockerfile
    #[must_use]
    pub fn dockerfile(&self) -> PathBuf {
        self.dir.join(DOCKERFILE_NAME)
    }

    /// Path of the requirements listing
    #[must_use]
    pub fn requirements(&self) -> PathBuf {
        self.dir.join(REQUIREMENTS_NAME)
    }
}

/// Registry of environments under a resolved store root
pub struct Registry<'a> {
    system: &'a dyn System,
    store: Store,
    pub settings: Settings,
}

impl<'a> Registry<'a> {
    /// Open the registry: materialize the store root and load its settings,
    /// writing defaults back so the configuration file always exists
    pub fn open(system: &'a dyn System, store: Store) -> Result<Self> {
        store.init(system)?;
        let settings = Settings::load(system, &store)?;
        settings.save(system, &store)?;
        Ok(Self {
            system,
            store,
            settings,
        })
    }

    /// The resolved store root this registry operates on
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    fn env_dir(&self, name: &str) -> PathBuf {
        self.store.envs_dir().join(name)
    }

    /// Check whether an environment of this name exists on disk
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.system.is_dir(&self.env_dir(name))
    }

    /// Look up an existing environment
    pub fn lookup(&self, name: &str) -> Result<Environment> {
        if !self.exists(name) {
            return Err(
                PydockError::environment(format!("Environment '{name}' doesn't exist")).into(),
            );
        }

        Ok(Environment {
            name: name.to_owned(),
            python: self.settings.envs.get(name).map(|r| r.python.clone()),
            dir: self.env_dir(name),
        })
    }

    /// List all environments, sorted by name
    pub fn list(&self) -> Result<Vec<Environment>> {
        let envs_dir = self.store.envs_dir();
        let mut envs: Vec<Environment> = self
            .system
            .read_dir(&envs_dir)
            .with_context(|| format!("Failed to read environments under {}", envs_dir.display()))?
            .into_iter()
            .filter(|path| self.system.is_dir(path))
            .filter_map(|path| {
                let name = path.file_name()?.to_str()?.to_owned();
                Some(Environment {
                    python: self.settings.envs.get(&name).map(|r| r.python.clone()),
                    dir: path,
                    name,
                })
            })
            .collect();
        envs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(envs)
    }

    /// Create a new environment record: its directory, a dockerfile rendered
    /// from the settings, and an empty requirements file.
    ///
    /// Fails before touching the filesystem if the name is taken or invalid.
    pub fn create(&mut self, name: &str, version: &str) -> Result<Environment> {
        validate_name(name)?;

        if self.exists(name) {
            return Err(
                PydockError::environment(format!("Environment '{name}' already exists")).into(),
            );
        }

        let env = Environment {
            name: name.to_owned(),
            python: Some(version.to_owned()),
            dir: self.env_dir(name),
        };

        self.system
            .create_dir_all(&env.dir)
            .with_context(|| format!("Failed to create environment directory for '{name}'"))?;

        let dockerfile = template::render_dockerfile(
            &self.settings.docker.repository,
            version,
            &self.settings.environment.username,
        );
        self.system
            .write(&env.dockerfile(), dockerfile.as_bytes())
            .with_context(|| format!("Failed to write dockerfile for '{name}'"))?;
        self.system
            .write(&env.requirements(), b"")
            .with_context(|| format!("Failed to write requirements file for '{name}'"))?;

        self.settings.envs.insert(
            name.to_owned(),
            EnvRecord {
                python: version.to_owned(),
            },
        );
        self.settings.save(self.system, &self.store)?;

        Ok(env)
    }

    /// Remove an environment's template directory and registry entry.
    ///
    /// The backing image is intentionally left behind for manual cleanup.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let env = self.lookup(name)?;

        self.system
            .remove_dir_all(&env.dir)
            .with_context(|| format!("Failed to remove environment directory for '{name}'"))?;

        if self.settings.envs.remove(name).is_some() {
            self.settings.save(self.system, &self.store)?;
        }

        Ok(())
    }

    /// Overwrite an environment's requirements listing
    pub fn write_requirements(&self, env: &Environment, contents: &str) -> Result<()> {
        self.system
            .write(&env.requirements(), contents.as_bytes())
            .with_context(|| {
                format!("Failed to write requirements file for '{}'", env.name)
            })?;
        Ok(())
    }
}

/// Environment names become directory names and image tags, so only allow a
/// conservative character set.
fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && !name.starts_with(['.', '-'])
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(PydockError::environment(format!(
            "Invalid environment name '{name}': use letters, digits, '-', '_' or '.'"
        ))
        .into())
    }
}
