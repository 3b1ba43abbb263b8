//! Store root resolution and initialization
//!
//! The store is the directory holding the configuration file and the
//! per-environment template directories. It is either per-project
//! (`$CWD/.pydock`) or per-user (`$HOME/.pydock`), picked once at startup.

use crate::error::PydockError;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::PathBuf;

/// Directory name used for both the local marker and the global store
pub const STORE_DIR_NAME: &str = ".pydock";

/// File name of the persisted configuration inside the store root
pub const CONFIG_FILE_NAME: &str = "pydock.yaml";

/// Scope of the resolved store root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    /// Per-project store under the current working directory
    Local,
    /// Per-user store under the home directory
    Global,
}

impl StoreMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Global => "global",
        }
    }
}

/// Resolved store root, fixed for the process lifetime
#[derive(Debug, Clone)]
pub struct Store {
    pub mode: StoreMode,
    pub root: PathBuf,
}

impl Store {
    /// Resolve the store root from explicit flags and the presence of a
    /// local marker directory.
    ///
    /// Precedence: explicit flag > existing local marker > global default.
    /// The argument parser rejects conflicting flags before this runs.
    pub fn resolve(system: &dyn System, local: bool, global: bool) -> Result<Self> {
        let cwd = system
            .current_dir()
            .context("Failed to determine the current working directory")?;
        let local_root = cwd.join(STORE_DIR_NAME);

        if local {
            return Ok(Self {
                mode: StoreMode::Local,
                root: local_root,
            });
        }

        if !global && system.is_dir(&local_root) {
            return Ok(Self {
                mode: StoreMode::Local,
                root: local_root,
            });
        }

        let home = system.home_dir().ok_or_else(|| {
            PydockError::configuration("Could not determine the home directory")
        })?;

        Ok(Self {
            mode: StoreMode::Global,
            root: home.join(STORE_DIR_NAME),
        })
    }

    /// Directory holding one subdirectory per environment
    #[must_use]
    pub fn envs_dir(&self) -> PathBuf {
        self.root.join("envs")
    }

    /// Path of the persisted configuration file
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Materialize the store root and its `envs/` subdirectory
    pub fn init(&self, system: &dyn System) -> Result<()> {
        crate::utils::fs::ensure_dir_exists(system, &self.root)?;
        crate::utils::fs::ensure_dir_exists(system, &self.envs_dir())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    fn system_with_marker() -> MockSystem {
        MockSystem::new()
            .with_home_dir("/home/alice")
            .with_current_dir("/work/project")
            .with_dir("/work/project/.pydock")
    }

    fn system_without_marker() -> MockSystem {
        MockSystem::new()
            .with_home_dir("/home/alice")
            .with_current_dir("/work/project")
    }

    #[test]
    fn marker_present_yields_local_mode() {
        let store = Store::resolve(&system_with_marker(), false, false).unwrap();
        assert_eq!(store.mode, StoreMode::Local);
        assert_eq!(store.root, PathBuf::from("/work/project/.pydock"));
    }

    #[test]
    fn no_marker_defaults_to_global() {
        let store = Store::resolve(&system_without_marker(), false, false).unwrap();
        assert_eq!(store.mode, StoreMode::Global);
        assert_eq!(store.root, PathBuf::from("/home/alice/.pydock"));
    }

    #[test]
    fn explicit_global_overrides_marker() {
        let store = Store::resolve(&system_with_marker(), false, true).unwrap();
        assert_eq!(store.mode, StoreMode::Global);
        assert_eq!(store.root, PathBuf::from("/home/alice/.pydock"));
    }

    #[test]
    fn explicit_local_without_marker() {
        let store = Store::resolve(&system_without_marker(), true, false).unwrap();
        assert_eq!(store.mode, StoreMode::Local);
        assert_eq!(store.root, PathBuf::from("/work/project/.pydock"));
    }

    #[test]
    fn init_materializes_root_and_envs() {
        let system = system_without_marker();
        let store = Store::resolve(&system, true, false).unwrap();
        store.init(&system).unwrap();
        assert!(system.is_dir(&store.root));
        assert!(system.is_dir(&store.envs_dir()));
    }
}
