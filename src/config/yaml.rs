//! YAML configuration loading and saving

use crate::config::Settings;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::Path;

/// Load and parse YAML settings from file
///
/// A missing file is not an error: the store is initialized lazily, so the
/// first invocation simply starts from defaults.
pub fn load_settings(system: &dyn System, path: &Path) -> Result<Settings> {
    if !system.exists(path) {
        return Ok(Settings::default());
    }

    let content = system
        .read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

    let settings: Settings = serde_yaml::from_str(&content).with_context(|| {
        return format!(
            "Failed to parse YAML configuration in file: {}\n\
            Please check the syntax and structure of your configuration file",
            path.display()
        );
    })?;

    Ok(settings)
}

/// Serialize settings and write them to file
pub fn save_settings(system: &dyn System, path: &Path, settings: &Settings) -> Result<()> {
    let content =
        serde_yaml::to_string(settings).context("Failed to serialize configuration to YAML")?;

    system
        .write(path, content.as_bytes())
        .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvRecord;
    use crate::system::MockSystem;
    use std::path::PathBuf;

    #[test]
    fn missing_file_yields_defaults() {
        let system = MockSystem::new();
        let settings = load_settings(&system, Path::new("/root/pydock.yaml")).unwrap();
        assert_eq!(settings.docker.binary, "docker");
        assert!(!settings.docker.sudo);
        assert!(settings.envs.is_empty());
    }

    #[test]
    fn roundtrip_preserves_env_records() {
        let system = MockSystem::new().with_dir("/root");
        let path = PathBuf::from("/root/pydock.yaml");

        let mut settings = Settings::default();
        settings.environment.username = "alice".to_owned();
        settings.envs.insert(
            "ds".to_owned(),
            EnvRecord {
                python: "3.10".to_owned(),
            },
        );

        save_settings(&system, &path, &settings).unwrap();
        let loaded = load_settings(&system, &path).unwrap();

        assert_eq!(loaded.environment.username, "alice");
        assert_eq!(loaded.envs.get("ds").unwrap().python, "3.10");
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let system = MockSystem::new().with_file("/root/pydock.yaml", b"docker: [\n");
        let result = load_settings(&system, Path::new("/root/pydock.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let system = MockSystem::new().with_file("/root/pydock.yaml", b"dockre:\n  sudo: true\n");
        let result = load_settings(&system, Path::new("/root/pydock.yaml"));
        assert!(result.is_err());
    }
}
