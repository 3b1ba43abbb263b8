//! File system utilities

use crate::error::PydockError;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::Path;

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir_exists(system: &dyn System, dir_path: &Path) -> Result<()> {
    if !system.exists(dir_path) {
        system
            .create_dir_all(dir_path)
            .with_context(|| format!("Failed to create directory: {}", dir_path.display()))?;
    } else if !system.is_dir(dir_path) {
        return Err(PydockError::filesystem(format!(
            "Path exists but is not a directory: {}",
            dir_path.display()
        ))
        .into());
    }
    Ok(())
}
