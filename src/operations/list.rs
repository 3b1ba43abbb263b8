//! List all existing environments

use crate::registry::Registry;
use anyhow::Result;

/// Execute the `envs` subcommand
///
/// Prints one line per environment: its name and the Python version it was
/// created with (`-` when the configuration has no record for it).
pub fn execute(registry: &Registry<'_>) -> Result<()> {
    for env in registry.list()? {
        let python = env.python.as_deref().unwrap_or("-");
        println!("{:<24}{python}", env.name);
    }
    Ok(())
}
