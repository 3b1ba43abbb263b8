//! Print the current configuration

use crate::registry::Registry;
use anyhow::{Context as _, Result};

/// Execute the `config` subcommand
///
/// Prints the resolved store root and the persisted settings, in the same
/// YAML shape as the configuration file itself.
pub fn execute(registry: &Registry<'_>) -> Result<()> {
    let store = registry.store();
    println!(
        "Store root: {} ({} mode)",
        store.root.display(),
        store.mode.as_str()
    );
    println!();

    let rendered = serde_yaml::to_string(&registry.settings)
        .context("Failed to render configuration as YAML")?;
    print!("{rendered}");
    Ok(())
}
