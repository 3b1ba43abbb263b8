//! Delete an environment
//!
//! Removes the environment's template directory and registry entry. The
//! backing image is left in place; removing it is manual
//! (`docker rmi pydock-<name>:latest`).

use crate::registry::Registry;
use anyhow::Result;
use tracing::info;

/// Execute the `delete` subcommand
pub fn execute(registry: &mut Registry<'_>, name: &str) -> Result<()> {
    registry.remove(name)?;
    info!(
        "Environment '{name}' deleted; the image pydock-{name}:latest is left for manual cleanup"
    );
    Ok(())
}
