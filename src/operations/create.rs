//! Create a new environment
//!
//! Writes the environment's template files, records it in the configuration,
//! and builds the backing image. A failed build leaves the template files in
//! place so they can be inspected or rebuilt.

use crate::engine::Engine;
use crate::operations::build;
use crate::registry::Registry;
use anyhow::Result;
use tracing::info;

/// Execute the `create` subcommand
pub fn execute(
    registry: &mut Registry<'_>,
    engine: &Engine,
    name: &str,
    version: &str,
) -> Result<()> {
    // Duplicate names fail here, before any engine invocation
    let env = registry.create(name, version)?;
    info!("Environment '{name}' created with Python {version}");

    engine.preflight()?;
    build::build_image(engine, &env)
}
