//! (re)Build an environment's Docker image
//!
//! Usually not needed directly: `create` builds the image it just templated.
//! Running it by hand picks up manual edits to the environment's dockerfile
//! or requirements file.

use crate::engine::Engine;
use crate::registry::{Environment, Registry};
use anyhow::Result;
use tracing::info;

/// Execute the `build` subcommand
pub fn execute(registry: &Registry<'_>, engine: &Engine, name: &str) -> Result<()> {
    let env = registry.lookup(name)?;
    engine.preflight()?;
    build_image(engine, &env)
}

/// Build the image backing an environment from its template files
pub fn build_image(engine: &Engine, env: &Environment) -> Result<()> {
    info!("Building image for environment '{}'", env.name);

    engine
        .command("build")
        .arg("-t")
        .arg(env.image_tag())
        .arg("-f")
        .arg(env.dockerfile().display().to_string())
        .arg(env.dir.display().to_string())
        .run()?;

    info!("Environment '{}' built successfully", env.name);
    Ok(())
}
