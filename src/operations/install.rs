//! Install a Python package into an environment
//!
//! Runs the installation inside a disposable container, commits the result
//! over the environment's image tag, and refreshes `requirements.txt` from
//! `pip freeze` so the listing always matches the installed package set.
//! The previous image is left untagged for manual cleanup.

use crate::engine::Engine;
use crate::registry::Registry;
use anyhow::Result;
use tracing::info;

/// Execute the `install` subcommand
pub fn execute(
    registry: &Registry<'_>,
    engine: &Engine,
    name: &str,
    package: &str,
) -> Result<()> {
    let env = registry.lookup(name)?;
    engine.preflight()?;

    let container = format!("pydock-staging-{name}");
    let staging_tag = format!("pydock-{name}:staging");

    // An interrupted install can leave the staging container behind; clear
    // it so the run below can reuse the name
    engine
        .command("rm")
        .arg("--force")
        .arg(container.as_str())
        .run_best_effort();

    info!("Installing '{package}' into environment '{name}'");
    engine
        .command("run")
        .arg("--name")
        .arg(container.as_str())
        .arg(env.image_tag())
        .args(["pip", "install", package])
        .run()?;

    engine
        .command("commit")
        .args([container.as_str(), staging_tag.as_str()])
        .run()?;
    engine
        .command("tag")
        .arg(staging_tag.as_str())
        .arg(env.image_tag())
        .run()?;
    engine.command("rmi").arg(staging_tag.as_str()).run()?;
    engine.command("rm").arg(container.as_str()).run()?;

    let frozen = engine
        .command("run")
        .arg("--rm")
        .arg(env.image_tag())
        .args(["pip", "freeze"])
        .run_captured()?;
    registry.write_requirements(&env, &frozen)?;

    info!("Package '{package}' installed into environment '{name}'");
    Ok(())
}
