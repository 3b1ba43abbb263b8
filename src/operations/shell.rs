//! Open a shell inside an environment
//!
//! The current working directory is mounted inside the container and used as
//! the working directory, so the session sees the caller's project files.

use crate::engine::Engine;
use crate::registry::Registry;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::io::{IsTerminal as _, stdin, stdout};
use tracing::info;

/// Execute the `shell` subcommand
pub fn execute(
    system: &dyn System,
    registry: &Registry<'_>,
    engine: &Engine,
    name: &str,
) -> Result<()> {
    let env = registry.lookup(name)?;
    engine.preflight()?;

    let username = &registry.settings.environment.username;
    let cwd = system
        .current_dir()
        .context("Failed to determine the current working directory")?;
    let dir_name = cwd
        .file_name()
        .map_or_else(|| "workspace".to_owned(), |n| n.to_string_lossy().into_owned());
    let mount_point = format!("/home/{username}/{dir_name}");

    // Drop the TTY flag when not attached to a terminal (e.g. piped input)
    let tty_flag = if stdin().is_terminal() && stdout().is_terminal() {
        "-it"
    } else {
        "-i"
    };

    info!("Opening shell in environment '{name}'");
    engine
        .command("run")
        .arg("--rm")
        .arg(tty_flag)
        .arg("--user")
        .arg(username.as_str())
        .arg("--hostname")
        .arg(name)
        .arg("-v")
        .arg(format!("{}:{mount_point}", cwd.display()))
        .arg("-w")
        .arg(mount_point)
        .arg(env.image_tag())
        .arg("bash")
        .run()?;

    info!("Shell session for '{name}' ended");
    Ok(())
}
