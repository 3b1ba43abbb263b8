//! pydock - manage Python development environments as Docker images
//!
//! This library represents each environment as a generated `dockerfile` +
//! `requirements.txt` pair under a per-project or per-user store, and
//! delegates all image work to the Docker CLI.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod operations;
pub mod registry;
pub mod system;
pub mod utils;

use anyhow::Result;
use cli::{Args, Command};
use config::Store;
use engine::Engine;
use registry::Registry;
use system::{RealSystem, System};

/// Main entry point for the pydock library
pub fn run(args: Args) -> Result<()> {
    let system = RealSystem;
    run_with_system(&system, args)
}

/// Resolve the store, open the registry, and dispatch the subcommand.
///
/// The resolved store mode is threaded through explicitly; nothing here
/// relies on ambient process state beyond what [`System`] exposes.
pub fn run_with_system(system: &dyn System, args: Args) -> Result<()> {
    let store = Store::resolve(system, args.local, args.global)?;
    let mut registry = Registry::open(system, store)?;
    let engine = Engine::from_settings(&registry.settings.docker);

    match args.command {
        Command::Create { name, version } => {
            operations::create::execute(&mut registry, &engine, &name, &version)
        }
        Command::Install { name, package } => {
            operations::install::execute(&registry, &engine, &name, &package)
        }
        Command::Shell { name } => operations::shell::execute(system, &registry, &engine, &name),
        Command::Build { name } => operations::build::execute(&registry, &engine, &name),
        Command::Delete { name } => operations::delete::execute(&mut registry, &name),
        Command::Envs => operations::list::execute(&registry),
        Command::Config => operations::show_config::execute(&registry),
    }
}
