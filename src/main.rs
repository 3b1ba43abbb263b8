//! # pydock
//!
//! pydock is a command-line tool that manages Python development environments
//! as Docker images. Every environment is described by a generated
//! `dockerfile` + `requirements.txt` pair stored under a per-project or
//! per-user root; building, running, and committing images is delegated
//! entirely to the Docker CLI.
//!
//! ## Usage
//!
//! **Create an environment and open a shell in it:**
//! ```sh
//! pydock create ds 3.10
//! pydock shell ds
//! ```
//!
//! **Install a package and keep requirements.txt in sync:**
//! ```sh
//! pydock install ds numpy
//! ```
//!
//! Use `--local`/`--global` to pick the per-project or per-user store.
//! See `pydock --help` for the full command list.

use anyhow::Result;
use clap::Parser as _;
use pydock::cli::Args;
use pydock::error::PydockError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber based on verbose flag
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_target(false).with_env_filter(filter).init();

    match pydock::run(args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<PydockError>()
                    .map_or(1, PydockError::exit_code),
            );
        }
    }
}
