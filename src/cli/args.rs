use clap::{Parser, Subcommand};

/// Command-line arguments for pydock
#[derive(Parser, Debug, Clone)]
#[command(name = "pydock")]
#[command(about = "Manage Python development environments as Docker images")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Use the per-project store in the current directory
    #[arg(long, global = true, conflicts_with = "global")]
    pub local: bool,

    /// Use the per-user store in the home directory
    #[arg(long, global = true)]
    pub global: bool,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// pydock subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a new environment
    Create {
        /// A suitable name for the environment (e.g. a project name)
        name: String,
        /// A Python version (e.g. 3.8 or 3.8.7)
        version: String,
    },

    /// Install a Python package into an environment
    Install {
        /// The name of the environment
        name: String,
        /// The package to install (any `pip install` requirement string)
        package: String,
    },

    /// Open a shell inside an environment
    ///
    /// The current working directory is mounted inside the container.
    Shell {
        /// The name of the environment
        name: String,
    },

    /// (re)Build an environment's Docker image
    ///
    /// Usually not necessary: `create` builds the image automatically. Use
    /// this to pick up manual edits to an environment's template files.
    Build {
        /// The name of the environment
        name: String,
    },

    /// Delete an environment
    ///
    /// The backing Docker image is left in place for manual cleanup.
    Delete {
        /// The name of the environment
        name: String,
    },

    /// List all existing environments
    Envs,

    /// Print the current configuration
    Config,
}
