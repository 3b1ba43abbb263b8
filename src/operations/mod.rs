//! Operations module
//!
//! One module per subcommand, coordinating registry bookkeeping and engine
//! invocations. Each operation either fully succeeds or returns the error of
//! the first step that failed; there are no retries and no rollback.

pub mod build;
pub mod create;
pub mod delete;
pub mod install;
pub mod list;
pub mod shell;
pub mod show_config;
