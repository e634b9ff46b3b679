//! The run entry point invoked by the CLI.

mod bootstrap;
mod project;

pub use bootstrap::{BootstrapRunner, LoggerFactory};
pub use project::resolve_project;

use crate::config::Configuration;
use crate::error::Result;

/// Performs one mutation test run for a resolved configuration.
pub trait MutationRunner {
    /// Run with `config`. Any failure is returned, never swallowed.
    fn run(&self, config: &Configuration) -> Result<()>;
}
