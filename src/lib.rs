//! Mutiny - mutation testing bootstrap.
//!
//! Turns command-line arguments into a validated [`config::Configuration`]
//! and verifies the project under test builds before any analysis starts.

#![warn(missing_docs)]

pub mod build;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod runner;

use build::SystemProcessExecutor;
use cli::Orchestrator;
use config::load_default_config;
use constants::exit_code;
use logging::Logger;
use runner::BootstrapRunner;
use std::sync::Arc;
use tracing::error;
use tracing::level_filters::LevelFilter;

pub use error::{Error, Result};

/// Main entry point for the mutiny CLI. Returns the process exit code.
pub fn run() -> i32 {
    let console = Logger::console(LevelFilter::INFO);
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Help must not depend on a readable config file.
    if cli::requests_help(&args) {
        cli::help::print_usage();
        return exit_code::SUCCESS;
    }

    match wire(console.clone()) {
        Ok(orchestrator) => orchestrator.run(args),
        Err(e) => {
            console.scope(|| error!("{}", e.describe()));
            e.exit_code()
        }
    }
}

/// Assemble the default components: config file, system process executor
/// and the bootstrap runner.
fn wire(console: Logger) -> Result<Orchestrator<BootstrapRunner>> {
    let config = load_default_config()?;
    let working_dir = std::env::current_dir()?;

    let runner = BootstrapRunner::new(
        working_dir,
        config.clone(),
        Arc::new(SystemProcessExecutor),
        Box::new(logging::configure),
    );

    Ok(Orchestrator::new(runner, config.defaults, console))
}
