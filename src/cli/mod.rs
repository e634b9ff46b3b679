//! Command line handling: parsing, usage text and the run orchestration.

mod args;
pub mod help;
mod orchestrator;

pub use args::{Cli, HELP_FLAGS, ParseOutcome, parse_args, requests_help};
pub use orchestrator::Orchestrator;
