//! Initial build verification.
//!
//! Before any analysis the project under test must compile. The build tool is
//! run once through a [`ProcessExecutor`]; a non-zero exit aborts the run with
//! the tool's output attached.

mod initial;
mod process;

pub use initial::InitialBuild;
pub use process::{ProcessExecutor, ProcessResult, SystemProcessExecutor};

#[cfg(test)]
pub(crate) mod testing;
