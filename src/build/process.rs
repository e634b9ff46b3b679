//! Subprocess execution.

use crate::constants::SIGNALLED_EXIT_CODE;
use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Captured outcome of one subprocess invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    /// Standard output followed by standard error.
    pub output: String,

    /// Exit status (0 = success).
    pub exit_code: i32,
}

impl ProcessResult {
    /// Whether the process exited with status 0.
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs a tool synchronously and captures its output.
pub trait ProcessExecutor: Send + Sync {
    /// Run `tool` with `args` in `working_dir`, blocking until it exits.
    ///
    /// Only a failure to start the process is an error; a non-zero exit is
    /// reported through [`ProcessResult::exit_code`].
    fn start(&self, working_dir: &Path, tool: &str, args: &[String]) -> Result<ProcessResult>;
}

/// Executor backed by [`std::process::Command`]. No timeout is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessExecutor;

impl ProcessExecutor for SystemProcessExecutor {
    fn start(&self, working_dir: &Path, tool: &str, args: &[String]) -> Result<ProcessResult> {
        let output = Command::new(tool)
            .args(args)
            .current_dir(working_dir)
            .output()
            .map_err(|e| Error::ProcessSpawn {
                tool: tool.to_string(),
                source: e,
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(ProcessResult {
            output: text,
            exit_code: output.status.code().unwrap_or(SIGNALLED_EXIT_CODE),
        })
    }
}
