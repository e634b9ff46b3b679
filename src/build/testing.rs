//! Test doubles for process execution.

#![allow(clippy::unwrap_used)]

use crate::build::{ProcessExecutor, ProcessResult};
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One recorded invocation: working directory, tool, arguments.
pub type Call = (PathBuf, String, Vec<String>);

/// Executor returning a fixed result and recording each call.
pub struct ScriptedExecutor {
    result: ProcessResult,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedExecutor {
    pub fn new(exit_code: i32, output: &str) -> Arc<Self> {
        Arc::new(Self {
            result: ProcessResult {
                output: output.to_string(),
                exit_code,
            },
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessExecutor for ScriptedExecutor {
    fn start(&self, working_dir: &Path, tool: &str, args: &[String]) -> Result<ProcessResult> {
        self.calls.lock().unwrap().push((
            working_dir.to_path_buf(),
            tool.to_string(),
            args.to_vec(),
        ));
        Ok(self.result.clone())
    }
}
