//! The pre-flight build gate.

use crate::build::ProcessExecutor;
use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::logging::Logger;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Verifies that the project under test builds before analysis starts.
pub struct InitialBuild {
    executor: Arc<dyn ProcessExecutor>,
    build: BuildConfig,
    logger: Logger,
}

impl InitialBuild {
    /// Create a gate that runs `build.tool` through `executor`.
    pub fn new(executor: Arc<dyn ProcessExecutor>, build: BuildConfig, logger: Logger) -> Self {
        Self {
            executor,
            build,
            logger,
        }
    }

    /// Build `project` in `working_dir`.
    ///
    /// The tool output is logged at debug level whatever the outcome. A
    /// non-zero exit yields [`Error::BuildFailed`] carrying that output
    /// unchanged; the run must not continue past it.
    pub fn run(&self, working_dir: &Path, project: &str) -> Result<()> {
        self.logger.scope(|| {
            info!("Starting initial build");

            let mut args = self.build.args.clone();
            args.push(project.to_string());
            let result = self.executor.start(working_dir, &self.build.tool, &args)?;

            debug!("Initial build output {}", result.output);

            if !result.succeeded() {
                return Err(Error::BuildFailed {
                    output: result.output,
                });
            }

            info!("Initial build successful");
            Ok(())
        })
    }
}
