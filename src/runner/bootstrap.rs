//! Runner used by the `mutiny` binary.

use crate::build::{InitialBuild, ProcessExecutor};
use crate::config::{Config, Configuration, LogOptions};
use crate::error::Result;
use crate::logging::{Logger, RUN_FAILURE_TARGET};
use crate::runner::{MutationRunner, resolve_project};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Builds the run logger from the log options and the output directory.
pub type LoggerFactory = Box<dyn Fn(&LogOptions, &Path) -> Result<Logger>>;

/// Sets up logging, finds the project under test and verifies it builds.
pub struct BootstrapRunner {
    working_dir: PathBuf,
    settings: Config,
    executor: Arc<dyn ProcessExecutor>,
    make_logger: LoggerFactory,
}

impl BootstrapRunner {
    /// Create a runner operating on `working_dir`.
    pub fn new(
        working_dir: PathBuf,
        settings: Config,
        executor: Arc<dyn ProcessExecutor>,
        make_logger: LoggerFactory,
    ) -> Self {
        Self {
            working_dir,
            settings,
            executor,
            make_logger,
        }
    }

    /// Directory receiving logs and reports.
    pub fn output_dir(&self) -> PathBuf {
        self.working_dir.join(&self.settings.output.directory)
    }
}

impl MutationRunner for BootstrapRunner {
    /// A failure is also recorded through the run logger, so it lands in the
    /// log file before being returned.
    fn run(&self, config: &Configuration) -> Result<()> {
        let logger = (self.make_logger)(&config.log, &self.output_dir())?;

        let result = self.bootstrap(config, &logger);
        if let Err(err) = &result {
            logger.scope(|| {
                error!(target: RUN_FAILURE_TARGET, "Run failed: {}", err.describe());
            });
        }
        result
    }
}

impl BootstrapRunner {
    fn bootstrap(&self, config: &Configuration, logger: &Logger) -> Result<()> {
        logger.scope(|| {
            debug!(
                reporter = %config.reporter,
                project = ?config.project_name_filter,
                log_level = %config.log.level,
                log_to_file = config.log.log_to_file,
                "Run options"
            );
            if let Some(path) = logger.log_file() {
                info!("Writing log file to {}", path.display());
            }
        });

        let project = resolve_project(
            &self.working_dir,
            config.project_name_filter.as_deref(),
            &self.settings.build.project_extension,
        )?;
        logger.scope(|| info!("Project under test: {project}"));

        InitialBuild::new(
            Arc::clone(&self.executor),
            self.settings.build.clone(),
            logger.clone(),
        )
        .run(&self.working_dir, &project)?;

        logger.scope(|| info!("{project} is ready for mutation analysis"));
        Ok(())
    }
}
