//! Drives one invocation from raw arguments to an exit code.

use crate::cli::help;
use crate::cli::{ParseOutcome, parse_args};
use crate::config::{Configuration, DefaultsConfig};
use crate::constants::exit_code;
use crate::error::Error;
use crate::logging::Logger;
use crate::runner::MutationRunner;
use std::io::{self, Write};
use tracing::error;

/// Parses arguments, calls the runner and turns every failure into an exit
/// code. Nothing escapes [`Orchestrator::run`] as a panic or an error value.
pub struct Orchestrator<R> {
    runner: R,
    defaults: DefaultsConfig,
    logger: Logger,
}

impl<R: MutationRunner> Orchestrator<R> {
    /// Create an orchestrator that reports failures through `logger`.
    pub fn new(runner: R, defaults: DefaultsConfig, logger: Logger) -> Self {
        Self {
            runner,
            defaults,
            logger,
        }
    }

    /// The wrapped runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Handle `tokens` (without the program name) and return the exit code.
    ///
    /// Help is printed without touching the runner. The runner is called at
    /// most once.
    pub fn run<I, T>(&self, tokens: I) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        match parse_args(tokens, &self.defaults) {
            Ok(ParseOutcome::Help) => {
                help::print_usage();
                exit_code::SUCCESS
            }
            Ok(ParseOutcome::Run(config)) => self.invoke(&config),
            Err(Error::InvalidArguments(e)) => {
                // clap renders its own message, including --version output.
                if e.use_stderr() {
                    self.emit_argument_message(&e, &mut io::stderr())
                } else {
                    self.emit_argument_message(&e, &mut io::stdout())
                }
            }
            Err(err) => self.report(&err),
        }
    }

    fn emit_argument_message(&self, e: &clap::Error, out: &mut dyn Write) -> i32 {
        if let Err(io_err) = write!(out, "{}", e.render()).and_then(|()| out.flush()) {
            self.logger.scope(|| {
                error!("failed to write argument message: {io_err}");
                error!("{e}");
            });
        }
        e.exit_code()
    }

    fn invoke(&self, config: &Configuration) -> i32 {
        match self.runner.run(config) {
            Ok(()) => exit_code::SUCCESS,
            Err(err) => self.report(&err),
        }
    }

    fn report(&self, err: &Error) -> i32 {
        self.logger.scope(|| match err {
            Error::BuildFailed { output } => {
                error!("Initial build failed. Fix the build before running mutation tests.");
                error!("Build output:\n{output}");
            }
            Error::MissingValue { .. } => {
                error!("{err}. Run with --help for usage.");
            }
            Error::ProjectNotFound { .. } | Error::AmbiguousProject { .. } => {
                error!("{err}");
            }
            _ => error!("{}", err.describe()),
        });
        err.exit_code()
    }
}
