//! Orchestrator behaviour against a recording runner.

use mutiny::Error;
use mutiny::cli::Orchestrator;
use mutiny::config::{Configuration, DefaultsConfig, LogLevel};
use mutiny::constants::exit_code;
use mutiny::logging::Logger;
use mutiny::runner::MutationRunner;
use std::cell::RefCell;
use tracing::level_filters::LevelFilter;

/// Records every configuration it is called with.
#[derive(Default)]
struct RecordingRunner {
    calls: RefCell<Vec<Configuration>>,
    fail_with: Option<&'static str>,
}

impl RecordingRunner {
    fn failing(message: &'static str) -> Self {
        Self {
            fail_with: Some(message),
            ..Self::default()
        }
    }
}

impl MutationRunner for RecordingRunner {
    fn run(&self, config: &Configuration) -> mutiny::Result<()> {
        self.calls.borrow_mut().push(config.clone());
        match self.fail_with {
            Some(message) => Err(Error::BuildFailed {
                output: message.to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn orchestrator(runner: RecordingRunner) -> Orchestrator<RecordingRunner> {
    Orchestrator::new(runner, DefaultsConfig::default(), Logger::none())
}

fn single_call(orchestrator: &Orchestrator<RecordingRunner>) -> Configuration {
    let calls = orchestrator.runner().calls.borrow();
    assert_eq!(calls.len(), 1, "runner should be called exactly once");
    calls[0].clone()
}

#[test]
fn test_help_does_not_start_runner() {
    for flag in ["--help", "-h", "-?"] {
        let target = orchestrator(RecordingRunner::default());

        assert_eq!(target.run([flag]), exit_code::SUCCESS);
        assert!(target.runner().calls.borrow().is_empty());
    }
}

#[test]
fn test_help_among_other_flags_does_not_start_runner() {
    let target = orchestrator(RecordingRunner::default());

    let code = target.run(["--reporter", "Console", "--logFile", "-?", "-p", "App.csproj"]);

    assert_eq!(code, exit_code::SUCCESS);
    assert!(target.runner().calls.borrow().is_empty());
}

#[test]
fn test_no_arguments_starts_runner_with_defaults() {
    let target = orchestrator(RecordingRunner::default());

    assert_eq!(target.run(Vec::<String>::new()), exit_code::SUCCESS);

    let config = single_call(&target);
    assert_eq!(config.reporter, "Console");
    assert_eq!(config.project_name_filter, None);
    assert_eq!(config.log.level, LogLevel::Information);
    assert!(!config.log.log_to_file);
}

#[test]
fn test_runner_failure_exits_non_zero_and_is_logged() {
    let (logger, capture) = Logger::capturing(LevelFilter::INFO);
    let target = Orchestrator::new(
        RecordingRunner::failing("Initial testrun failed"),
        DefaultsConfig::default(),
        logger,
    );

    let code = target.run(Vec::<String>::new());

    assert_ne!(code, exit_code::SUCCESS);
    assert_eq!(target.runner().calls.borrow().len(), 1);
    assert!(capture.contents().contains("Initial testrun failed"));
}

#[test]
fn test_reporter_argument_is_passed() {
    for flag in ["--reporter", "-r"] {
        let target = orchestrator(RecordingRunner::default());
        target.run([flag, "Console"]);
        assert_eq!(single_call(&target).reporter, "Console");
    }
}

#[test]
fn test_project_argument_is_passed() {
    for flag in ["--project", "-p"] {
        let target = orchestrator(RecordingRunner::default());
        target.run([flag, "SomeProjectName.csproj"]);
        assert_eq!(
            single_call(&target).project_name_filter.as_deref(),
            Some("SomeProjectName.csproj")
        );
    }
}

#[test]
fn test_log_console_argument_is_passed() {
    for flag in ["--logConsole", "-l"] {
        let target = orchestrator(RecordingRunner::default());
        target.run([flag, "debug"]);

        let config = single_call(&target);
        assert_eq!(config.log.level, LogLevel::Debug);
        assert!(!config.log.log_to_file);
    }
}

#[test]
fn test_log_file_argument_is_passed() {
    let target = orchestrator(RecordingRunner::default());
    target.run(["--logFile"]);
    assert!(single_call(&target).log.log_to_file);
}

#[test]
fn test_flag_missing_value_does_not_start_runner() {
    let target = orchestrator(RecordingRunner::default());

    let code = target.run(["--reporter", "--logFile"]);

    assert_eq!(code, exit_code::USAGE);
    assert!(target.runner().calls.borrow().is_empty());
}

#[test]
fn test_unknown_argument_does_not_start_runner() {
    let target = orchestrator(RecordingRunner::default());

    let code = target.run(["--mutate-everything"]);

    assert_ne!(code, exit_code::SUCCESS);
    assert!(target.runner().calls.borrow().is_empty());
}
