//! Configuration file type definitions.

use crate::config::LogLevel;
use crate::constants::{
    DEFAULT_BUILD_ARGS, DEFAULT_BUILD_TOOL, DEFAULT_OUTPUT_DIR, DEFAULT_PROJECT_EXTENSION,
    DEFAULT_REPORTER,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Values used when a flag is absent from the command line.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Initial build settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults for run options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Reporter used when `--reporter` is absent.
    pub reporter: String,

    /// Console log level used when `--logConsole` is absent.
    pub log_level: LogLevel,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            reporter: DEFAULT_REPORTER.to_string(),
            log_level: LogLevel::default(),
        }
    }
}

/// How the initial build is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Build tool executable.
    pub tool: String,

    /// Arguments placed before the project identifier.
    pub args: Vec<String>,

    /// Extension (without the dot) of project files.
    pub project_extension: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            tool: DEFAULT_BUILD_TOOL.to_string(),
            args: DEFAULT_BUILD_ARGS.iter().map(ToString::to_string).collect(),
            project_extension: DEFAULT_PROJECT_EXTENSION.to_string(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for logs, relative to the working directory unless absolute.
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}
