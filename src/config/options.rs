//! Resolved run options handed to the runner.

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// Fully resolved options for one run.
///
/// Every field is populated: flags that were not given fall back to the
/// configured defaults, never to an unset state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Report format identifier. Not validated here.
    pub reporter: String,

    /// Narrows which project is treated as under test.
    pub project_name_filter: Option<String>,

    /// Logging options for the run.
    pub log: LogOptions,
}

/// Logging options for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Console log level.
    pub level: LogLevel,

    /// Also write the log to a file in the output directory.
    pub log_to_file: bool,
}

/// Log severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-step tracing.
    #[serde(alias = "verbose")]
    Trace,
    /// Diagnostic output such as captured build logs.
    Debug,
    /// Progress messages.
    #[default]
    #[serde(rename = "info", alias = "information")]
    Information,
    /// Recoverable problems.
    #[serde(alias = "warn")]
    Warning,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// The `tracing` filter matching this severity.
    pub fn as_level_filter(self) -> LevelFilter {
        match self {
            Self::Trace => LevelFilter::TRACE,
            Self::Debug => LevelFilter::DEBUG,
            Self::Information => LevelFilter::INFO,
            Self::Warning => LevelFilter::WARN,
            Self::Error => LevelFilter::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Information => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" | "verbose" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" | "information" => Ok(Self::Information),
            "warn" | "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => Err(format!(
                "unknown log level: {other} (expected trace, debug, info, warning or error)"
            )),
        }
    }
}
