//! Error types for mutiny.

use crate::constants::exit_code;

/// Result type alias for mutiny operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for mutiny.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The command line could not be parsed.
    #[error("{0}")]
    InvalidArguments(#[source] clap::Error),

    /// A flag that takes a value was given without one.
    #[error("missing value for '{flag}'")]
    MissingValue {
        /// The flag as written on the command line.
        flag: String,
    },

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to create the log file.
    #[error("failed to create log file '{path}'")]
    LogFileCreate {
        /// Path to the log file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No project file found in the working directory.
    #[error("no *.{extension} project found in '{dir}'")]
    ProjectNotFound {
        /// Directory that was searched.
        dir: std::path::PathBuf,
        /// Project file extension searched for.
        extension: String,
    },

    /// More than one project file found and no filter given.
    #[error(
        "found {} projects in '{dir}' ({}); use --project to pick one",
        .candidates.len(),
        .candidates.join(", ")
    )]
    AmbiguousProject {
        /// Directory that was searched.
        dir: std::path::PathBuf,
        /// Project file names found.
        candidates: Vec<String>,
    },

    /// The build tool could not be started.
    #[error("failed to start '{tool}'")]
    ProcessSpawn {
        /// Build tool executable.
        tool: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The initial build exited with a non-zero status.
    #[error("initial build failed:\n{output}")]
    BuildFailed {
        /// Captured build tool output, verbatim.
        output: String,
    },
}

impl Error {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArguments(_) | Self::MissingValue { .. } => exit_code::USAGE,
            _ => exit_code::FAILURE,
        }
    }

    /// The message followed by its chain of causes.
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}
