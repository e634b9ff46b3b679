//! Application-wide constants.
//!
//! Defaults and magic strings live here so that the CLI, the config file and
//! the runner agree on them.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "mutiny";

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV_VAR: &str = "MUTINY_CONFIG";

/// Configuration file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Reporter used when `--reporter` is not given.
pub const DEFAULT_REPORTER: &str = "Console";

/// Build tool invoked by the initial build.
pub const DEFAULT_BUILD_TOOL: &str = "dotnet";

/// Arguments passed to the build tool ahead of the project identifier.
pub const DEFAULT_BUILD_ARGS: &[&str] = &["build"];

/// File extension (without the dot) identifying a buildable project.
pub const DEFAULT_PROJECT_EXTENSION: &str = "csproj";

/// Output directory for logs and reports, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "mutiny-output";

/// Subdirectory of the output directory holding log files.
pub const LOG_DIR_NAME: &str = "logs";

/// Exit codes reported by the CLI.
pub mod exit_code {
    /// Help shown or run completed.
    pub const SUCCESS: i32 = 0;

    /// The run failed.
    pub const FAILURE: i32 = 1;

    /// The command line could not be parsed.
    pub const USAGE: i32 = 2;
}

/// Exit code reported for a process terminated by a signal.
pub const SIGNALLED_EXIT_CODE: i32 = -1;
