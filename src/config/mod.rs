//! Configuration loading and run options.

mod file;
mod options;
mod paths;
mod types;
mod validate;

pub use file::{load_config_file, load_default_config};
pub use options::{Configuration, LogLevel, LogOptions};
pub use paths::{config_dir, config_file_path};
pub use types::{BuildConfig, Config, DefaultsConfig, OutputConfig};
pub use validate::validate_config;
