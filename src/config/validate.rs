//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.defaults.reporter.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "defaults.reporter must not be empty".to_string(),
        });
    }

    if config.build.tool.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "build.tool must not be empty".to_string(),
        });
    }

    let extension = &config.build.project_extension;
    if extension.is_empty() || extension.starts_with('.') {
        return Err(Error::ConfigValidation {
            message: format!(
                "build.project_extension must be non-empty and given without a leading dot, got '{extension}'"
            ),
        });
    }

    Ok(())
}
