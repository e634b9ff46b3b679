//! Usage text.

#![allow(clippy::print_stdout)]

use crate::cli::Cli;
use clap::CommandFactory;

/// Rendered usage text for all flags.
pub fn usage_text() -> String {
    Cli::command().render_help().to_string()
}

/// Print usage text to stdout.
pub fn print_usage() {
    println!("{}", usage_text());
    println!("Examples:");
    println!("  mutiny --project MyLib.csproj --reporter Console");
    println!("  mutiny -l debug --logFile");
    if let Ok(path) = crate::config::config_file_path() {
        println!();
        println!("Defaults are read from {}", path.display());
    }
}
