//! CLI argument definitions and parsing into a [`Configuration`].

use crate::config::{Configuration, DefaultsConfig, LogLevel, LogOptions};
use crate::constants::APP_NAME;
use crate::error::{Error, Result};
use clap::{ArgAction, Parser};

/// Spellings that request usage text.
pub const HELP_FLAGS: &[&str] = &["--help", "-h", "-?"];

/// Flags that take exactly one value.
const VALUE_FLAGS: &[&str] = &["--reporter", "-r", "--project", "-p", "--logConsole", "-l"];

/// Flags that take no value, including clap's version flag.
const SWITCH_FLAGS: &[&str] = &["--logFile", "--version", "-V"];

/// Mutation testing for your project.
#[derive(Debug, Parser)]
#[command(name = APP_NAME)]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Show this help text.
    #[arg(short = 'h', long = "help", short_alias = '?', action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Reporter for the results (e.g. Console).
    #[arg(short = 'r', long = "reporter", value_name = "NAME")]
    pub reporter: Option<String>,

    /// Project under test, when the solution holds more than one.
    #[arg(short = 'p', long = "project", value_name = "NAME")]
    pub project: Option<String>,

    /// Console log level: trace, debug, info, warning or error.
    #[arg(short = 'l', long = "logConsole", value_name = "LEVEL")]
    pub log_console: Option<LogLevel>,

    /// Also write the full log to a file in the output directory.
    #[arg(long = "logFile")]
    pub log_file: bool,
}

impl Cli {
    /// Resolve parsed flags against `defaults`.
    pub fn into_configuration(self, defaults: &DefaultsConfig) -> Configuration {
        Configuration {
            reporter: self.reporter.unwrap_or_else(|| defaults.reporter.clone()),
            project_name_filter: self.project,
            log: LogOptions {
                level: self.log_console.unwrap_or(defaults.log_level),
                log_to_file: self.log_file,
            },
        }
    }
}

/// Result of parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Print usage and do nothing else.
    Help,
    /// Run with this configuration.
    Run(Configuration),
}

/// Parse command-line `tokens` (without the program name).
///
/// A help flag anywhere wins over everything else, including flags that would
/// otherwise be malformed. A value-taking flag followed by nothing or by
/// another known flag is a [`Error::MissingValue`]; unknown tokens are
/// rejected.
pub fn parse_args<I, T>(tokens: I, defaults: &DefaultsConfig) -> Result<ParseOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();

    if requests_help(&tokens) {
        return Ok(ParseOutcome::Help);
    }

    check_flag_values(&tokens)?;

    let cli = Cli::try_parse_from(std::iter::once(APP_NAME.to_string()).chain(tokens))
        .map_err(Error::InvalidArguments)?;

    Ok(ParseOutcome::Run(cli.into_configuration(defaults)))
}

/// Whether any token asks for usage text.
pub fn requests_help<T: AsRef<str>>(tokens: &[T]) -> bool {
    tokens.iter().any(|t| HELP_FLAGS.contains(&t.as_ref()))
}

fn is_known_flag(token: &str) -> bool {
    VALUE_FLAGS.contains(&token) || SWITCH_FLAGS.contains(&token) || HELP_FLAGS.contains(&token)
}

fn check_flag_values(tokens: &[String]) -> Result<()> {
    for (i, token) in tokens.iter().enumerate() {
        if !VALUE_FLAGS.contains(&token.as_str()) {
            continue;
        }
        match tokens.get(i + 1) {
            Some(next) if !is_known_flag(next) => {}
            _ => {
                return Err(Error::MissingValue {
                    flag: token.clone(),
                });
            }
        }
    }
    Ok(())
}
