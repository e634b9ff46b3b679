//! Log setup and the logger handle passed to components.
//!
//! Components never rely on a process-wide subscriber. Each one is given a
//! [`Logger`] at construction and emits its events inside [`Logger::scope`],
//! so tests can hand in [`Logger::none`] or [`Logger::capturing`].

use crate::config::LogOptions;
use crate::constants::LOG_DIR_NAME;
use crate::error::{Error, Result};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::Dispatch;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Target for the final failure of a run. Kept off the console, where the
/// CLI reports the failure itself, but written to the log file.
pub const RUN_FAILURE_TARGET: &str = "mutiny::run_failure";

/// Handle to a `tracing` dispatcher.
#[derive(Debug, Clone)]
pub struct Logger {
    dispatch: Dispatch,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Wrap an existing dispatcher.
    pub fn new(dispatch: Dispatch) -> Self {
        Self {
            dispatch,
            log_file: None,
        }
    }

    /// A logger that discards everything.
    pub fn none() -> Self {
        Self::new(Dispatch::none())
    }

    /// Plain console logger on stderr.
    pub fn console(level: LevelFilter) -> Self {
        let subscriber = fmt()
            .with_writer(io::stderr)
            .with_max_level(level)
            .with_target(false)
            .finish();
        Self::new(Dispatch::new(subscriber))
    }

    /// Logger that records formatted output in memory.
    pub fn capturing(level: LevelFilter) -> (Self, LogCapture) {
        let capture = LogCapture::default();
        let subscriber = fmt()
            .with_writer(capture.clone())
            .with_max_level(level)
            .with_ansi(false)
            .finish();
        (Self::new(Dispatch::new(subscriber)), capture)
    }

    /// Run `f` with this logger as the active dispatcher.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Path of the log file, when file logging is enabled.
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

/// Build the logger for a run.
///
/// The console layer writes to stderr, honours `RUST_LOG` and otherwise logs
/// at `options.level`. With `log_to_file`, everything down to `trace` is also
/// written to `<output_dir>/logs/log-<timestamp>.txt`.
pub fn configure(options: &LogOptions, output_dir: &Path) -> Result<Logger> {
    let level = options.level.as_level_filter();
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    let console = fmt::layer()
        .with_writer(io::stderr)
        .with_filter(console_filter)
        .with_filter(filter_fn(|meta| meta.target() != RUN_FAILURE_TARGET));

    let (file_layer, log_file) = if options.log_to_file {
        let path = log_file_path(output_dir);
        let file = create_log_file(&path)?;
        let layer = fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .with_filter(LevelFilter::TRACE);
        (Some(layer), Some(path))
    } else {
        (None, None)
    };

    let subscriber = tracing_subscriber::registry().with(console).with(file_layer);

    Ok(Logger {
        dispatch: Dispatch::new(subscriber),
        log_file,
    })
}

fn log_file_path(output_dir: &Path) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    output_dir.join(LOG_DIR_NAME).join(format!("log-{stamp}.txt"))
}

fn create_log_file(path: &Path) -> Result<std::fs::File> {
    let to_error = |source: io::Error| Error::LogFileCreate {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    std::fs::File::create(path).map_err(to_error)
}

/// In-memory sink filled by [`Logger::capturing`].
#[derive(Debug, Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Everything logged so far.
    pub fn contents(&self) -> String {
        self.0
            .lock()
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log capture lock poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::LogLevel;
    use tempfile::TempDir;
    use tracing::{debug, error, info};

    #[test]
    fn test_capturing_logger_respects_level() {
        let (logger, capture) = Logger::capturing(LevelFilter::INFO);
        logger.scope(|| {
            info!("visible message");
            debug!("hidden message");
        });

        let logs = capture.contents();
        assert!(logs.contains("visible message"));
        assert!(!logs.contains("hidden message"));
    }

    #[test]
    fn test_none_logger_runs_closure() {
        let value = Logger::none().scope(|| {
            info!("dropped");
            42
        });
        assert_eq!(value, 42);
    }

    #[test]
    fn test_configure_without_file_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let logger = configure(&LogOptions::default(), dir.path()).unwrap();

        assert!(logger.log_file().is_none());
        assert!(!dir.path().join(LOG_DIR_NAME).exists());
    }

    #[test]
    fn test_configure_with_file_writes_log() {
        let dir = TempDir::new().unwrap();
        let options = LogOptions {
            level: LogLevel::Error,
            log_to_file: true,
        };
        let logger = configure(&options, dir.path()).unwrap();
        logger.scope(|| debug!("written to file only"));

        let path = logger.log_file().unwrap();
        assert!(path.starts_with(dir.path().join(LOG_DIR_NAME)));
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("written to file only"));
    }

    #[test]
    fn test_run_failure_reaches_log_file() {
        let dir = TempDir::new().unwrap();
        let options = LogOptions {
            level: LogLevel::Information,
            log_to_file: true,
        };
        let logger = configure(&options, dir.path()).unwrap();
        logger.scope(|| error!(target: RUN_FAILURE_TARGET, "Run failed: compile error X"));

        let contents = std::fs::read_to_string(logger.log_file().unwrap()).unwrap();
        assert!(contents.contains("Run failed: compile error X"));
    }
}
