//! # Logger
//!
//! Installs the global `tracing` subscriber for the workspace binaries.
//!
//! The console sink writes to **stderr**, so diagnostics never interleave with
//! results a program prints on stdout. An optional rolling file sink uses a
//! non-blocking writer; keep the returned [`Logger`] alive so buffered lines
//! are flushed on shutdown.
//!
//! * `RUST_LOG` overrides the default level unless an explicit
//!   [`LoggerBuilder::env_filter`] is given.
//! * The `json` feature enables [`FileSink::json`] for structured log files.
//!
//! ## Example
//!
//! ```rust
//! # use anum_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("my-app")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

/// Rolling file output settings.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl FileSink {
    /// Writes log files into `dir`, creating it on [`LoggerBuilder::init`].
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), rotation: Rotation::DAILY, max_files: DEFAULT_MAX_FILES, json: false }
    }

    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Emits one JSON object per line instead of the plain format.
    #[cfg(feature = "json")]
    #[must_use]
    pub const fn json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Directory the rolling files are written to.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}

/// Configures and installs the global tracing subscriber.
///
/// A name is required before [`LoggerBuilder::init`] becomes available; it
/// prefixes rolling file names (`<name>.<date>.log`).
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed> {
    name: N,
    level: LevelFilter,
    env_filter: Option<String>,
    console: bool,
    file: Option<FileSink>,
}

impl LoggerBuilder<Unnamed> {
    /// Sets the name of the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder {
            name: Named(name.into()),
            level: self.level,
            env_filter: self.env_filter,
            console: self.console,
            file: self.file,
        }
    }
}

impl<N: Sealed> LoggerBuilder<N> {
    /// Minimum level emitted when neither `RUST_LOG` nor an env filter says otherwise.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `anum_executor=trace`).
    ///
    /// Invalid filters make [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Enables or disables the stderr sink.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Adds a rolling file sink.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn file(mut self, sink: FileSink) -> Self {
        self.file = Some(sink);
        self
    }
}

impl LoggerBuilder<Named> {
    /// Consumes the builder and installs the global subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle owning the file writer's [`WorkerGuard`], if any.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   a malformed env filter, or when every sink is disabled.
    /// * [`LoggerError::Internal`] if the log directory cannot be created.
    /// * [`LoggerError::Appender`] if the rolling appender cannot be built.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0;
        if name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }
        if !self.console && self.file.is_none() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging sinks enabled. Enable the console or a file sink.".into(),
                context: None,
            });
        }

        let filter = env_filter(self.level, self.env_filter.as_deref())?;
        let mut layers = Vec::new();

        if self.console {
            let ansi = std::io::stderr().is_terminal();
            layers.push(layer().compact().with_writer(std::io::stderr).with_ansi(ansi).boxed());
        }

        let guard = match self.file {
            Some(sink) => {
                if sink.max_files == 0 {
                    return Err(LoggerError::InvalidConfiguration {
                        message: "max_files must be greater than zero".into(),
                        context: None,
                    });
                }

                fs::create_dir_all(&sink.dir).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("Failed to create {}", sink.dir.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(sink.rotation)
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(sink.max_files)
                    .build(&sink.dir)
                    .context("Building rolling file appender")?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = layer().with_writer(writer).with_ansi(false);

                #[cfg(feature = "json")]
                let boxed = if sink.json { file_layer.json().boxed() } else { file_layer.boxed() };
                #[cfg(not(feature = "json"))]
                let boxed = file_layer.boxed();

                layers.push(boxed);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        tracing::debug!(logger = %name, "Logging initialized");

        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
///
/// Dropping it stops the background file writer, so hold it for the life of
/// the program.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a new [`LoggerBuilder`] with console output at `WARN`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn builder() -> LoggerBuilder {
        LoggerBuilder {
            name: Unnamed,
            level: LevelFilter::WARN,
            env_filter: None,
            console: true,
            file: None,
        }
    }

    /// Whether a file sink is active.
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn env_filter(level: LevelFilter, explicit: Option<&str>) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    explicit.map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}
