//! Logger setup from [`LogConfig`].

use anum::domain::config::LogConfig;
use anum_logger::{FileSink, LevelFilter, Logger};
use anyhow::Context;
use tracing::warn;

/// Settings in `config` that this build cannot honor, as config keys.
///
/// `log.json` only shapes log files, so it is ignored without `log.dir`, and
/// always in builds without the `json` feature.
pub fn ignored_settings(config: &LogConfig) -> Vec<&'static str> {
    let mut ignored = Vec::new();
    if config.json && (config.dir.is_none() || !cfg!(feature = "json")) {
        ignored.push("log.json");
    }
    ignored
}

/// Installs the global subscriber, then warns about every ignored setting.
///
/// # Errors
/// Returns an error if the level directive is malformed, the log directory
/// cannot be created, or a subscriber is already installed.
pub fn init(config: &LogConfig) -> anyhow::Result<Logger> {
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME"));
    // A bare level keeps `RUST_LOG` in charge; anything else is a full directive.
    let mut builder = match config.level.parse::<LevelFilter>() {
        Ok(level) => builder.level(level),
        Err(_) => builder.env_filter(&config.level),
    };

    if let Some(dir) = &config.dir {
        let sink = FileSink::new(dir);
        #[cfg(feature = "json")]
        let sink = if config.json { sink.json() } else { sink };
        builder = builder.file(sink);
    }

    let logger = builder.init().context("Failed to initialize logging")?;
    for key in ignored_settings(config) {
        warn!(setting = key, json_feature = cfg!(feature = "json"), "Ignoring setting this build cannot apply");
    }
    Ok(logger)
}
