use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration of the interactive shell.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub display: DisplayConfig,
    pub scan: ScanConfig,
    pub log: LogConfig,
}

/// Result rendering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Column width the value is right-justified to in list output.
    pub width: usize,
}

/// Search scan bounds.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum candidates a single search examines. `None` scans without bound,
    /// so a search nothing can satisfy never returns.
    pub limit: Option<u64>,
}

/// Diagnostics output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Directory for rolling log files; console only when unset.
    pub dir: Option<PathBuf>,
    /// Structured JSON lines in log files.
    pub json: bool,
}

// --- Default ---

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { width: 12 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), dir: None, json: false }
    }
}
