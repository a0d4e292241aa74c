use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Base name of the configuration file looked up when no path is given.
/// Any format the `config` crate understands works (`amazing-numbers.toml`, `.json`, ...).
pub const DEFAULT_CONFIG: &str = "amazing-numbers";

/// Prefix for environment overrides, e.g. `ANUM__SCAN__LIMIT=100000`.
pub const ENV_PREFIX: &str = "ANUM";

#[anum_derive::anum_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered under environment overrides.
///
/// 1. **Base File**: `path` when given (it must exist), otherwise the optional
///    [`DEFAULT_CONFIG`] file in the working directory.
/// 2. **Environment Overrides**: variables prefixed with `ANUM__`; nested keys use
///    double underscores (`ANUM__DISPLAY__WIDTH` maps to `display.width`).
///
/// Missing keys fall back to the target type's `serde(default)` values.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is
/// malformed, or the merged values do not match `T`.
///
/// # Example
/// ```rust,no_run
/// use anum_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     width: usize,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    layered(path.map(|p| p.as_ref().to_path_buf()), None)
}

/// Builds the layered config; `env` replaces the process environment when given.
fn layered<T>(
    path: Option<PathBuf>,
    env: Option<config::Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            File::from(path.as_path()).required(true)
        },
        None => {
            debug!("Looking for optional {DEFAULT_CONFIG} config");
            File::with_name(DEFAULT_CONFIG).required(false)
        },
    };

    let environment = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .convert_case(config::Case::Snake)
        .source(env);

    Config::builder()
        .add_source(file)
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
