//! # Command-Line Arguments
//!
//! With no positional arguments the shell runs interactively; otherwise the
//! arguments are joined into a single request that is answered before exiting.

use crate::render::Format;
use anum::domain::config::ShellConfig;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "amazing-numbers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Finds the properties of natural numbers")]
pub struct Args {
    /// A request to answer and exit, e.g. `17 3 even -duck`
    #[arg(allow_negative_numbers = true, trailing_var_arg = true)]
    pub request: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Configuration file (defaults to an optional `amazing-numbers.*` in the working directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write rolling log files into this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Column width values are right-justified to
    #[arg(long)]
    pub width: Option<usize>,

    /// Maximum candidates a search may examine
    #[arg(long)]
    pub limit: Option<u64>,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The one-shot request, if any positional arguments were given.
    pub fn request_line(&self) -> Option<String> {
        (!self.request.is_empty()).then(|| self.request.join(" "))
    }

    /// Command-line values take precedence over the loaded configuration.
    pub fn apply(&self, config: &mut ShellConfig) {
        if let Some(width) = self.width {
            config.display.width = width;
        }
        if let Some(limit) = self.limit {
            config.scan.limit = Some(limit);
        }
        if let Some(dir) = &self.log_dir {
            config.log.dir = Some(dir.clone());
        }
        match self.verbose {
            0 => {},
            1 => config.log.level = "info".to_owned(),
            2 => config.log.level = "debug".to_owned(),
            _ => config.log.level = "trace".to_owned(),
        }
    }
}
