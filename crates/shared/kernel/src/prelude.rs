//! Common imports for crates built on the kernel.

pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use anum_domain::config::ShellConfig;
pub use anum_domain::{Classified, Filter, PropertyName, PropertySet, PropertyToken, Query};
