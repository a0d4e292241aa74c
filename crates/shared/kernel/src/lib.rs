//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain and provides layered config loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use anum_kernel::config::load_config;
//! use anum_kernel::domain::config::ShellConfig;
//!
//! let cfg: ShellConfig = load_config(None::<&str>).unwrap_or_default();
//! ```
pub mod config;
pub mod prelude;

pub use anum_domain as domain;
