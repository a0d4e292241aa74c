//! Facade crate for the Amazing Numbers classifier.
//! Re-exports the domain, kernel and feature crates and wires a request line
//! through parsing and execution.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust
//! use anum::executor::Execution;
//!
//! let Ok(Execution::Range(scan)) = anum::handle("5 3") else { unreachable!() };
//! assert_eq!(scan.map(|c| c.value).collect::<Vec<_>>(), [5, 6, 7]);
//! ```

pub use anum_classifier as classifier;
pub use anum_domain as domain;
pub use anum_executor as executor;
pub use anum_kernel as kernel;
pub use anum_request as request;

use anum_executor::{Execution, Executor};
use anum_request::ParseError;

/// Parses `line` and executes it without a scan limit.
///
/// # Errors
/// Returns the [`ParseError`] for a malformed request.
pub fn handle(line: &str) -> Result<Execution, ParseError> {
    handle_with(&Executor::default(), line)
}

/// Parses `line` and executes it with `executor`.
///
/// # Errors
/// Returns the [`ParseError`] for a malformed request.
pub fn handle_with(executor: &Executor, line: &str) -> Result<Execution, ParseError> {
    anum_request::parse(line).map(|query| executor.execute(query))
}
