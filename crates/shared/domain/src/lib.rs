//! # Domain Models
//!
//! Pure types shared by every crate in the workspace: the property catalog,
//! the per-number property set, parsed queries and shell configuration.
//! Keep it lean: no I/O and no classification logic, just data and simple helpers.

pub mod config;
pub mod property;
pub mod query;

pub use property::{PropertyName, PropertySet, PropertyToken};
pub use query::{Classified, Filter, Query};
