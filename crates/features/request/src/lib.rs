//! # Request Interpreter
//!
//! Turns a free-form request line into a typed [`Query`](anum_domain::Query).
//!
//! * [`parse`] tokenizes the line and decides between exit, single lookup,
//!   range listing and filtered search.
//! * [`validate`] checks property tokens against the catalog and rejects
//!   combinations no number can satisfy.
//!
//! Every failure is a [`ParseError`] whose `Display` is the message shown to
//! the user and whose [`ErrorKind`] is meant for programmatic callers.

mod error;
mod parser;
mod validator;

pub use crate::error::{ErrorKind, ParseError, ParseErrorExt};
pub use crate::parser::parse;
pub use crate::validator::{
    ExclusivePair, ValidationError, ValidationErrorExt, available_properties, exclusive_pairs,
    validate,
};
