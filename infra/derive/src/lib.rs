#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! ## Usage
//! Depend on the crate through the workspace table:
//! ```toml
//! [dependencies]
//! anum-derive.workspace = true
//! ```
//!
//! The examples below are `ignore`d to avoid compiling in this crate; the
//! `tests/ui` cases show complete, compiling usages.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring error enums.
///
/// Turns a plain enum into a `thiserror` error that plugs into the rest of
/// the workspace with minimal boilerplate.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants holding a `source` field,
///   so `?` lifts upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
/// * **`format_context` helper**: a private function usable inside `#[error(...)]`
///   strings that renders an optional context as ` (context)`.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants are either unit variants or have named fields; tuple variants are rejected.
/// 3. Variants with a `source` field (or a field marked `#[source]`/`#[from]`) must also
///    carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use anum_derive::anum_error;
/// use std::borrow::Cow;
///
/// #[anum_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Missing value")]
///     Missing,
/// }
///
/// fn load() -> Result<(), ConfigError> {
///     builder.build().context("Building layered config")?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn anum_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
