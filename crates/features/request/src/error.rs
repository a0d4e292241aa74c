use crate::validator::ValidationError;
use serde::Serialize;
use std::borrow::Cow;
use strum_macros::{Display, IntoStaticStr};

/// Why a request line could not be turned into a query.
///
/// Display renders the exact message shown to the user.
#[anum_derive::anum_error]
pub enum ParseError {
    /// Empty line, or a number that is not an integer.
    #[error("Invalid input!")]
    InvalidInput,

    #[error("The first parameter should be a natural number or zero.")]
    FirstMustBeNaturalOrZero,

    #[error("The second parameter should be a natural number.")]
    SecondMustBeNatural,

    /// The property tokens were rejected.
    #[error("{source}")]
    Validation { source: ValidationError, context: Option<Cow<'static, str>> },
}

/// Machine-readable classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    FirstMustBeNaturalOrZero,
    SecondMustBeNatural,
    UnsupportedProperties,
    MutuallyExclusive,
}

impl ParseError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput => ErrorKind::InvalidInput,
            Self::FirstMustBeNaturalOrZero => ErrorKind::FirstMustBeNaturalOrZero,
            Self::SecondMustBeNatural => ErrorKind::SecondMustBeNatural,
            Self::Validation { source, .. } => source.kind(),
        }
    }
}
