use crate::property::{PropertyName, PropertySet, PropertyToken};
use serde::Serialize;
use std::fmt;

/// A parsed request line.
///
/// Each line produces a fresh value; nothing carries over between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Report every property of one number.
    Single(u64),
    /// `count` consecutive numbers starting at `start`.
    Range { start: u64, count: u64 },
    /// The first `count` numbers from `start` upward that pass `filter`.
    Search { start: u64, count: u64, filter: Filter },
    /// End the session.
    Exit,
}

/// Required and excluded properties of a search.
///
/// The validator guarantees the two sets are disjoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Filter {
    pub required: PropertySet,
    pub excluded: PropertySet,
}

impl Filter {
    pub const fn new(required: PropertySet, excluded: PropertySet) -> Self {
        Self { required, excluded }
    }

    /// Adds one token to the matching side.
    #[must_use]
    pub fn with(mut self, token: PropertyToken) -> Self {
        if token.negated {
            self.excluded |= token.name.flag();
        } else {
            self.required |= token.name.flag();
        }
        self
    }

    /// True when every required property holds and no excluded one does.
    pub const fn accepts(&self, properties: PropertySet) -> bool {
        properties.contains(self.required) && !properties.intersects(self.excluded)
    }

    pub fn required_names(&self) -> impl Iterator<Item = PropertyName> {
        self.required.names()
    }

    pub fn excluded_names(&self) -> impl Iterator<Item = PropertyName> {
        self.excluded.names()
    }
}

impl FromIterator<PropertyToken> for Filter {
    fn from_iter<I: IntoIterator<Item = PropertyToken>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::with)
    }
}

/// A number together with its computed properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classified {
    pub value: u64,
    pub properties: PropertySet,
}

impl Classified {
    pub const fn new(value: u64, properties: PropertySet) -> Self {
        Self { value, properties }
    }
}

/// One-line description, `<value> is <names>`.
///
/// A formatter width right-justifies the value: `format!("{:>8}", c)`.
impl fmt::Display for Classified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(0);
        write!(f, "{:>width$} is {}", self.value, self.properties)
    }
}
