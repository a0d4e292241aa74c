use bitflags::bitflags;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::fmt;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Marker that turns a property token into "must NOT hold".
pub const NEGATION: char = '-';

/// One of the base properties a number can have.
///
/// Discriminants follow catalog order and double as bit positions in
/// [`PropertySet`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum PropertyName {
    Even = 0,
    Odd,
    Buzz,
    Duck,
    Palindromic,
    Gapful,
    Spy,
    Sunny,
    Square,
    Jumping,
    Happy,
    Sad,
}

impl PropertyName {
    /// The catalog, in display order.
    pub const ALL: [Self; 12] = [
        Self::Even,
        Self::Odd,
        Self::Buzz,
        Self::Duck,
        Self::Palindromic,
        Self::Gapful,
        Self::Spy,
        Self::Sunny,
        Self::Square,
        Self::Jumping,
        Self::Happy,
        Self::Sad,
    ];

    /// Looks up a lower-case catalog name.
    pub fn lookup(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// The single-bit set for this property.
    pub const fn flag(self) -> PropertySet {
        PropertySet::from_bits_retain(1 << self as u16)
    }
}

impl Serialize for PropertyName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

bitflags! {
    /// The base properties that hold for one number.
    ///
    /// Only base properties are stored; a negated property holds exactly when
    /// its base bit is clear.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PropertySet: u16 {
        const EVEN = 1 << 0;
        const ODD = 1 << 1;
        const BUZZ = 1 << 2;
        const DUCK = 1 << 3;
        const PALINDROMIC = 1 << 4;
        const GAPFUL = 1 << 5;
        const SPY = 1 << 6;
        const SUNNY = 1 << 7;
        const SQUARE = 1 << 8;
        const JUMPING = 1 << 9;
        const HAPPY = 1 << 10;
        const SAD = 1 << 11;
    }
}

impl PropertySet {
    pub const fn holds(self, name: PropertyName) -> bool {
        self.contains(name.flag())
    }

    /// Evaluates a possibly negated token against this set.
    pub const fn satisfies(self, token: PropertyToken) -> bool {
        self.holds(token.name) != token.negated
    }

    /// Holding base properties, in catalog order.
    pub fn names(self) -> impl Iterator<Item = PropertyName> {
        PropertyName::ALL.into_iter().filter(move |name| self.holds(*name))
    }

    /// Every catalog entry paired with whether it holds.
    pub fn listing(self) -> impl Iterator<Item = (PropertyName, bool)> {
        PropertyName::ALL.into_iter().map(move |name| (name, self.holds(name)))
    }
}

impl Default for PropertySet {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<PropertyName> for PropertySet {
    fn from(name: PropertyName) -> Self {
        name.flag()
    }
}

impl FromIterator<PropertyName> for PropertySet {
    fn from_iter<I: IntoIterator<Item = PropertyName>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, name| set | name.flag())
    }
}

/// Names are written in catalog order, comma separated.
impl fmt::Display for PropertySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name.as_str())?;
        }
        Ok(())
    }
}

impl Serialize for PropertySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.names().count()))?;
        for name in self.names() {
            seq.serialize_element(&name)?;
        }
        seq.end()
    }
}

/// A property reference from a request, e.g. `duck` or `-duck`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyToken {
    pub name: PropertyName,
    pub negated: bool,
}

impl PropertyToken {
    pub const fn holds(name: PropertyName) -> Self {
        Self { name, negated: false }
    }

    pub const fn not(name: PropertyName) -> Self {
        Self { name, negated: true }
    }

    /// Parses a lower-case token with an optional leading [`NEGATION`].
    pub fn parse(token: &str) -> Option<Self> {
        match token.strip_prefix(NEGATION) {
            Some(rest) => PropertyName::lookup(rest).map(Self::not),
            None => PropertyName::lookup(token).map(Self::holds),
        }
    }

    /// The same property with the opposite polarity.
    #[must_use]
    pub const fn negate(self) -> Self {
        Self { name: self.name, negated: !self.negated }
    }
}

impl fmt::Display for PropertyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "{NEGATION}")?;
        }
        f.write_str(self.name.as_str())
    }
}
