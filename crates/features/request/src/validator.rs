use crate::error::ErrorKind;
use anum_domain::{Filter, PropertyName, PropertyToken};
use std::fmt;
use tracing::{debug, trace};

/// Pairs of base properties no number can have at once.
const CONTRADICTIONS: [(PropertyName, PropertyName); 4] = [
    (PropertyName::Odd, PropertyName::Even),
    (PropertyName::Duck, PropertyName::Spy),
    (PropertyName::Sunny, PropertyName::Square),
    (PropertyName::Happy, PropertyName::Sad),
];

#[anum_derive::anum_error]
pub enum ValidationError {
    /// Tokens that name no catalog property, lower-cased, in input order.
    #[error("{}", unsupported_message(.names))]
    UnsupportedProperties { names: Vec<String> },

    #[error(
        "The request contains mutually exclusive properties: {}\nThere are no numbers with these properties.",
        pair_list(.pairs)
    )]
    MutuallyExclusive { pairs: Vec<ExclusivePair> },
}

impl ValidationError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedProperties { .. } => ErrorKind::UnsupportedProperties,
            Self::MutuallyExclusive { .. } => ErrorKind::MutuallyExclusive,
        }
    }
}

/// Two property tokens that cannot both be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExclusivePair {
    pub first: PropertyToken,
    pub second: PropertyToken,
}

impl ExclusivePair {
    pub const fn new(first: PropertyToken, second: PropertyToken) -> Self {
        Self { first, second }
    }

    fn violated_by(&self, tokens: &[PropertyToken]) -> bool {
        tokens.contains(&self.first) && tokens.contains(&self.second)
    }
}

/// Rendered as `[ODD, EVEN]`; a property against its own negation stays
/// lower-case, as in `[odd, -odd]`.
impl fmt::Display for ExclusivePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first.name == self.second.name {
            return write!(f, "[{}, {}]", self.first, self.second);
        }
        write!(
            f,
            "[{}, {}]",
            self.first.to_string().to_uppercase(),
            self.second.to_string().to_uppercase()
        )
    }
}

/// Every forbidden combination in reporting order: contradictory base pairs,
/// the same pairs negated, then each property against its own negation.
pub fn exclusive_pairs() -> impl Iterator<Item = ExclusivePair> {
    let base = CONTRADICTIONS
        .into_iter()
        .map(|(a, b)| ExclusivePair::new(PropertyToken::holds(a), PropertyToken::holds(b)));
    let negated = CONTRADICTIONS
        .into_iter()
        .map(|(a, b)| ExclusivePair::new(PropertyToken::not(a), PropertyToken::not(b)));
    let own = PropertyName::ALL
        .into_iter()
        .map(|name| ExclusivePair::new(PropertyToken::holds(name), PropertyToken::not(name)));

    base.chain(negated).chain(own)
}

/// Checks property tokens and splits them into required and excluded sets.
///
/// Unknown names are reported first; the exclusion check only runs once every
/// name is known. Tokens are matched case-insensitively.
///
/// # Errors
/// - [`ValidationError::UnsupportedProperties`] listing every unknown token once.
/// - [`ValidationError::MutuallyExclusive`] listing every violated pair once.
pub fn validate<S: AsRef<str>>(tokens: &[S]) -> Result<Filter, ValidationError> {
    let mut known = Vec::with_capacity(tokens.len());
    let mut unsupported: Vec<String> = Vec::new();

    for raw in tokens {
        let token = raw.as_ref().to_lowercase();
        match PropertyToken::parse(&token) {
            Some(parsed) => known.push(parsed),
            None if !unsupported.contains(&token) => unsupported.push(token),
            None => {},
        }
    }

    if !unsupported.is_empty() {
        debug!(?unsupported, "Rejected unknown properties");
        return Err(ValidationError::UnsupportedProperties { names: unsupported });
    }

    let pairs: Vec<ExclusivePair> = exclusive_pairs().filter(|p| p.violated_by(&known)).collect();
    if !pairs.is_empty() {
        debug!(violations = pairs.len(), "Rejected mutually exclusive properties");
        return Err(ValidationError::MutuallyExclusive { pairs });
    }

    let filter: Filter = known.into_iter().collect();
    trace!(required = %filter.required, excluded = %filter.excluded, "Validated properties");
    Ok(filter)
}

/// `[EVEN, ODD, ...]`, the upper-cased catalog.
pub fn available_properties() -> String {
    let names: Vec<String> = PropertyName::ALL.iter().map(|p| p.as_str().to_uppercase()).collect();
    format!("[{}]", names.join(", "))
}

fn unsupported_message(names: &[String]) -> String {
    let listed: Vec<String> = names.iter().map(|n| n.to_uppercase()).collect();
    let (noun, verb) = if listed.len() == 1 { ("property", "is") } else { ("properties", "are") };
    format!(
        "The {noun} [{}] {verb} wrong.\nAvailable properties: {}",
        listed.join(", "),
        available_properties()
    )
}

fn pair_list(pairs: &[ExclusivePair]) -> String {
    pairs.iter().map(ToString::to_string).collect()
}
