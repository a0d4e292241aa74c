use crate::error::ParseError;
use crate::validator::validate;
use anum_domain::Query;
use tracing::{debug, trace};

/// Parses one request line into a [`Query`].
///
/// The token count picks the shape: one number is a single lookup (or exit
/// when it is `0`), two numbers are a range, anything after them is a list of
/// properties to search for.
///
/// Property problems are reported before numeric ones, and the count is
/// checked before the start value.
///
/// # Errors
/// Returns the first failing check as a [`ParseError`].
///
/// # Example
/// ```rust
/// use anum_domain::Query;
/// use anum_request::parse;
///
/// assert_eq!(parse("0").unwrap(), Query::Exit);
/// assert_eq!(parse("0 5").unwrap(), Query::Range { start: 0, count: 5 });
/// ```
pub fn parse(line: &str) -> Result<Query, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    debug!(tokens = tokens.len(), "Parsing request");

    let query = match tokens.as_slice() {
        [] => return Err(ParseError::InvalidInput),
        [first] => match natural_or_zero(first)? {
            0 => Query::Exit,
            value => Query::Single(value),
        },
        [first, second, properties @ ..] => {
            let filter = if properties.is_empty() { None } else { Some(validate(properties)?) };
            let count = natural(second)?;
            let start = natural_or_zero(first)?;
            match filter {
                None => Query::Range { start, count },
                Some(filter) => Query::Search { start, count, filter },
            }
        },
    };

    trace!(?query, "Parsed request");
    Ok(query)
}

fn integer(token: &str) -> Result<i64, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidInput)
}

fn natural_or_zero(token: &str) -> Result<u64, ParseError> {
    u64::try_from(integer(token)?).map_err(|_| ParseError::FirstMustBeNaturalOrZero)
}

fn natural(token: &str) -> Result<u64, ParseError> {
    match integer(token)? {
        value if value < 1 => Err(ParseError::SecondMustBeNatural),
        value => Ok(value.unsigned_abs()),
    }
}
