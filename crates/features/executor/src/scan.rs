use anum_classifier::{classify, describe};
use anum_domain::{Classified, Filter};
use tracing::{debug, trace, warn};

/// Largest candidate a scan will examine.
pub const UPPER_BOUND: u64 = i64::MAX.unsigned_abs();

/// The successor of `value`, unless it would pass [`UPPER_BOUND`].
fn advance(value: u64) -> Option<u64> {
    value.checked_add(1).filter(|next| *next <= UPPER_BOUND)
}

/// `count` consecutive values, unfiltered.
#[derive(Debug, Clone)]
pub struct RangeScan {
    next: Option<u64>,
    remaining: u64,
}

impl RangeScan {
    pub fn new(start: u64, count: u64) -> Self {
        let next = (start <= UPPER_BOUND).then_some(start);
        Self { next, remaining: count }
    }
}

impl Iterator for RangeScan {
    type Item = Classified;

    fn next(&mut self) -> Option<Classified> {
        if self.remaining == 0 {
            return None;
        }
        let Some(value) = self.next else {
            debug!(remaining = self.remaining, "Range stopped at the upper bound");
            self.remaining = 0;
            return None;
        };
        self.remaining -= 1;
        self.next = advance(value);
        Some(describe(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let available = self.next.map_or(0, |next| UPPER_BOUND - next + 1);
        let upper = usize::try_from(self.remaining.min(available)).ok();
        (0, upper)
    }
}

/// Values from a start upward that pass a [`Filter`], until `count` are found.
///
/// Without a limit an impossible filter keeps scanning; with one, the scan
/// gives up after examining that many candidates and reports [`truncated`].
///
/// [`truncated`]: SearchScan::truncated
#[derive(Debug, Clone)]
pub struct SearchScan {
    next: Option<u64>,
    remaining: u64,
    filter: Filter,
    limit: Option<u64>,
    examined: u64,
    truncated: bool,
}

impl SearchScan {
    pub fn new(start: u64, count: u64, filter: Filter, limit: Option<u64>) -> Self {
        let next = (start <= UPPER_BOUND).then_some(start);
        Self { next, remaining: count, filter, limit, examined: 0, truncated: false }
    }

    /// True once the candidate limit ended the scan early.
    pub const fn truncated(&self) -> bool {
        self.truncated
    }

    /// Candidates classified so far.
    pub const fn examined(&self) -> u64 {
        self.examined
    }

    pub const fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Iterator for SearchScan {
    type Item = Classified;

    fn next(&mut self) -> Option<Classified> {
        while self.remaining > 0 {
            let Some(value) = self.next else {
                debug!(remaining = self.remaining, "Search stopped at the upper bound");
                return None;
            };

            if let Some(limit) = self.limit
                && self.examined >= limit
            {
                if !self.truncated {
                    warn!(
                        limit,
                        missing = self.remaining,
                        "Scan limit reached before enough matches were found"
                    );
                    self.truncated = true;
                }
                return None;
            }

            self.examined += 1;
            self.next = advance(value);

            let properties = classify(value);
            if self.filter.accepts(properties) {
                self.remaining -= 1;
                trace!(value, examined = self.examined, "Search match");
                return Some(Classified::new(value, properties));
            }
        }
        None
    }
}
