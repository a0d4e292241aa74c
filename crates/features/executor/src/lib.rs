//! # Query Executor
//!
//! Runs a parsed [`Query`] against the classifier.
//!
//! Ranges and searches are lazy iterators: nothing is classified until the
//! caller pulls the next result, so a search can be printed as each match is
//! found. Candidates never go past `i64::MAX`; a scan that would step beyond it
//! simply ends.
//!
//! ```rust
//! use anum_domain::{Filter, PropertySet, Query};
//! use anum_executor::{Execution, Executor};
//!
//! let query = Query::Search { start: 1, count: 3, filter: Filter::new(PropertySet::EVEN, PropertySet::empty()) };
//! let Execution::Search(scan) = Executor::default().execute(query) else { unreachable!() };
//! let values: Vec<u64> = scan.map(|c| c.value).collect();
//! assert_eq!(values, [2, 4, 6]);
//! ```

mod scan;

pub use crate::scan::{RangeScan, SearchScan, UPPER_BOUND};

use anum_domain::config::ScanConfig;
use anum_domain::{Classified, Filter, Query};
use tracing::instrument;

/// What a query produced.
#[derive(Debug)]
pub enum Execution {
    Single(Classified),
    Range(RangeScan),
    Search(SearchScan),
    Exit,
}

/// Executes queries with an optional cap on search candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Executor {
    limit: Option<u64>,
}

impl Executor {
    /// `limit` caps how many candidates one search may examine; `None` is unbounded.
    pub const fn new(limit: Option<u64>) -> Self {
        Self { limit }
    }

    pub const fn limit(&self) -> Option<u64> {
        self.limit
    }

    #[instrument(level = "debug", skip(self))]
    pub fn execute(&self, query: Query) -> Execution {
        match query {
            Query::Single(value) => Execution::Single(anum_classifier::describe(value)),
            Query::Range { start, count } => Execution::Range(RangeScan::new(start, count)),
            Query::Search { start, count, filter } => {
                Execution::Search(self.search(start, count, filter))
            },
            Query::Exit => Execution::Exit,
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn search(&self, start: u64, count: u64, filter: Filter) -> SearchScan {
        SearchScan::new(start, count, filter, self.limit)
    }
}

impl From<&ScanConfig> for Executor {
    fn from(config: &ScanConfig) -> Self {
        Self::new(config.limit)
    }
}
