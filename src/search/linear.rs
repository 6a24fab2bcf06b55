//! Linear search - the baseline every sort budget is derived from

use std::time::Instant;

use super::SearchStrategy;
use crate::record::Record;
use crate::timing::SearchOutcome;

/// Scan the whole directory for every query
///
/// A query counts as found when any record's raw line contains it.
pub fn linear_search(directory: &[Record], queries: &[String]) -> SearchOutcome {
    let start = Instant::now();
    let found = queries
        .iter()
        .filter(|query| directory.iter().any(|record| record.contains(query.as_str())))
        .count();

    SearchOutcome {
        found,
        elapsed: start.elapsed(),
    }
}

pub struct LinearSearch;

impl SearchStrategy for LinearSearch {
    fn name(&self) -> &'static str {
        "linear search"
    }

    fn search(&self, directory: &[Record], queries: &[String]) -> SearchOutcome {
        linear_search(directory, queries)
    }
}
