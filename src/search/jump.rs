//! Jump search - block-skip search over a name-sorted directory
//!
//! Boundaries are visited every `round(sqrt(n))` records until one is not
//! smaller than the query (or the last record is reached). The block behind
//! that boundary is then scanned backwards with the loose substring match.

use std::time::Instant;

use super::SearchStrategy;
use crate::record::Record;
use crate::timing::SearchOutcome;

/// Block size for a directory of `len` records (at least 1)
#[inline]
pub fn block_size(len: usize) -> usize {
    ((len as f64).sqrt().round() as usize).max(1)
}

/// Search every query in a directory sorted by name ascending
pub fn jump_search(directory: &[Record], queries: &[String]) -> SearchOutcome {
    let start = Instant::now();
    let step = block_size(directory.len());
    let found = queries
        .iter()
        .filter(|query| jump_find(directory, query, step).is_some())
        .count();

    SearchOutcome {
        found,
        elapsed: start.elapsed(),
    }
}

/// Index of a record in the candidate block whose line contains `query`
fn jump_find(directory: &[Record], query: &str, step: usize) -> Option<usize> {
    let last = directory.len().checked_sub(1)?;
    let mut prev = 0;
    let mut boundary = 0;

    while boundary < last && directory[boundary].name() < query {
        prev = boundary;
        boundary = (boundary + step).min(last);
    }

    (prev..=boundary)
        .rev()
        .find(|&i| directory[i].contains(query))
}

pub struct JumpSearch;

impl SearchStrategy for JumpSearch {
    fn name(&self) -> &'static str {
        "jump search"
    }

    fn search(&self, directory: &[Record], queries: &[String]) -> SearchOutcome {
        jump_search(directory, queries)
    }
}
