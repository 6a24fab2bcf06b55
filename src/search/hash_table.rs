//! Hash table search - build a name index once, then look queries up
//!
//! Unlike the sorted strategies there is no sort step that can give up, so the
//! report is always marked as prepared. Index construction is timed as the
//! preparation phase.

use std::time::Instant;

use rustc_hash::FxHashMap;

use crate::record::Record;
use crate::timing::SearchReport;

/// Transient name → number index borrowing the directory
///
/// Later records overwrite earlier ones with the same name.
pub struct HashIndex<'a> {
    table: FxHashMap<&'a str, &'a str>,
}

impl<'a> HashIndex<'a> {
    pub fn build(directory: &'a [Record]) -> Self {
        let mut table = FxHashMap::default();
        table.reserve(directory.len());
        for record in directory {
            table.insert(record.name(), record.number());
        }
        Self { table }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.table.get(name).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of distinct names
    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }
}

/// Build the index, then count exact-name hits
pub fn hash_table_search(directory: &[Record], queries: &[String]) -> SearchReport {
    let prepare_start = Instant::now();
    let index = HashIndex::build(directory);
    let prepare_time = prepare_start.elapsed();
    tracing::debug!(
        records = directory.len(),
        distinct_names = index.len(),
        "Hash index built"
    );

    let search_start = Instant::now();
    let found = queries.iter().filter(|query| index.contains(query)).count();
    let search_time = search_start.elapsed();

    SearchReport {
        sorted: true,
        found,
        search_time,
        prepare_time,
    }
}
