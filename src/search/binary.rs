//! Binary search - exact name lookup over a name-sorted directory

use std::cmp::Ordering;
use std::time::Instant;

use super::SearchStrategy;
use crate::record::Record;
use crate::timing::SearchOutcome;

/// Search every query in a directory sorted by name ascending
///
/// Unlike linear and jump search, a query is only found when a record's name
/// equals it exactly.
pub fn binary_search(directory: &[Record], queries: &[String]) -> SearchOutcome {
    let start = Instant::now();
    let found = queries
        .iter()
        .filter(|query| binary_find(directory, query).is_some())
        .count();

    SearchOutcome {
        found,
        elapsed: start.elapsed(),
    }
}

/// Narrow `[left, right]` until a single candidate remains, then check it
fn binary_find(directory: &[Record], query: &str) -> Option<usize> {
    let mut left = 0;
    let mut right = directory.len().checked_sub(1)?;

    while left < right {
        let middle = left + (right - left) / 2;
        match directory[middle].name().cmp(query) {
            Ordering::Greater => {
                if middle == left {
                    break;
                }
                right = middle - 1;
            }
            Ordering::Less => left = middle + 1,
            Ordering::Equal => {
                left = middle;
                right = middle;
            }
        }
    }

    (directory[left].name() == query).then_some(left)
}

pub struct BinarySearch;

impl SearchStrategy for BinarySearch {
    fn name(&self) -> &'static str {
        "binary search"
    }

    fn search(&self, directory: &[Record], queries: &[String]) -> SearchOutcome {
        binary_search(directory, queries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::records_from;

    fn queries(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_only() {
        let directory = records_from(&["1 Alice A", "2 Bob B", "3 Carol C"]);
        assert_eq!(binary_search(&directory, &queries(&["Bob B"])).found, 1);
        assert_eq!(
            binary_search(&directory, &queries(&["Bob"])).found,
            0,
            "substrings are not exact names"
        );
    }

    #[test]
    fn test_out_of_range_queries() {
        let directory = records_from(&["1 Bob", "2 Cid", "3 Dan", "4 Eve"]);
        assert_eq!(binary_search(&directory, &queries(&["Aaron"])).found, 0);
        assert_eq!(binary_search(&directory, &queries(&["Zoe"])).found, 0);
    }

    #[test]
    fn test_finds_every_position() {
        let lines: Vec<String> = (0..37).map(|i| format!("{} Person{:03}", i, i)).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let directory = records_from(&refs);

        for (i, record) in directory.iter().enumerate() {
            assert_eq!(
                binary_find(&directory, record.name()),
                Some(i),
                "name at index {} not found",
                i
            );
        }
        assert_eq!(binary_find(&directory, "Person0105"), None);
    }

    #[test]
    fn test_duplicates_found_once() {
        let directory = records_from(&["1 Jo", "2 Jo", "3 Jo", "4 Kim"]);
        assert_eq!(binary_search(&directory, &queries(&["Jo", "Kim"])).found, 2);
    }

    #[test]
    fn test_empty_inputs() {
        let directory = records_from(&["1 Alice A"]);
        assert_eq!(binary_search(&directory, &[]).found, 0);
        assert_eq!(binary_search(&[], &queries(&["Alice A"])).found, 0);
    }
}
