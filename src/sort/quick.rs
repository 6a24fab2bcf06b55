//! Quick sort with a per-partition budget check
//!
//! Pivot is the first record of the range. The scan advances the left cursor
//! past names `<=` the pivot and the right cursor past names `>=` the pivot,
//! swapping only when both are stuck, so runs of equal names always make
//! progress.
//!
//! Each partition frame recurses into the smaller side and keeps working on
//! the larger side itself, which bounds the stack to `O(log n)` frames even on
//! already-sorted input.

use std::cmp::Ordering;
use std::time::Instant;

use super::SortStrategy;
use crate::record::Record;
use crate::timing::{SortOutcome, TimeBudget};

/// Sort by name ascending; stops at the first partition step over budget
pub fn quick_sort(directory: &mut [Record], budget: &TimeBudget) -> SortOutcome {
    let start = Instant::now();
    let finished = sort_range(directory, budget);
    let elapsed = start.elapsed();

    if finished {
        SortOutcome::finished(elapsed)
    } else {
        tracing::debug!(records = directory.len(), "quick sort out of budget");
        SortOutcome::aborted(elapsed)
    }
}

/// Returns false as soon as this frame (children included) is over budget
fn sort_range(mut range: &mut [Record], budget: &TimeBudget) -> bool {
    let start = Instant::now();

    while range.len() > 1 {
        let current = std::mem::take(&mut range);
        let pivot = partition(current);
        let (left, rest) = current.split_at_mut(pivot);
        let right = &mut rest[1..];

        let (smaller, larger) = if left.len() <= right.len() {
            (left, right)
        } else {
            (right, left)
        };

        if !sort_range(smaller, budget) {
            return false;
        }
        if budget.is_exceeded(start.elapsed()) {
            return false;
        }
        range = larger;
    }

    true
}

/// Partition around `range[0]`; returns the pivot's final index
fn partition(range: &mut [Record]) -> usize {
    let mut left = 1;
    let mut right = range.len() - 1;

    while left <= right {
        if range[left].cmp_name(&range[0]) != Ordering::Greater {
            left += 1;
        } else if range[right].cmp_name(&range[0]) != Ordering::Less {
            right -= 1;
        } else {
            range.swap(left, right);
            left += 1;
            right -= 1;
        }
    }

    range.swap(0, right);
    right
}

pub struct QuickSort;

impl SortStrategy for QuickSort {
    fn name(&self) -> &'static str {
        "quick sort"
    }

    fn sort(&self, directory: &mut [Record], budget: &TimeBudget) -> SortOutcome {
        quick_sort(directory, budget)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    use super::*;
    use crate::record::{is_sorted_by_name, records_from};

    fn numbered(count: usize) -> Vec<Record> {
        let lines: Vec<String> = (0..count).map(|i| format!("{} Name{:05}", i, i)).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        records_from(&refs)
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut range = records_from(&["5 Eve", "9 Zed", "1 Ann", "4 Dan", "7 Eve", "2 Bob"]);
        let pivot = partition(&mut range);

        assert_eq!(range[pivot].name(), "Eve");
        assert!(range[..pivot].iter().all(|r| r.name() <= "Eve"));
        assert!(range[pivot + 1..].iter().all(|r| r.name() >= "Eve"));
    }

    #[test]
    fn test_sorts_shuffled_input() {
        let mut directory = numbered(500);
        let mut rng = StdRng::seed_from_u64(0x5EED);
        directory.shuffle(&mut rng);

        let outcome = quick_sort(&mut directory, &TimeBudget::unlimited());
        assert!(outcome.finished);
        assert!(is_sorted_by_name(&directory));
        assert_eq!(directory.len(), 500);
    }

    #[test]
    fn test_sorted_and_reversed_input() {
        let mut sorted = numbered(2000);
        assert!(quick_sort(&mut sorted, &TimeBudget::unlimited()).finished);
        assert!(is_sorted_by_name(&sorted));

        let mut reversed = numbered(2000);
        reversed.reverse();
        assert!(quick_sort(&mut reversed, &TimeBudget::unlimited()).finished);
        assert!(is_sorted_by_name(&reversed));
    }

    #[test]
    fn test_all_equal_names_terminate() {
        let lines: Vec<String> = (0..300).map(|i| format!("{} Same Name", i)).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut directory = records_from(&refs);

        let outcome = quick_sort(&mut directory, &TimeBudget::unlimited());
        assert!(outcome.finished);
        assert_eq!(directory.len(), 300);
    }

    #[test]
    fn test_trivial_inputs_finish_even_without_budget() {
        let zero = TimeBudget::new(Duration::ZERO);

        let mut empty: Vec<Record> = Vec::new();
        assert!(quick_sort(&mut empty, &zero).finished);

        let mut single = records_from(&["1 Solo"]);
        assert!(quick_sort(&mut single, &zero).finished);
    }

    #[test]
    fn test_zero_budget_aborts() {
        let mut directory = records_from(&["2 Bob", "1 Alice"]);
        let outcome = quick_sort(&mut directory, &TimeBudget::from_reference(Duration::ZERO, 10));
        assert!(!outcome.finished);

        let mut larger = numbered(64);
        larger.reverse();
        assert!(!quick_sort(&mut larger, &TimeBudget::new(Duration::ZERO)).finished);
    }

    #[test]
    fn test_zero_budget_stops_after_first_partition() {
        let mut directory = numbered(2000);
        directory.reverse();

        let outcome = quick_sort(&mut directory, &TimeBudget::new(Duration::ZERO));
        assert!(!outcome.finished);
        assert!(!is_sorted_by_name(&directory), "remaining partitions must not run");

        // Only the first partition ran: the pivot (largest name) went to the end
        // and swapped places with the smallest; the middle is still descending.
        assert_eq!(directory[1999].name(), "Name01999");
        assert_eq!(directory[0].name(), "Name00000");
        assert!(directory[1..1999].windows(2).all(|w| w[0].name() > w[1].name()));
    }

    #[test]
    fn test_strategy_delegates() {
        let mut directory = records_from(&["3 Cid", "1 Ann", "2 Ben"]);
        let outcome = QuickSort.sort(&mut directory, &TimeBudget::unlimited());
        assert!(outcome.finished);
        assert_eq!(QuickSort.name(), "quick sort");
        assert!(is_sorted_by_name(&directory));
    }
}
