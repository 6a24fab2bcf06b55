//! Bubble sort with a per-pass budget check

use std::cmp::Ordering;
use std::time::Instant;

use super::SortStrategy;
use crate::record::Record;
use crate::timing::{SortOutcome, TimeBudget};

/// Classic `n-1` pass bubble sort
///
/// Each pass moves the largest remaining name to the end of the unsorted
/// prefix. The budget is checked after every full pass.
pub fn bubble_sort(directory: &mut [Record], budget: &TimeBudget) -> SortOutcome {
    let start = Instant::now();
    let n = directory.len();

    for pass in 1..n {
        for j in 0..n - pass {
            if directory[j].cmp_name(&directory[j + 1]) == Ordering::Greater {
                directory.swap(j, j + 1);
            }
        }

        let elapsed = start.elapsed();
        if budget.is_exceeded(elapsed) {
            tracing::debug!(pass, total_passes = n - 1, "bubble sort out of budget");
            return SortOutcome::aborted(elapsed);
        }
    }

    SortOutcome::finished(start.elapsed())
}

pub struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble sort"
    }

    fn sort(&self, directory: &mut [Record], budget: &TimeBudget) -> SortOutcome {
        bubble_sort(directory, budget)
    }
}
