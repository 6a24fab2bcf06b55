//! Time-boxed in-place sorts by name
//!
//! - [`bubble`] - adjacent-swap passes, budget checked after each pass
//! - [`quick`] - first-element pivot partition sort, budget checked after each partition
//!
//! A sort that runs out of budget stops where it is and reports
//! `finished == false`; the slice is then only partially ordered.

pub mod bubble;
pub mod quick;

use crate::record::Record;
use crate::timing::{SortOutcome, TimeBudget};

pub use bubble::{BubbleSort, bubble_sort};
pub use quick::{QuickSort, quick_sort};

/// Sorts a directory by name ascending within a time budget
pub trait SortStrategy {
    fn name(&self) -> &'static str;

    fn sort(&self, directory: &mut [Record], budget: &TimeBudget) -> SortOutcome;
}
