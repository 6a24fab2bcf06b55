//! Search strategies
//!
//! - [`linear`] - brute-force substring scan, also the fallback after a sort gives up
//! - [`jump`] - block-skip search over a name-sorted directory
//! - [`binary`] - exact-name binary search over a name-sorted directory
//! - [`hash_table`] - name index built once, then O(1) lookups

pub mod binary;
pub mod hash_table;
pub mod jump;
pub mod linear;

use crate::record::Record;
use crate::timing::SearchOutcome;

pub use binary::{BinarySearch, binary_search};
pub use hash_table::{HashIndex, hash_table_search};
pub use jump::{JumpSearch, jump_search};
pub use linear::{LinearSearch, linear_search};

/// Searches every query once against a directory
///
/// Sorted-input strategies assume the directory is ordered by name and do not
/// verify it.
pub trait SearchStrategy {
    fn name(&self) -> &'static str;

    fn search(&self, directory: &[Record], queries: &[String]) -> SearchOutcome;
}
