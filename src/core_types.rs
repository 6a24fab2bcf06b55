//! Core types used throughout the benchmark
//!
//! Type aliases shared by the search strategies, the harness and the report.

/// Number of queries that matched at least one directory entry.
///
/// # Constraints:
/// - Never larger than the number of queries searched
/// - Each query contributes at most once, even if several records match
pub type FoundCount = usize;

/// 1-based line number inside an input file, used in error messages
pub type LineNo = usize;

/// Default multiplier applied to the linear-search baseline to get a sort budget
pub const DEFAULT_BUDGET_FACTOR: u32 = 10;
