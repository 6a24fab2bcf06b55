//! Phonebook Search - Sorting and searching strategies, timed side by side
//!
//! Loads a phonebook directory and a list of names, then measures how long
//! each strategy takes to find them.
//!
//! # Modules
//!
//! - [`core_types`] - Shared type aliases and constants
//! - [`record`] - `<number> <name>` directory entries
//! - [`directory_io`] - Directory and find-list file loading
//! - [`timing`] - Budgets, outcomes, min/sec/ms breakdown
//! - [`search`] - Linear, jump, binary and hash table search
//! - [`sort`] - Time-boxed bubble sort and quick sort
//! - [`harness`] - Sort-then-search protocol and full benchmark run
//! - [`report`] - Console report and summary file
//! - [`bench`] - Synthetic data generation
//! - [`config`] / [`logging`] - Application config and tracing setup

// Core types - must be first!
pub mod core_types;

pub mod record;
pub mod timing;

// Strategies
pub mod search;
pub mod sort;

// Orchestration and I/O
pub mod bench;
pub mod config;
pub mod directory_io;
pub mod harness;
pub mod logging;
pub mod report;

// Convenient re-exports at crate root
pub use core_types::{FoundCount, LineNo};
pub use harness::{
    BenchmarkOptions, BenchmarkRun, Phase, PhaseEvent, PhaseResult, run_benchmark,
    run_benchmark_with, run_sorted_search,
};
pub use record::{Record, RecordError, is_sorted_by_name};
pub use search::{
    BinarySearch, HashIndex, JumpSearch, LinearSearch, SearchStrategy, binary_search,
    hash_table_search, jump_search, linear_search,
};
pub use sort::{BubbleSort, QuickSort, SortStrategy, bubble_sort, quick_sort};
pub use timing::{SearchOutcome, SearchReport, SortOutcome, TimeBreakdown, TimeBudget};
