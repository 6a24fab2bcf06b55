//! Benchmark Harness - Sort-then-search protocol and the full run
//!
//! # Flow
//! ```text
//! 1. Linear search baseline        → reference time
//! 2. Bubble sort  → jump search    (budget = factor × reference)
//! 3. Quick sort   → binary search  (budget = factor × reference)
//! 4. Hash index   → exact lookups
//! ```
//!
//! A sort that runs out of budget is not an error: the phase falls back to
//! linear search and the report is marked unsorted, with the abandoned sort
//! time kept as preparation time.

use std::time::Duration;

use crate::core_types::{DEFAULT_BUDGET_FACTOR, FoundCount};
use crate::record::Record;
use crate::search::{
    BinarySearch, JumpSearch, SearchStrategy, hash_table_search, linear_search,
};
use crate::sort::{BubbleSort, QuickSort, SortStrategy};
use crate::timing::{SearchReport, TimeBudget, as_millis};

// ============================================================
// PHASES
// ============================================================

/// One step of the benchmark run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Linear,
    BubbleJump,
    QuickBinary,
    HashTable,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::Linear,
        Phase::BubbleJump,
        Phase::QuickBinary,
        Phase::HashTable,
    ];

    /// Human-readable strategy label used in the console report
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Linear => "linear search",
            Phase::BubbleJump => "bubble sort + jump search",
            Phase::QuickBinary => "quick sort + binary search",
            Phase::HashTable => "hash table",
        }
    }

    /// Name of the preparation step ("Sorting" or "Creating")
    pub fn prepare_label(&self) -> &'static str {
        match self {
            Phase::HashTable => "Creating",
            _ => "Sorting",
        }
    }
}

/// Report of one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseResult {
    pub phase: Phase,
    pub report: SearchReport,
}

impl PhaseResult {
    /// True when the phase's sort gave up and linear search was used instead
    pub fn fell_back(&self) -> bool {
        self.phase != Phase::Linear && !self.report.sorted
    }
}

/// All phases of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkRun {
    pub query_count: usize,
    pub reference_time: Duration,
    pub phases: Vec<PhaseResult>,
}

impl BenchmarkRun {
    pub fn phase(&self, phase: Phase) -> Option<&PhaseResult> {
        self.phases.iter().find(|r| r.phase == phase)
    }

    pub fn found(&self, phase: Phase) -> Option<FoundCount> {
        self.phase(phase).map(|r| r.report.found)
    }
}

// ============================================================
// OPTIONS
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkOptions {
    /// Sort budget multiplier applied to the linear baseline
    pub budget_factor: u32,
    /// Hand every phase the same working list instead of a fresh copy.
    ///
    /// Later phases then see the ordering left behind by earlier sorts.
    pub share_directory: bool,
}

impl Default for BenchmarkOptions {
    fn default() -> Self {
        Self {
            budget_factor: DEFAULT_BUDGET_FACTOR,
            share_directory: false,
        }
    }
}

// ============================================================
// SORT-THEN-SEARCH
// ============================================================

/// Sort `directory` in place within budget, then search it
///
/// Falls back to linear search when the sort reports it did not finish.
pub fn run_sorted_search(
    directory: &mut [Record],
    queries: &[String],
    budget: &TimeBudget,
    sorter: &dyn SortStrategy,
    searcher: &dyn SearchStrategy,
) -> SearchReport {
    let sort = sorter.sort(directory, budget);

    if !sort.finished {
        tracing::warn!(
            sorter = sorter.name(),
            searcher = searcher.name(),
            sort_ms = as_millis(sort.elapsed),
            budget_ms = as_millis(budget.limit()),
            "Sort out of budget, falling back to linear search"
        );
        let fallback = linear_search(directory, queries);
        return SearchReport {
            sorted: false,
            found: fallback.found,
            search_time: fallback.elapsed,
            prepare_time: sort.elapsed,
        };
    }

    let search = searcher.search(directory, queries);
    tracing::debug!(
        sorter = sorter.name(),
        searcher = searcher.name(),
        found = search.found,
        "Sorted search complete"
    );
    SearchReport {
        sorted: true,
        found: search.found,
        search_time: search.elapsed,
        prepare_time: sort.elapsed,
    }
}

// ============================================================
// FULL RUN
// ============================================================

/// Progress notifications emitted while a run is in flight
#[derive(Debug, Clone, Copy)]
pub enum PhaseEvent<'a> {
    Started(Phase),
    Finished(&'a PhaseResult),
}

/// Run every phase in order against `directory`
///
/// The input slice is never mutated. Each sorting phase works on its own
/// copy unless `options.share_directory` is set.
pub fn run_benchmark(
    directory: &[Record],
    queries: &[String],
    options: &BenchmarkOptions,
) -> BenchmarkRun {
    run_benchmark_with(directory, queries, options, |_| {})
}

/// Same as [`run_benchmark`], reporting each phase start and finish to `observer`
pub fn run_benchmark_with<F>(
    directory: &[Record],
    queries: &[String],
    options: &BenchmarkOptions,
    mut observer: F,
) -> BenchmarkRun
where
    F: FnMut(PhaseEvent<'_>),
{
    tracing::info!(
        records = directory.len(),
        queries = queries.len(),
        budget_factor = options.budget_factor,
        share_directory = options.share_directory,
        "Starting benchmark"
    );

    let mut shared = options.share_directory.then(|| directory.to_vec());
    let mut phases = Vec::with_capacity(Phase::ALL.len());

    observer(PhaseEvent::Started(Phase::Linear));
    let baseline = SearchReport::unprepared(linear_search(directory, queries));
    let reference_time = baseline.search_time;
    let budget = TimeBudget::from_reference(reference_time, options.budget_factor);
    record_phase(&mut phases, &mut observer, Phase::Linear, baseline);

    let pairings: [(Phase, &dyn SortStrategy, &dyn SearchStrategy); 2] = [
        (Phase::BubbleJump, &BubbleSort, &JumpSearch),
        (Phase::QuickBinary, &QuickSort, &BinarySearch),
    ];

    for (phase, sorter, searcher) in pairings {
        observer(PhaseEvent::Started(phase));
        let report = match shared.as_mut() {
            Some(working) => run_sorted_search(working, queries, &budget, sorter, searcher),
            None => {
                let mut working = directory.to_vec();
                run_sorted_search(&mut working, queries, &budget, sorter, searcher)
            }
        };
        record_phase(&mut phases, &mut observer, phase, report);
    }

    observer(PhaseEvent::Started(Phase::HashTable));
    let hashed = match shared.as_deref() {
        Some(working) => hash_table_search(working, queries),
        None => hash_table_search(directory, queries),
    };
    record_phase(&mut phases, &mut observer, Phase::HashTable, hashed);

    BenchmarkRun {
        query_count: queries.len(),
        reference_time,
        phases,
    }
}

fn record_phase<F>(
    phases: &mut Vec<PhaseResult>,
    observer: &mut F,
    phase: Phase,
    report: SearchReport,
) where
    F: FnMut(PhaseEvent<'_>),
{
    tracing::info!(
        phase = phase.label(),
        found = report.found,
        sorted = report.sorted,
        prepare_ms = as_millis(report.prepare_time),
        search_ms = as_millis(report.search_time),
        "Phase complete"
    );
    let result = PhaseResult { phase, report };
    observer(PhaseEvent::Finished(&result));
    phases.push(result);
}
