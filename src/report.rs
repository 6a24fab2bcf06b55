//! Report - Console rendering and summary file
//!
//! Rendering returns strings so the exact line format can be tested; the
//! binary prints them.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::harness::{BenchmarkRun, Phase, PhaseResult};
use crate::timing::{TimeBreakdown, as_millis};

pub const FALLBACK_MARKER: &str = " - STOPPED, moved to linear search";

/// Heading printed before a phase starts
pub fn phase_heading(phase: Phase) -> String {
    format!("Start searching ({})...", phase.label())
}

/// Lines reported for a finished phase (without the heading)
///
/// The linear baseline only reports the found line; other phases add the
/// preparation and searching breakdowns.
pub fn render_phase(result: &PhaseResult, query_count: usize) -> String {
    let report = &result.report;
    let mut out = format!(
        "Found {} / {} entries. Time taken: {}\n",
        report.found,
        query_count,
        TimeBreakdown::from_duration(report.total_time())
    );

    if result.phase == Phase::Linear {
        return out;
    }

    let marker = if result.fell_back() { FALLBACK_MARKER } else { "" };
    out.push_str(&format!(
        "{} time: {}{}\n",
        result.phase.prepare_label(),
        TimeBreakdown::from_duration(report.prepare_time),
        marker
    ));
    out.push_str(&format!(
        "Searching time: {}\n",
        TimeBreakdown::from_duration(report.search_time)
    ));
    out
}

/// Full console report: heading plus lines for every phase
pub fn render_run(run: &BenchmarkRun) -> String {
    let mut out = String::new();
    for result in &run.phases {
        out.push_str(&phase_heading(result.phase));
        out.push('\n');
        out.push_str(&render_phase(result, run.query_count));
    }
    out
}

/// Write the rendered report plus a `key=value` perf baseline
pub fn write_summary(path: &Path, run: &BenchmarkRun) -> Result<()> {
    let mut summary = format!(
        "# Phonebook search benchmark\n# Generated: {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    summary.push_str(&render_run(run));
    summary.push('\n');

    summary.push_str(&format!(
        "queries={}\nreference_ms={}\n",
        run.query_count,
        as_millis(run.reference_time)
    ));
    for result in &run.phases {
        let key = phase_key(result.phase);
        let report = &result.report;
        summary.push_str(&format!(
            "{key}_found={}\n{key}_sorted={}\n{key}_prepare_ms={}\n{key}_search_ms={}\n",
            report.found,
            report.sorted,
            as_millis(report.prepare_time),
            as_millis(report.search_time),
        ));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, summary).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Summary written");
    Ok(())
}

fn phase_key(phase: Phase) -> &'static str {
    match phase {
        Phase::Linear => "linear",
        Phase::BubbleJump => "bubble_jump",
        Phase::QuickBinary => "quick_binary",
        Phase::HashTable => "hash_table",
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::timing::SearchReport;

    fn result(phase: Phase, sorted: bool, prepare_ms: u64, search_ms: u64) -> PhaseResult {
        PhaseResult {
            phase,
            report: SearchReport {
                sorted,
                found: 498,
                search_time: Duration::from_millis(search_ms),
                prepare_time: Duration::from_millis(prepare_ms),
            },
        }
    }

    #[test]
    fn test_render_sorted_phase() {
        let text = render_phase(&result(Phase::QuickBinary, true, 61_250, 1_003), 500);
        assert_eq!(
            text,
            "Found 498 / 500 entries. Time taken: 1 min. 2 sec. 253 ms.\n\
             Sorting time: 1 min. 1 sec. 250 ms.\n\
             Searching time: 0 min. 1 sec. 3 ms.\n"
        );
    }

    #[test]
    fn test_render_fallback_marker() {
        let text = render_phase(&result(Phase::BubbleJump, false, 900, 100), 500);
        assert!(text.contains("Sorting time: 0 min. 0 sec. 900 ms. - STOPPED, moved to linear search\n"));
    }

    #[test]
    fn test_render_hash_table_uses_creating_label() {
        let text = render_phase(&result(Phase::HashTable, true, 12, 3), 500);
        assert!(text.contains("Creating time: 0 min. 0 sec. 12 ms.\n"));
        assert!(!text.contains(FALLBACK_MARKER));
    }

    #[test]
    fn test_render_linear_baseline_is_one_line() {
        let text = render_phase(&result(Phase::Linear, false, 0, 4_321), 500);
        assert_eq!(text, "Found 498 / 500 entries. Time taken: 0 min. 4 sec. 321 ms.\n");
    }

    #[test]
    fn test_render_run_has_headings() {
        let run = BenchmarkRun {
            query_count: 500,
            reference_time: Duration::from_millis(5),
            phases: vec![
                result(Phase::Linear, false, 0, 5),
                result(Phase::HashTable, true, 1, 1),
            ],
        };
        let text = render_run(&run);
        assert!(text.starts_with("Start searching (linear search)...\n"));
        assert!(text.contains("Start searching (hash table)...\n"));
    }

    #[test]
    fn test_write_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("summary.txt");
        let run = BenchmarkRun {
            query_count: 500,
            reference_time: Duration::from_millis(5),
            phases: vec![result(Phase::BubbleJump, false, 50, 5)],
        };

        write_summary(&path, &run).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# Phonebook search benchmark\n# Generated: "));
        assert!(text.contains("queries=500\nreference_ms=5\n"));
        assert!(text.contains(
            "bubble_jump_found=498\nbubble_jump_sorted=false\n\
             bubble_jump_prepare_ms=50\nbubble_jump_search_ms=5\n"
        ));
        assert!(text.contains(FALLBACK_MARKER));
    }
}
