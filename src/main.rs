//! Phonebook Search - benchmark entry point
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│  Load    │───▶│ Harness  │───▶│  Report  │
//! │  (YAML)  │    │ (text)   │    │ (phases) │    │ (stdout) │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};

use phonebook_search::bench::directory_generator::{GeneratorConfig, generate, write_generated};
use phonebook_search::config::AppConfig;
use phonebook_search::directory_io::{load_directory, load_queries};
use phonebook_search::harness::{BenchmarkOptions, PhaseEvent, run_benchmark_with};
use phonebook_search::report::{phase_heading, render_phase, write_summary};

// ============================================================
// COMMAND LINE
// ============================================================

fn get_arg(names: &[&str]) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if names.contains(&args[i].as_str()) && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn get_env() -> String {
    get_arg(&["--env", "-e"]).unwrap_or_else(|| "dev".to_string())
}

/// `--input <dir>` overrides the configured data directory
fn get_input_dir() -> Option<String> {
    get_arg(&["--input"])
}

/// `--generate <n>` writes an n-record synthetic data set before running;
/// it fails rather than overwrite existing input files
fn get_generate_count() -> Result<Option<usize>> {
    get_arg(&["--generate"])
        .map(|n| n.parse().with_context(|| format!("Invalid --generate value: {}", n)))
        .transpose()
}

// ============================================================
// MAIN
// ============================================================

fn main() -> Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    if let Some(input_dir) = get_input_dir() {
        app_config.data_dir = input_dir;
    }
    let _log_guard = phonebook_search::logging::init_logging(&app_config);

    tracing::info!(
        "Starting phonebook search ({}) in {} mode",
        env!("GIT_HASH"),
        env
    );

    let directory_path = app_config.directory_path();
    let find_path = app_config.find_path();

    if let Some(records) = get_generate_count()? {
        generate_fixtures(&app_config, records)?;
    }

    let directory = load_directory(&directory_path)?;
    let queries = load_queries(&find_path)?;

    let options = BenchmarkOptions {
        budget_factor: app_config.budget_factor,
        share_directory: app_config.share_directory,
    };

    let run = run_benchmark_with(&directory, &queries, &options, |event| match event {
        PhaseEvent::Started(phase) => println!("{}", phase_heading(phase)),
        PhaseEvent::Finished(result) => print!("{}", render_phase(result, queries.len())),
    });

    if let Some(summary_path) = app_config.summary_path() {
        write_summary(&summary_path, &run)?;
    }

    Ok(())
}

fn generate_fixtures(app_config: &AppConfig, records: usize) -> Result<()> {
    let data_dir = PathBuf::from(&app_config.data_dir);
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;

    let data = generate(&GeneratorConfig {
        records,
        queries: (records / 20).max(1),
        ..Default::default()
    });

    let (written, query_lines) =
        write_generated(&data, &app_config.directory_path(), &app_config.find_path())?;
    tracing::info!(
        records = written,
        queries = query_lines,
        dir = %data_dir.display(),
        "Generated synthetic data"
    );
    Ok(())
}
