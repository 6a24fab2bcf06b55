//! Synthetic phonebook generator
//!
//! Produces a deterministic directory (`<number> <First> <Last>` lines) and a
//! find list mixing names drawn from the directory with names that are not in
//! it. The same seed always yields the same files.

use std::path::Path;

use anyhow::{Result, bail};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::directory_io::write_lines;

const FIRST_NAMES: &[&str] = &[
    "Aaron", "Abigail", "Adam", "Alice", "Amelia", "Bella", "Benjamin", "Bob", "Carol", "Charlie",
    "Chloe", "Daniel", "Diana", "Edward", "Ella", "Emma", "Frank", "Grace", "Hannah", "Henry",
    "Isaac", "Isla", "Jack", "James", "Julia", "Karen", "Leo", "Lily", "Lucas", "Mia", "Noah",
    "Olivia", "Oscar", "Peter", "Quinn", "Ruby", "Samuel", "Sophie", "Thomas", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Baker", "Brown", "Carter", "Clark", "Davis", "Evans", "Fisher", "Garcia", "Green",
    "Hall", "Harris", "Hill", "Jackson", "Johnson", "King", "Lee", "Lewis", "Martin", "Miller",
    "Moore", "Nelson", "Parker", "Perez", "Roberts", "Robinson", "Scott", "Smith", "Taylor",
    "Thomas", "Turner", "Walker", "White", "Williams", "Wilson", "Wright", "Young",
];

/// Configuration for one generated data set
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub records: usize,
    pub queries: usize,
    /// Share of queries (0-100) that are guaranteed misses
    pub miss_percent: u32,
    /// Append the record index to every last name so names never repeat
    pub unique_names: bool,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            records: 10_000,
            queries: 500,
            miss_percent: 10,
            unique_names: true,
            seed: 42,
        }
    }
}

/// Generated directory and find-list lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedData {
    pub directory: Vec<String>,
    pub queries: Vec<String>,
}

/// Generate a directory and find list from `config`
pub fn generate(config: &GeneratorConfig) -> GeneratedData {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut names = Vec::with_capacity(config.records);
    let mut directory = Vec::with_capacity(config.records);
    for idx in 0..config.records {
        let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        let name = if config.unique_names {
            format!("{} {}{}", first, last, idx)
        } else {
            format!("{} {}", first, last)
        };
        let number: u32 = rng.gen_range(1_000_000..10_000_000);
        directory.push(format!("{} {}", number, name));
        names.push(name);
    }

    let mut queries = Vec::with_capacity(config.queries);
    for idx in 0..config.queries {
        let miss = names.is_empty() || rng.gen_range(0..100) < config.miss_percent;
        if miss {
            // No generated line contains "Missing", so this never matches
            queries.push(format!("Missing{} Nobody", idx));
        } else if let Some(name) = names.choose(&mut rng) {
            queries.push(name.clone());
        }
    }

    GeneratedData { directory, queries }
}

/// Write a generated data set to new files
///
/// Refuses to touch either path if it already exists, so existing data sets
/// are never overwritten. Returns `(records, queries)` written.
pub fn write_generated(
    data: &GeneratedData,
    directory_path: &Path,
    find_path: &Path,
) -> Result<(usize, usize)> {
    for path in [directory_path, find_path] {
        if path.exists() {
            bail!(
                "Refusing to overwrite existing {}; point --input at an empty directory",
                path.display()
            );
        }
    }

    let records = write_lines(directory_path, &data.directory)?;
    let queries = write_lines(find_path, &data.queries)?;
    Ok((records, queries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn small() -> GeneratorConfig {
        GeneratorConfig {
            records: 200,
            queries: 50,
            miss_percent: 20,
            unique_names: true,
            seed: 7,
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        assert_eq!(generate(&small()), generate(&small()));

        let other = GeneratorConfig {
            seed: 8,
            ..small()
        };
        assert_ne!(generate(&small()), generate(&other));
    }

    #[test]
    fn test_lines_parse_as_records() {
        let data = generate(&small());
        assert_eq!(data.directory.len(), 200);
        assert_eq!(data.queries.len(), 50);

        for (i, line) in data.directory.iter().enumerate() {
            let record = Record::parse(line, i + 1).unwrap();
            assert_eq!(record.number().len(), 7);
        }
    }

    #[test]
    fn test_unique_names() {
        let data = generate(&small());
        let mut names: Vec<String> = data
            .directory
            .iter()
            .map(|l| Record::parse(l, 1).unwrap().name().to_string())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 200);
    }

    #[test]
    fn test_empty_directory_only_misses() {
        let data = generate(&GeneratorConfig {
            records: 0,
            queries: 5,
            ..small()
        });
        assert!(data.directory.is_empty());
        assert!(data.queries.iter().all(|q| q.starts_with("Missing")));
    }

    #[test]
    fn test_write_generated_creates_files() {
        let dir = tempfile::tempdir().unwrap();
        let directory_path = dir.path().join("directory.txt");
        let find_path = dir.path().join("find.txt");

        let data = generate(&small());
        let written = write_generated(&data, &directory_path, &find_path).unwrap();
        assert_eq!(written, (200, 50));

        let text = std::fs::read_to_string(&directory_path).unwrap();
        assert_eq!(text.lines().count(), 200);
    }

    #[test]
    fn test_write_generated_keeps_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let directory_path = dir.path().join("directory.txt");
        let find_path = dir.path().join("find.txt");
        std::fs::write(&find_path, "Bob B\n").unwrap();

        let err = write_generated(&generate(&small()), &directory_path, &find_path).unwrap_err();
        assert!(err.to_string().contains("Refusing to overwrite"));
        assert_eq!(std::fs::read_to_string(&find_path).unwrap(), "Bob B\n");
        assert!(!directory_path.exists(), "nothing written when any target exists");
    }
}
