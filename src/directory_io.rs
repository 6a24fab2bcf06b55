//! Directory I/O - Load phonebook and find-list files
//!
//! Both inputs are newline-delimited text. The directory file holds one
//! `<number> <name...>` record per line, the find file one name per line.
//! Blank lines are skipped; any other line that does not parse is fatal.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::record::Record;

// ============================================================
// Default file names
// ============================================================

pub const DIRECTORY_FILE: &str = "directory.txt";
pub const FIND_FILE: &str = "find.txt";

// ============================================================
// Loading
// ============================================================

/// Load every record of a directory file, in file order
pub fn load_directory(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let directory = parse_directory(BufReader::new(file))
        .with_context(|| format!("Failed to load {}", path.display()))?;

    tracing::info!(records = directory.len(), path = %path.display(), "Loaded directory");
    Ok(directory)
}

/// Parse directory records from any buffered reader
pub fn parse_directory<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut directory = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        directory.push(Record::parse(line, line_no)?);
    }

    Ok(directory)
}

/// Load the names to search for, in file order
pub fn load_queries(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let queries = parse_queries(BufReader::new(file))
        .with_context(|| format!("Failed to load {}", path.display()))?;

    tracing::info!(queries = queries.len(), path = %path.display(), "Loaded find list");
    Ok(queries)
}

/// Parse query names from any buffered reader
pub fn parse_queries<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut queries = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", idx + 1))?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        queries.push(line.to_string());
    }

    Ok(queries)
}

// ============================================================
// Writing
// ============================================================

/// Write lines to `path`, one per line, replacing any existing file
pub fn write_lines<I, S>(path: &Path, lines: I) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let mut count = 0;

    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        count += 1;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::record::RecordError;

    #[test]
    fn test_parse_directory_skips_blank_lines() {
        let text = "1 Alice A\r\n\n2 Bob B\n   \n3 Carol C";
        let directory = parse_directory(Cursor::new(text)).unwrap();

        assert_eq!(directory.len(), 3);
        assert_eq!(directory[0].line(), "1 Alice A");
        assert_eq!(directory[2].name(), "Carol C");
    }

    #[test]
    fn test_parse_directory_reports_malformed_line() {
        let text = "1 Alice A\n42\n";
        let err = parse_directory(Cursor::new(text)).unwrap_err();

        assert_eq!(
            err.downcast_ref::<RecordError>(),
            Some(&RecordError::Malformed {
                line_no: 2,
                line: "42".to_string()
            })
        );
    }

    #[test]
    fn test_parse_queries_keeps_inner_spaces() {
        let queries = parse_queries(Cursor::new("Bob B\n\nCarol  C\r\n")).unwrap();
        assert_eq!(queries, vec!["Bob B".to_string(), "Carol  C".to_string()]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = load_directory(Path::new("/nonexistent/phonebook/directory.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to open"));
    }
}
