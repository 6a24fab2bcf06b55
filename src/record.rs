//! Record - One phonebook line
//!
//! A directory line reads `<number> <name...>`. The first token is the number,
//! the remaining tokens joined by single spaces form the name key used for
//! sorting and exact lookups. The raw line is kept verbatim because the
//! substring-based strategies match against it.

use std::cmp::Ordering;

use thiserror::Error;

use crate::core_types::LineNo;

/// Record parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Malformed record at line {line_no}: '{line}' (expected '<number> <name>')")]
    Malformed { line_no: LineNo, line: String },
}

/// Immutable phonebook entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    line: String,
    number: String,
    name: String,
}

impl Record {
    /// Parse a directory line
    ///
    /// # Errors
    /// * `Malformed` - fewer than two whitespace-separated tokens
    pub fn parse(line: &str, line_no: LineNo) -> Result<Self, RecordError> {
        let mut tokens = line.split_whitespace();
        let (Some(number), Some(first)) = (tokens.next(), tokens.next()) else {
            return Err(RecordError::Malformed {
                line_no,
                line: line.to_string(),
            });
        };

        let mut name = first.to_string();
        for token in tokens {
            name.push(' ');
            name.push_str(token);
        }

        Ok(Self {
            line: line.to_string(),
            number: number.to_string(),
            name,
        })
    }

    /// Raw line as read from the directory file
    #[inline]
    pub fn line(&self) -> &str {
        &self.line
    }

    #[inline]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Name key (all tokens after the number)
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Loose match used by linear and jump search: the raw line contains the query
    #[inline]
    pub fn contains(&self, query: &str) -> bool {
        self.line.contains(query)
    }

    /// Compare name keys
    #[inline]
    pub fn cmp_name(&self, other: &Record) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// True when every adjacent pair is non-decreasing by name
pub fn is_sorted_by_name(records: &[Record]) -> bool {
    records
        .windows(2)
        .all(|w| w[0].cmp_name(&w[1]) != Ordering::Greater)
}

/// Parse literal lines; test helper
#[cfg(test)]
pub(crate) fn records_from(lines: &[&str]) -> Vec<Record> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| Record::parse(line, i + 1).expect("test record"))
        .collect()
}
