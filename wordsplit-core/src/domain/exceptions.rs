//! Curated overrides for compounds the algorithm splits wrongly
//!
//! Each non-comment line holds a compound followed by its fragments,
//! separated by a single delimiter character:
//!
//! ```text
//! # compound|fragment|fragment...
//! Staubecken|Stau|becken
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Default field delimiter for exception files
pub const DEFAULT_DELIMITER: char = '|';

/// Mapping from a full compound to its authoritative split
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionTable {
    entries: HashMap<String, Vec<String>>,
}

impl ExceptionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse exception text; malformed lines are skipped
    pub fn parse(text: &str, delimiter: char) -> Self {
        let mut table = Self::new();
        for (index, line) in text.lines().enumerate() {
            table.parse_line(line, index + 1, delimiter);
        }
        log::debug!("Loaded {} exception entries", table.len());
        table
    }

    /// Read exception text from a stream
    pub fn from_reader<R: Read>(reader: R, delimiter: char) -> Result<Self> {
        Self::read_lines(reader, delimiter, "stream")
    }

    /// Read exception text from a UTF-8 file
    pub fn from_file(path: &Path, delimiter: char) -> Result<Self> {
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| Error::io(name.clone(), e))?;
        Self::read_lines(file, delimiter, &name)
    }

    fn read_lines<R: Read>(reader: R, delimiter: char, source_name: &str) -> Result<Self> {
        let mut table = Self::new();
        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line.map_err(|e| Error::io(source_name, e))?;
            table.parse_line(&line, index + 1, delimiter);
        }
        log::debug!(
            "Loaded {} exception entries from {}",
            table.len(),
            source_name
        );
        Ok(table)
    }

    fn parse_line(&mut self, line: &str, line_number: usize, delimiter: char) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();
        let Some((compound, fragments)) = fields.split_first() else {
            return;
        };

        if compound.is_empty() || fragments.is_empty() || fragments.iter().any(|f| f.is_empty()) {
            log::warn!("Skipping malformed exception entry on line {line_number}: {line:?}");
            return;
        }

        self.insert(
            *compound,
            fragments.iter().map(|f| f.to_string()).collect::<Vec<_>>(),
        );
    }

    /// Add or replace an entry
    pub fn insert(&mut self, compound: impl Into<String>, fragments: Vec<String>) {
        let compound = compound.into();
        if let Some(previous) = self.entries.insert(compound.clone(), fragments) {
            log::warn!("Exception entry for {compound:?} replaces {previous:?}");
        }
    }

    /// Authoritative split for `word`, if one exists
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
