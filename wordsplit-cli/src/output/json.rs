//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs splits as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    splits: Vec<SplitData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SplitData {
    /// The input word
    pub word: String,
    /// Fragments in input order
    pub fragments: Vec<String>,
    /// Whether the word was split into more than one fragment
    pub compound: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            splits: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_split(&mut self, word: &str, fragments: &[String]) -> Result<()> {
        self.splits.push(SplitData {
            word: word.to_string(),
            fragments: fragments.to_vec(),
            compound: fragments.len() > 1,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.splits)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
