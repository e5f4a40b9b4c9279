//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs splits as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
    compound_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
            compound_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_split(&mut self, word: &str, fragments: &[String]) -> Result<()> {
        self.word_count += 1;
        if fragments.len() > 1 {
            self.compound_count += 1;
        }
        writeln!(
            self.writer,
            "{}. **{}**: {}",
            self.word_count,
            word,
            fragments.join(" + ")
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total words: {} (compounds: {})*",
            self.word_count, self.compound_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
