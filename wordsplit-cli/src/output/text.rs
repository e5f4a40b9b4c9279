//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs the word, a tab and its fragments
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_split(&mut self, word: &str, fragments: &[String]) -> Result<()> {
        writeln!(self.writer, "{}\t{}", word, fragments.join(" "))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_per_word() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter
            .format_split("Autobahn", &["Auto".to_string(), "Bahn".to_string()])
            .unwrap();
        formatter
            .format_split("Katze", &["Katze".to_string()])
            .unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(output, "Autobahn\tAuto Bahn\nKatze\tKatze\n");
    }
}
