//! Convert command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use wordsplit_core::Dictionary;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Plain-text word list, one word per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination of the dictionary blob
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Suppress log and summary output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Reading word list from {}", self.input.display());
        let dictionary = Dictionary::from_text_file(&self.input)
            .with_context(|| format!("Failed to read word list: {}", self.input.display()))?;

        log::info!(
            "Saving {} words to {}",
            dictionary.len(),
            self.output.display()
        );
        dictionary
            .to_blob()
            .write_file(&self.output)
            .with_context(|| format!("Failed to write blob: {}", self.output.display()))?;

        if !self.quiet {
            println!(
                "Converted {} words into {}",
                dictionary.len(),
                self.output.display()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_convert_writes_loadable_blob() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("words.txt");
        let output = temp_dir.path().join("out").join("words.bin");
        fs::write(&input, "Auto\nbahn\n\nAuto\n").unwrap();

        let args = ConvertArgs {
            input,
            output: output.clone(),
            quiet: true,
            verbose: 0,
        };
        args.execute().unwrap();

        let dictionary = Dictionary::from_blob_file(&output).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("bahn"));
    }

    #[test]
    fn test_convert_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let args = ConvertArgs {
            input: PathBuf::from("/nonexistent/words.txt"),
            output: temp_dir.path().join("words.bin"),
            quiet: true,
            verbose: 0,
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to read word list"));
        assert!(!temp_dir.path().join("words.bin").exists());
    }
}
