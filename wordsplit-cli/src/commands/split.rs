//! Split command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordsplit_core::{InterfixMode, WordSplitter};

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::language_source::LanguageSource;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Words to split
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Input files or patterns (supports glob), tokenized on whitespace
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Built-in language
    #[arg(short, long, value_enum, conflicts_with = "language_config")]
    pub language: Option<Language>,

    /// External language configuration file (TOML)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Plain-text dictionary, one word per line
    #[arg(long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Precompiled dictionary blob (see `convert`)
    #[arg(long, value_name = "FILE")]
    pub dictionary_blob: Option<PathBuf>,

    /// Exception file (`compound|fragment|fragment...`)
    #[arg(long, value_name = "FILE", conflicts_with = "no_exceptions")]
    pub exceptions: Option<PathBuf>,

    /// Ignore all exceptions, including embedded ones
    #[arg(long)]
    pub no_exceptions: bool,

    /// Minimum fragment length in characters
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// How interfixes appear in the output
    #[arg(long, value_enum)]
    pub interfix_mode: Option<InterfixModeArg>,

    /// Split words in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (implies --parallel)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Word and fragments, one word per line
    Text,
    /// JSON array of words with their fragments
    Json,
    /// Markdown numbered list
    Markdown,
}

/// Supported built-in languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    /// German
    #[default]
    #[value(alias = "de")]
    German,
}

/// Interfix output modes
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum InterfixModeArg {
    /// Drop interfixes
    Hidden,
    /// Append interfixes to the preceding fragment
    Attached,
    /// Emit interfixes as fragments of their own
    Separate,
}

impl From<InterfixModeArg> for InterfixMode {
    fn from(mode: InterfixModeArg) -> Self {
        match mode {
            InterfixModeArg::Hidden => InterfixMode::Hidden,
            InterfixModeArg::Attached => InterfixMode::Attached,
            InterfixModeArg::Separate => InterfixMode::Separate,
        }
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting word splitting");
        log::debug!("Arguments: {:?}", self);

        let words = self.collect_words()?;
        let splitter = self.build_splitter()?;

        let results = self.split_words(&splitter, &words)?;

        let mut formatter = self.create_formatter()?;
        for (word, fragments) in words.iter().zip(&results) {
            formatter.format_split(word, fragments)?;
        }
        formatter.finish()?;

        let stats = splitter.cache_stats();
        log::info!(
            "Split {} words ({} cache hits, {} cached entries)",
            words.len(),
            stats.hits,
            stats.entries
        );
        Ok(())
    }

    /// Words from the command line followed by words from input files
    fn collect_words(&self) -> Result<Vec<String>> {
        let mut words = self.words.clone();

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            log::info!("Found {} files to read", files.len());

            let mut progress = ProgressReporter::new(self.quiet);
            progress.init(files.len() as u64, "files");
            for path in &files {
                words.extend(FileReader::read_words(path)?);
                progress.file_completed(&path.display().to_string());
            }
            progress.finish();
        }

        if words.is_empty() {
            return Err(CliError::ConfigError(
                "no words to split; pass WORDS or --input".to_string(),
            )
            .into());
        }
        Ok(words)
    }

    fn build_splitter(&self) -> Result<WordSplitter> {
        let source = LanguageSource::from_args(self.language, self.language_config.as_ref());
        log::info!("Language: {}", source.display_name());

        if !source.has_embedded_dictionary()
            && self.dictionary.is_none()
            && self.dictionary_blob.is_none()
        {
            return Err(CliError::DictionaryError(
                "external languages need --dictionary or --dictionary-blob".to_string(),
            )
            .into());
        }

        let mut builder = match source.load_profile()? {
            Some(profile) => WordSplitter::builder().language_config(profile),
            None => WordSplitter::builder().language(self.language.unwrap_or_default().code()),
        };

        if let Some(path) = &self.dictionary {
            builder = builder.dictionary_file(path);
        }
        if let Some(path) = &self.dictionary_blob {
            builder = builder.dictionary_blob(path);
        }
        if let Some(path) = &self.exceptions {
            builder = builder.exceptions_file(path);
        }
        if self.no_exceptions {
            builder = builder.without_exceptions();
        }
        if let Some(length) = self.min_length {
            builder = builder.min_fragment_length(length);
        }
        if let Some(mode) = self.interfix_mode {
            builder = builder.interfix_mode(mode.into());
        }

        builder.build().context("Failed to set up word splitter")
    }

    fn split_words(&self, splitter: &WordSplitter, words: &[String]) -> Result<Vec<Vec<String>>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init(words.len() as u64, "words");

        let results = if self.parallel || self.threads.is_some() {
            let threads = self.threads.unwrap_or_else(num_cpus::get).max(1);
            log::debug!("Splitting in parallel on {} threads", threads);

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to create thread pool")?;
            let results = pool.install(|| splitter.split_many(words));
            progress.advance(words.len() as u64);
            results
        } else {
            words
                .iter()
                .map(|word| {
                    let fragments = splitter.split(word);
                    progress.advance(1);
                    fragments
                })
                .collect()
        };

        progress.finish();
        Ok(results)
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(words: &[&str]) -> SplitArgs {
        SplitArgs {
            words: words.iter().map(|w| w.to_string()).collect(),
            input: Vec::new(),
            output: None,
            format: OutputFormat::Text,
            language: None,
            language_config: None,
            dictionary: None,
            dictionary_blob: None,
            exceptions: None,
            no_exceptions: false,
            min_length: None,
            interfix_mode: None,
            parallel: false,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_split_args_debug() {
        let debug_str = format!("{:?}", args(&["Autobahn"]));
        assert!(debug_str.contains("SplitArgs"));
        assert!(debug_str.contains("Autobahn"));
    }

    #[test]
    fn test_no_words_is_an_error() {
        let err = args(&[]).collect_words().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_words_from_files_follow_arguments() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("words.txt");
        fs::write(&path, "Kinderzimmer\nArbeitszeit Katze\n").unwrap();

        let mut split_args = args(&["Autobahn"]);
        split_args.input = vec![path.display().to_string()];

        assert_eq!(
            split_args.collect_words().unwrap(),
            vec!["Autobahn", "Kinderzimmer", "Arbeitszeit", "Katze"]
        );
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let words: Vec<String> = ["Autobahnraststätte", "Arbeitszeit", "Katze", "Staubecken"]
            .iter()
            .map(|w| w.to_string())
            .collect();

        let sequential = args(&[]);
        let mut parallel = args(&[]);
        parallel.threads = Some(2);

        let splitter = sequential.build_splitter().unwrap();
        assert_eq!(
            sequential.split_words(&splitter, &words).unwrap(),
            parallel.split_words(&splitter, &words).unwrap()
        );
    }

    #[test]
    fn test_builder_options_applied() {
        let mut split_args = args(&[]);
        split_args.no_exceptions = true;
        split_args.min_length = Some(3);
        split_args.interfix_mode = Some(InterfixModeArg::Separate);

        let splitter = split_args.build_splitter().unwrap();
        assert!(splitter.exceptions().is_empty());
        assert_eq!(splitter.config().min_fragment_length(), 3);
        assert_eq!(
            splitter.split("Arbeitszeit"),
            vec!["Arbeit", "s", "zeit"]
        );
    }

    #[test]
    fn test_external_language_without_dictionary() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dutch.toml");
        fs::write(&path, "[metadata]\ncode = \"nl\"\nname = \"Dutch\"\n").unwrap();

        let mut split_args = args(&[]);
        split_args.language_config = Some(path);

        let err = split_args.build_splitter().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::DictionaryError(_))
        ));
    }

    #[test]
    fn test_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.json");

        let mut split_args = args(&["Arbeitszeit"]);
        split_args.output = Some(output.clone());
        split_args.format = OutputFormat::Json;
        split_args.execute().unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("\"Arbeit\""));
        assert!(content.contains("\"compound\": true"));
    }
}
