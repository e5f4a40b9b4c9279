//! Main word splitter implementation

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use crate::api::source::{DictionarySource, DictionarySources, ExceptionSource};
use crate::api::{Config, ConfigBuilder};
use crate::domain::{
    CacheStats, Decomposition, DecompositionEngine, Dictionary, ExceptionTable, InterfixMode,
    ResultCache,
};
use crate::error::Result;
use crate::language::LanguageConfig;

/// Compound word splitter
///
/// Holds an immutable dictionary, an exception table and a result cache.
/// All methods take `&self`; a splitter can be shared between threads.
#[derive(Debug)]
pub struct WordSplitter {
    engine: DecompositionEngine,
    exceptions: ExceptionTable,
    cache: Option<ResultCache>,
    config: Config,
}

impl WordSplitter {
    /// Create a German splitter with the embedded dictionary
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a splitter for a built-in language
    pub fn with_language(code: impl Into<String>) -> Result<Self> {
        Self::builder().language(code).build()
    }

    /// Create a splitter from a configuration, using embedded resources
    pub fn with_config(config: Config) -> Result<Self> {
        WordSplitterBuilder::new().config(config).build()
    }

    /// Create a builder
    pub fn builder() -> WordSplitterBuilder {
        WordSplitterBuilder::new()
    }

    /// Split `word` into fragments
    ///
    /// Exceptions are consulted first, then the cache, then the engine. The
    /// empty string yields an empty list; an unsplittable word yields itself.
    pub fn split(&self, word: &str) -> Vec<String> {
        if word.is_empty() {
            return Vec::new();
        }

        if let Some(fragments) = self.exceptions.lookup(word) {
            return fragments.to_vec();
        }

        match &self.cache {
            Some(cache) => cache.get_or_compute(word, || self.engine.split(word)),
            None => self.engine.split(word),
        }
    }

    /// Structured decomposition from the engine, bypassing exceptions
    pub fn decompose(&self, word: &str) -> Option<Decomposition> {
        self.engine.decompose(word)
    }

    /// Split many words, in parallel when the `parallel` feature is enabled
    pub fn split_many<S>(&self, words: &[S]) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            words.par_iter().map(|w| self.split(w.as_ref())).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            words.iter().map(|w| self.split(w.as_ref())).collect()
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Interfix output mode
    pub fn interfix_mode(&self) -> InterfixMode {
        self.config.interfix_mode()
    }

    /// The dictionary in use
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        self.engine.dictionary()
    }

    /// The exception table in use
    pub fn exceptions(&self) -> &ExceptionTable {
        &self.exceptions
    }

    /// Cache counters; all zero when caching is disabled
    pub fn cache_stats(&self) -> CacheStats {
        self.cache
            .as_ref()
            .map(ResultCache::stats)
            .unwrap_or_default()
    }

    /// Drop cached results
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}

/// Builder for WordSplitter
///
/// Provides a fluent interface for configuring the splitter and choosing
/// its dictionary and exception sources.
pub struct WordSplitterBuilder {
    config: Option<Config>,
    config_builder: ConfigBuilder,
    dictionaries: DictionarySources,
    exceptions: Option<ExceptionSource>,
}

impl Default for WordSplitterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSplitterBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: None,
            config_builder: ConfigBuilder::new(),
            dictionaries: DictionarySources::default(),
            exceptions: None,
        }
    }

    /// Use a prebuilt configuration; other configuration setters are ignored
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Select a built-in language by code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.language(code);
        self
    }

    /// Use an external language profile
    pub fn language_config(mut self, config: LanguageConfig) -> Self {
        self.config_builder = self.config_builder.language_config(config);
        self
    }

    /// Set the minimum fragment length in characters
    pub fn min_fragment_length(mut self, length: usize) -> Self {
        self.config_builder = self.config_builder.min_fragment_length(length);
        self
    }

    /// Replace the interfixes
    pub fn interfixes<I, S>(mut self, interfixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config_builder = self.config_builder.interfixes(interfixes);
        self
    }

    /// Set how interfixes appear in output
    pub fn interfix_mode(mut self, mode: InterfixMode) -> Self {
        self.config_builder = self.config_builder.interfix_mode(mode);
        self
    }

    /// Enable or disable initial-letter case folding
    pub fn fold_initial_case(mut self, enabled: bool) -> Self {
        self.config_builder = self.config_builder.fold_initial_case(enabled);
        self
    }

    /// Enable or disable the result cache
    pub fn cache_results(mut self, enabled: bool) -> Self {
        self.config_builder = self.config_builder.cache_results(enabled);
        self
    }

    /// Use an in-memory dictionary
    pub fn dictionary(mut self, dictionary: impl Into<Arc<Dictionary>>) -> Self {
        self.dictionaries.dictionary = Some(dictionary.into());
        self
    }

    /// Read a plain-text word list from a stream
    pub fn dictionary_reader(mut self, reader: impl Read + Send + 'static) -> Self {
        self.dictionaries.reader = Some(Box::new(reader));
        self
    }

    /// Read a plain-text word list from a file
    pub fn dictionary_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionaries.text_file = Some(path.into());
        self
    }

    /// Load a precompiled dictionary blob
    pub fn dictionary_blob(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionaries.blob_file = Some(path.into());
        self
    }

    /// Use a prebuilt exception table
    pub fn exceptions(mut self, table: ExceptionTable) -> Self {
        self.exceptions = Some(ExceptionSource::Table(table));
        self
    }

    /// Read exceptions from a stream
    pub fn exceptions_reader(mut self, reader: impl Read + Send + 'static) -> Self {
        self.exceptions = Some(ExceptionSource::Reader(Box::new(reader)));
        self
    }

    /// Read exceptions from a file
    pub fn exceptions_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.exceptions = Some(ExceptionSource::File(path.into()));
        self
    }

    /// Disable exceptions, including embedded ones
    pub fn without_exceptions(mut self) -> Self {
        self.exceptions = Some(ExceptionSource::None);
        self
    }

    /// Load all resources and build the splitter
    ///
    /// Any unreadable source or corrupt blob fails here, never later.
    pub fn build(self) -> Result<WordSplitter> {
        let config = match self.config {
            Some(config) => config,
            None => self.config_builder.build()?,
        };

        let source: DictionarySource = self.dictionaries.resolve();
        log::debug!(
            "Building {} splitter from {}",
            config.language_code(),
            source.describe()
        );
        let dictionary = source.load(config.builtin, config.language_code())?;

        let exceptions = self
            .exceptions
            .unwrap_or(ExceptionSource::Embedded)
            .load(config.builtin, config.exception_delimiter())?;

        let engine = DecompositionEngine::new(
            dictionary,
            config.interfix_policy(),
            config.min_fragment_length(),
        )
        .with_initial_case_folding(config.fold_initial_case());

        let cache = config.cache_results.then(ResultCache::new);

        log::debug!(
            "Word splitter ready: {} words, {} exceptions, min length {}",
            engine.dictionary().len(),
            exceptions.len(),
            config.min_fragment_length()
        );

        Ok(WordSplitter {
            engine,
            exceptions,
            cache,
            config,
        })
    }
}
