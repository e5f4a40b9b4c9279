//! Error types for dictionary loading and configuration
//!
//! Splitting itself never fails; every error here is raised while a
//! splitter is being constructed.

use thiserror::Error;

/// Error type for wordsplit operations
#[derive(Debug, Error)]
pub enum Error {
    /// A dictionary or exception source could not be read
    #[error("I/O error reading {source_name}: {source}")]
    Io {
        /// Human readable name of the source (path, "stream", ...)
        source_name: String,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A precompiled dictionary blob failed validation or decoding
    #[error("corrupt dictionary blob: {0}")]
    CorruptBlob(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unknown language code
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    /// The language has no embedded dictionary and none was supplied
    #[error("no dictionary available for language '{0}'")]
    MissingDictionary(String),

    /// A language profile could not be parsed
    #[error("invalid language config: {0}")]
    LanguageConfig(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn io(source_name: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            source_name: source_name.into(),
            source,
        }
    }
}

/// Result type for wordsplit operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_names_source() {
        let err = Error::io(
            "/tmp/words.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/words.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_missing_dictionary_display() {
        let err = Error::MissingDictionary("nl".to_string());
        assert_eq!(err.to_string(), "no dictionary available for language 'nl'");
    }
}
