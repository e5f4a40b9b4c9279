//! Dictionary and exception sources

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{Dictionary, ExceptionTable};
use crate::error::{Error, Result};
use crate::language::Language;

/// Where the dictionary of a splitter comes from
pub enum DictionarySource {
    /// Already loaded dictionary
    Dictionary(Arc<Dictionary>),
    /// Plain-text word list stream
    Reader(Box<dyn Read + Send>),
    /// Plain-text word list file
    TextFile(PathBuf),
    /// Precompiled blob file
    BlobFile(PathBuf),
    /// Blob embedded for the configured built-in language
    Embedded,
}

impl std::fmt::Debug for DictionarySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionarySource::Dictionary(dictionary) => f
                .debug_struct("DictionarySource::Dictionary")
                .field("words", &dictionary.len())
                .finish(),
            DictionarySource::Reader(_) => f.debug_struct("DictionarySource::Reader").finish(),
            DictionarySource::TextFile(path) => f
                .debug_struct("DictionarySource::TextFile")
                .field("path", path)
                .finish(),
            DictionarySource::BlobFile(path) => f
                .debug_struct("DictionarySource::BlobFile")
                .field("path", path)
                .finish(),
            DictionarySource::Embedded => f.debug_struct("DictionarySource::Embedded").finish(),
        }
    }
}

impl DictionarySource {
    /// Short description for logs
    pub fn describe(&self) -> String {
        match self {
            DictionarySource::Dictionary(d) => format!("in-memory dictionary ({} words)", d.len()),
            DictionarySource::Reader(_) => "text stream".to_string(),
            DictionarySource::TextFile(path) => format!("text file {}", path.display()),
            DictionarySource::BlobFile(path) => format!("blob file {}", path.display()),
            DictionarySource::Embedded => "embedded dictionary".to_string(),
        }
    }

    /// Load the dictionary; streams are read to completion and dropped
    pub(crate) fn load(self, builtin: Option<Language>, code: &str) -> Result<Arc<Dictionary>> {
        match self {
            DictionarySource::Dictionary(dictionary) => Ok(dictionary),
            DictionarySource::Reader(reader) => Ok(Arc::new(Dictionary::from_reader(reader)?)),
            DictionarySource::TextFile(path) => Ok(Arc::new(Dictionary::from_text_file(&path)?)),
            DictionarySource::BlobFile(path) => Ok(Arc::new(Dictionary::from_blob_file(&path)?)),
            DictionarySource::Embedded => match builtin {
                Some(language) => language.dictionary(),
                None => Err(Error::MissingDictionary(code.to_string())),
            },
        }
    }
}

/// Dictionary sources supplied to a builder
///
/// More than one source is not an error: the highest-priority one wins in
/// the order in-memory, stream, text file, blob file, embedded.
#[derive(Default)]
pub(crate) struct DictionarySources {
    pub(crate) dictionary: Option<Arc<Dictionary>>,
    pub(crate) reader: Option<Box<dyn Read + Send>>,
    pub(crate) text_file: Option<PathBuf>,
    pub(crate) blob_file: Option<PathBuf>,
}

impl DictionarySources {
    fn supplied(&self) -> usize {
        [
            self.dictionary.is_some(),
            self.reader.is_some(),
            self.text_file.is_some(),
            self.blob_file.is_some(),
        ]
        .iter()
        .filter(|supplied| **supplied)
        .count()
    }

    /// Pick the source to load from
    pub(crate) fn resolve(self) -> DictionarySource {
        let supplied = self.supplied();

        let source = if let Some(dictionary) = self.dictionary {
            DictionarySource::Dictionary(dictionary)
        } else if let Some(reader) = self.reader {
            DictionarySource::Reader(reader)
        } else if let Some(path) = self.text_file {
            DictionarySource::TextFile(path)
        } else if let Some(path) = self.blob_file {
            DictionarySource::BlobFile(path)
        } else {
            DictionarySource::Embedded
        };

        if supplied > 1 {
            log::debug!(
                "{} dictionary sources supplied, using {}",
                supplied,
                source.describe()
            );
        }
        source
    }
}

/// Where the exception table of a splitter comes from
pub enum ExceptionSource {
    /// Already built table
    Table(ExceptionTable),
    /// Exception text stream
    Reader(Box<dyn Read + Send>),
    /// Exception text file
    File(PathBuf),
    /// List embedded for the configured built-in language
    Embedded,
    /// No exceptions
    None,
}

impl std::fmt::Debug for ExceptionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExceptionSource::Table(table) => f
                .debug_struct("ExceptionSource::Table")
                .field("entries", &table.len())
                .finish(),
            ExceptionSource::Reader(_) => f.debug_struct("ExceptionSource::Reader").finish(),
            ExceptionSource::File(path) => f
                .debug_struct("ExceptionSource::File")
                .field("path", path)
                .finish(),
            ExceptionSource::Embedded => f.debug_struct("ExceptionSource::Embedded").finish(),
            ExceptionSource::None => f.debug_struct("ExceptionSource::None").finish(),
        }
    }
}

impl ExceptionSource {
    /// Load the table; external languages have no embedded list
    pub(crate) fn load(self, builtin: Option<Language>, delimiter: char) -> Result<ExceptionTable> {
        match self {
            ExceptionSource::Table(table) => Ok(table),
            ExceptionSource::Reader(reader) => ExceptionTable::from_reader(reader, delimiter),
            ExceptionSource::File(path) => ExceptionTable::from_file(&path, delimiter),
            ExceptionSource::Embedded => Ok(builtin
                .map(|language| language.exceptions(delimiter))
                .unwrap_or_default()),
            ExceptionSource::None => Ok(ExceptionTable::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_priority_in_memory_first() {
        let sources = DictionarySources {
            dictionary: Some(Arc::new(Dictionary::from_words(["Haus"]))),
            reader: Some(Box::new(Cursor::new("Tür\n"))),
            text_file: Some(PathBuf::from("/nonexistent/words.txt")),
            blob_file: None,
        };
        let dictionary = sources.resolve().load(None, "xx").unwrap();
        assert!(dictionary.contains("Haus"));
        assert!(!dictionary.contains("Tür"));
    }

    #[test]
    fn test_stream_beats_files() {
        let sources = DictionarySources {
            reader: Some(Box::new(Cursor::new("Tür\n"))),
            text_file: Some(PathBuf::from("/nonexistent/words.txt")),
            blob_file: Some(PathBuf::from("/nonexistent/words.bin")),
            ..Default::default()
        };
        let source = sources.resolve();
        assert!(matches!(source, DictionarySource::Reader(_)));
        assert!(source.load(None, "xx").unwrap().contains("Tür"));
    }

    #[test]
    fn test_text_file_beats_blob_file() {
        let sources = DictionarySources {
            text_file: Some(PathBuf::from("words.txt")),
            blob_file: Some(PathBuf::from("words.bin")),
            ..Default::default()
        };
        assert!(matches!(sources.resolve(), DictionarySource::TextFile(_)));
    }

    #[test]
    fn test_nothing_supplied_means_embedded() {
        let source = DictionarySources::default().resolve();
        assert!(matches!(source, DictionarySource::Embedded));
    }

    #[test]
    fn test_embedded_requires_builtin_language() {
        let result = DictionarySource::Embedded.load(None, "nl");
        assert!(matches!(result, Err(Error::MissingDictionary(code)) if code == "nl"));

        let dictionary = DictionarySource::Embedded
            .load(Some(Language::German), "de")
            .unwrap();
        assert!(!dictionary.is_empty());
    }

    #[test]
    fn test_embedded_exceptions_for_external_language_are_empty() {
        let table = ExceptionSource::Embedded.load(None, '|').unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            DictionarySource::BlobFile(PathBuf::from("de.bin")).describe(),
            "blob file de.bin"
        );
    }
}
