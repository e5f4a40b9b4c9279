//! Immutable dictionary of base words

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::domain::blob::DictionaryBlob;
use crate::error::{Error, Result};

/// Set of known base words, queried by exact, case-sensitive membership
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
    /// Length of the longest word in chars
    longest: usize,
}

impl Dictionary {
    /// Build a dictionary from in-memory words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_set(
            words
                .into_iter()
                .map(Into::into)
                .filter(|w: &String| !w.is_empty())
                .collect(),
        )
    }

    fn from_set(words: HashSet<String>) -> Self {
        let longest = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
        Self { words, longest }
    }

    /// Load a plain-text word list, one word per line
    ///
    /// Trailing whitespace is trimmed and empty lines are skipped. The reader
    /// is consumed to completion.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::read_lines(reader, "stream")
    }

    /// Load a plain-text word list from a UTF-8 file
    pub fn from_text_file(path: &Path) -> Result<Self> {
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| Error::io(name.clone(), e))?;
        Self::read_lines(file, &name)
    }

    /// Decode a precompiled blob
    pub fn from_blob_bytes(bytes: &[u8]) -> Result<Self> {
        let blob = DictionaryBlob::decode(bytes)?;
        Ok(Self::from_words(blob.into_words()))
    }

    /// Load a precompiled blob file
    pub fn from_blob_file(path: &Path) -> Result<Self> {
        let blob = DictionaryBlob::read_file(path)?;
        Ok(Self::from_words(blob.into_words()))
    }

    fn read_lines<R: Read>(reader: R, source_name: &str) -> Result<Self> {
        let mut words = HashSet::new();

        for line in BufReader::new(reader).lines() {
            let line = line.map_err(|e| Error::io(source_name, e))?;
            let word = line.trim_end();
            if !word.is_empty() {
                words.insert(word.to_string());
            }
        }

        log::debug!("Loaded {} dictionary words from {}", words.len(), source_name);
        Ok(Self::from_set(words))
    }

    /// Convert into the precompiled blob representation
    pub fn to_blob(&self) -> DictionaryBlob {
        DictionaryBlob::from_words(&self.words)
    }

    /// Exact membership test
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Stored spelling of `word`, if present
    pub fn get(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Length of the longest word, counted in chars
    pub fn longest_word_chars(&self) -> usize {
        self.longest
    }

    /// Whether the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
