//! Precompiled dictionary format
//!
//! A blob is a bincode-encoded word list with a small header. It is produced
//! by `wordsplit convert` from a plain-text list and loaded without any text
//! processing.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Leading bytes of every dictionary blob
pub const BLOB_MAGIC: [u8; 4] = *b"WSDB";

/// Current blob format version
pub const BLOB_VERSION: u32 = 1;

/// On-disk representation of a dictionary
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryBlob {
    magic: [u8; 4],
    version: u32,
    words: Vec<String>,
}

impl DictionaryBlob {
    /// Build a blob from a set of words; words are sorted for stable output
    pub fn from_words(words: &HashSet<String>) -> Self {
        let mut words: Vec<String> = words.iter().cloned().collect();
        words.sort_unstable();
        Self {
            magic: BLOB_MAGIC,
            version: BLOB_VERSION,
            words,
        }
    }

    /// Decode and validate a blob
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let blob: Self =
            bincode::deserialize(bytes).map_err(|e| Error::CorruptBlob(e.to_string()))?;

        if blob.magic != BLOB_MAGIC {
            return Err(Error::CorruptBlob("bad magic bytes".to_string()));
        }
        if blob.version != BLOB_VERSION {
            return Err(Error::CorruptBlob(format!(
                "unsupported format version {} (expected {})",
                blob.version, BLOB_VERSION
            )));
        }

        Ok(blob)
    }

    /// Encode the blob
    pub fn encode(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| Error::CorruptBlob(e.to_string()))
    }

    /// Read and decode a blob file
    pub fn read_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| Error::io(path.display().to_string(), e))?;
        Self::decode(&bytes)
    }

    /// Encode and write the blob, creating parent directories as needed
    pub fn write_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| Error::io(parent.display().to_string(), e))?;
            }
        }

        let bytes = self.encode()?;
        fs::write(path, bytes).map_err(|e| Error::io(path.display().to_string(), e))
    }

    /// Number of words in the blob
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the blob holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Consume the blob, yielding its words
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}
