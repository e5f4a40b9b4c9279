//! Language profile schema
//!
//! Profiles are TOML documents:
//!
//! ```toml
//! [metadata]
//! code = "de"
//! name = "German"
//!
//! [splitting]
//! min_fragment_length = 4
//! interfixes = ["s-", "s", "-"]
//! interfix_mode = "hidden"
//! fold_initial_case = true
//!
//! [exceptions]
//! delimiter = "|"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::exceptions::DEFAULT_DELIMITER;
use crate::domain::interfix::{InterfixMode, InterfixPolicy};
use crate::error::{Error, Result};

/// Root language configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub splitting: Splitting,
    #[serde(default)]
    pub exceptions: Exceptions,
}

/// Language metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Decomposition settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Splitting {
    #[serde(default = "default_min_fragment_length")]
    pub min_fragment_length: usize,
    /// Connecting strings allowed between fragments
    #[serde(default)]
    pub interfixes: Vec<String>,
    #[serde(default)]
    pub interfix_mode: InterfixMode,
    /// Retry lookups with the first letter's case swapped
    #[serde(default)]
    pub fold_initial_case: bool,
}

impl Default for Splitting {
    fn default() -> Self {
        Self {
            min_fragment_length: default_min_fragment_length(),
            interfixes: Vec::new(),
            interfix_mode: InterfixMode::default(),
            fold_initial_case: false,
        }
    }
}

/// Exception file format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exceptions {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for Exceptions {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

fn default_min_fragment_length() -> usize {
    4
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

impl LanguageConfig {
    /// Parse and validate a TOML profile
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML profile file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).map_err(|e| Error::io(path.display().to_string(), e))?;
        Self::from_toml_str(&text).map_err(|e| match e {
            Error::LanguageConfig(inner) => Error::Configuration(format!(
                "failed to parse {}: {}",
                path.display(),
                inner
            )),
            other => other,
        })
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(Error::Configuration(
                "language code must not be empty".into(),
            ));
        }

        if self.splitting.min_fragment_length == 0 {
            return Err(Error::Configuration(
                "min_fragment_length must be greater than 0".into(),
            ));
        }

        if self.exceptions.delimiter.chars().count() != 1 {
            return Err(Error::Configuration(format!(
                "exception delimiter must be a single character, got {:?}",
                self.exceptions.delimiter
            )));
        }

        Ok(())
    }

    /// Exception field delimiter
    pub fn delimiter(&self) -> char {
        self.exceptions
            .delimiter
            .chars()
            .next()
            .unwrap_or(DEFAULT_DELIMITER)
    }

    /// Interfix policy described by this profile
    pub fn interfix_policy(&self) -> InterfixPolicy {
        InterfixPolicy::new(
            self.splitting.interfixes.iter().cloned(),
            self.splitting.interfix_mode,
        )
    }
}
