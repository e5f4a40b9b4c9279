//! Built-in language profiles
//!
//! Each built-in language embeds its TOML profile, a precompiled dictionary
//! blob and an exception list. The dictionary is decoded once per process
//! and shared between splitters.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use crate::domain::{Dictionary, ExceptionTable};
use crate::error::{Error, Result};
use crate::language::config::LanguageConfig;

/// Embedded resources of one language
struct Embedded {
    config: &'static str,
    dictionary: &'static [u8],
    exceptions: &'static str,
    decoded: OnceLock<Arc<Dictionary>>,
}

static GERMAN: Embedded = Embedded {
    config: include_str!("../../configs/languages/german.toml"),
    dictionary: include_bytes!("../../data/german/words.bin"),
    exceptions: include_str!("../../data/german/exceptions.txt"),
    decoded: OnceLock::new(),
};

/// Built-in languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// German, with embedded dictionary and exceptions
    #[default]
    German,
}

impl Language {
    /// All built-in languages
    pub fn all() -> &'static [Language] {
        &[Language::German]
    }

    /// Get the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::German => "de",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::German => "German",
        }
    }

    fn embedded(&self) -> &'static Embedded {
        match self {
            Language::German => &GERMAN,
        }
    }

    /// Parsed profile of this language
    pub fn config(&self) -> Result<LanguageConfig> {
        LanguageConfig::from_toml_str(self.embedded().config)
    }

    /// Embedded dictionary, decoded on first use
    pub fn dictionary(&self) -> Result<Arc<Dictionary>> {
        let embedded = self.embedded();
        if let Some(dictionary) = embedded.decoded.get() {
            return Ok(Arc::clone(dictionary));
        }

        let dictionary = Arc::new(Dictionary::from_blob_bytes(embedded.dictionary)?);
        log::debug!(
            "Decoded embedded {} dictionary ({} words)",
            self.name(),
            dictionary.len()
        );

        // A concurrent caller may have won the race; either copy is identical
        Ok(Arc::clone(embedded.decoded.get_or_init(|| dictionary)))
    }

    /// Embedded exception list
    pub fn exceptions(&self, delimiter: char) -> ExceptionTable {
        ExceptionTable::parse(self.embedded().exceptions, delimiter)
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        match code.to_lowercase().as_str() {
            "de" | "deu" | "ger" | "german" | "deutsch" => Ok(Language::German),
            _ => Err(Error::InvalidLanguage(code.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InterfixMode;

    #[test]
    fn test_codes_and_aliases() {
        assert_eq!("de".parse::<Language>().unwrap(), Language::German);
        assert_eq!("German".parse::<Language>().unwrap(), Language::German);
        assert_eq!("deu".parse::<Language>().unwrap(), Language::German);
        assert!(matches!(
            "xx".parse::<Language>(),
            Err(Error::InvalidLanguage(code)) if code == "xx"
        ));
    }

    #[test]
    fn test_german_profile() {
        let config = Language::German.config().unwrap();
        assert_eq!(config.metadata.code, "de");
        assert_eq!(config.splitting.min_fragment_length, 4);
        assert_eq!(config.splitting.interfix_mode, InterfixMode::Hidden);
        assert!(config.splitting.fold_initial_case);
        assert_eq!(config.interfix_policy().candidates(), &["s-", "s", "-"]);
    }

    #[test]
    fn test_german_dictionary_is_shared() {
        let first = Language::German.dictionary().unwrap();
        let second = Language::German.dictionary().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(first.contains("Arbeit"));
        assert!(first.contains("Zeit"));
        assert!(first.contains("Stätte"));
    }

    #[test]
    fn test_german_exceptions() {
        let table = Language::German.exceptions('|');
        assert!(table.lookup("Staubecken").is_some());
        assert!(!table.is_empty());
    }
}
