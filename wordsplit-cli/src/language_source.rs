//! Language source management for CLI

use crate::commands::split::Language;
use anyhow::{Context, Result};
use std::path::PathBuf;
use wordsplit_core::LanguageConfig;

/// Source of the language profile
#[derive(Debug, Clone)]
pub enum LanguageSource {
    /// Built-in language with embedded dictionary and exceptions
    BuiltIn(Language),
    /// External TOML profile
    External {
        /// Path to the configuration file
        path: PathBuf,
    },
}

impl LanguageSource {
    /// Pick the source from command-line arguments
    pub fn from_args(language: Option<Language>, language_config: Option<&PathBuf>) -> Self {
        match language_config {
            Some(path) => LanguageSource::External { path: path.clone() },
            None => LanguageSource::BuiltIn(language.unwrap_or_default()),
        }
    }

    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(lang) => format!("Built-in: {}", lang.as_str()),
            LanguageSource::External { path } => format!("External: {}", path.display()),
        }
    }

    /// Whether the source ships its own dictionary
    pub fn has_embedded_dictionary(&self) -> bool {
        matches!(self, LanguageSource::BuiltIn(_))
    }

    /// Load the external profile, if any
    pub fn load_profile(&self) -> Result<Option<LanguageConfig>> {
        match self {
            LanguageSource::BuiltIn(_) => Ok(None),
            LanguageSource::External { path } => {
                let profile = LanguageConfig::from_file(path).with_context(|| {
                    format!("Failed to load language configuration: {}", path.display())
                })?;
                Ok(Some(profile))
            }
        }
    }
}

impl Language {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        self.to_core().name()
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        self.to_core().code()
    }

    fn to_core(self) -> wordsplit_core::Language {
        match self {
            Language::German => wordsplit_core::Language::German,
        }
    }
}
