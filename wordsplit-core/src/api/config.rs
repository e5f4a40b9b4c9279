//! Configuration API for word splitting

use std::str::FromStr;

use crate::domain::{InterfixMode, InterfixPolicy};
use crate::error::{Error, Result};
use crate::language::{Language, LanguageConfig};

/// Default configuration constants
pub mod defaults {
    /// Language used when none is given
    pub const LANGUAGE: &str = "de";

    /// Whether split results are cached
    pub const CACHE_RESULTS: bool = true;
}

/// Splitting configuration, fixed once a splitter is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) profile: LanguageConfig,
    pub(crate) builtin: Option<Language>,
    pub(crate) cache_results: bool,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Code of the configured language
    pub fn language_code(&self) -> &str {
        &self.profile.metadata.code
    }

    /// Built-in language, if the profile is not external
    pub fn builtin_language(&self) -> Option<Language> {
        self.builtin
    }

    /// Effective language profile, overrides applied
    pub fn profile(&self) -> &LanguageConfig {
        &self.profile
    }

    /// Minimum fragment length in characters
    pub fn min_fragment_length(&self) -> usize {
        self.profile.splitting.min_fragment_length
    }

    /// Interfix output mode
    pub fn interfix_mode(&self) -> InterfixMode {
        self.profile.splitting.interfix_mode
    }

    /// Interfix policy built from the profile
    pub fn interfix_policy(&self) -> InterfixPolicy {
        self.profile.interfix_policy()
    }

    /// Whether lookups retry with the first letter's case swapped
    pub fn fold_initial_case(&self) -> bool {
        self.profile.splitting.fold_initial_case
    }

    /// Field delimiter of exception files
    pub fn exception_delimiter(&self) -> char {
        self.profile.delimiter()
    }

    /// Whether split results are cached
    pub fn cache_results(&self) -> bool {
        self.cache_results
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    language: Option<String>,
    language_config: Option<LanguageConfig>,
    min_fragment_length: Option<usize>,
    interfixes: Option<Vec<String>>,
    interfix_mode: Option<InterfixMode>,
    fold_initial_case: Option<bool>,
    cache_results: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a built-in language by code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Use an external language profile; takes precedence over `language`
    pub fn language_config(mut self, config: LanguageConfig) -> Self {
        self.language_config = Some(config);
        self
    }

    /// Set the minimum fragment length in characters
    pub fn min_fragment_length(mut self, length: usize) -> Self {
        self.min_fragment_length = Some(length);
        self
    }

    /// Replace the profile's interfixes
    pub fn interfixes<I, S>(mut self, interfixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interfixes = Some(interfixes.into_iter().map(Into::into).collect());
        self
    }

    /// Set how interfixes appear in output
    pub fn interfix_mode(mut self, mode: InterfixMode) -> Self {
        self.interfix_mode = Some(mode);
        self
    }

    /// Enable or disable initial-letter case folding
    pub fn fold_initial_case(mut self, enabled: bool) -> Self {
        self.fold_initial_case = Some(enabled);
        self
    }

    /// Enable or disable the result cache
    pub fn cache_results(mut self, enabled: bool) -> Self {
        self.cache_results = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let (mut profile, builtin) = match self.language_config {
            Some(profile) => (profile, None),
            None => {
                let code = self.language.as_deref().unwrap_or(defaults::LANGUAGE);
                let language = Language::from_str(code)?;
                (language.config()?, Some(language))
            }
        };

        if let Some(length) = self.min_fragment_length {
            profile.splitting.min_fragment_length = length;
        }
        if let Some(interfixes) = self.interfixes {
            profile.splitting.interfixes = interfixes;
        }
        if let Some(mode) = self.interfix_mode {
            profile.splitting.interfix_mode = mode;
        }
        if let Some(enabled) = self.fold_initial_case {
            profile.splitting.fold_initial_case = enabled;
        }

        profile.validate().map_err(|e| match e {
            Error::Configuration(msg) => {
                Error::Configuration(format!("{} ({})", msg, profile.metadata.code))
            }
            other => other,
        })?;

        Ok(Config {
            profile,
            builtin,
            cache_results: self.cache_results.unwrap_or(defaults::CACHE_RESULTS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_german() {
        let config = Config::builder().build().unwrap();
        assert_eq!(config.language_code(), "de");
        assert_eq!(config.builtin_language(), Some(Language::German));
        assert_eq!(config.min_fragment_length(), 4);
        assert_eq!(config.interfix_mode(), InterfixMode::Hidden);
        assert!(config.fold_initial_case());
        assert!(config.cache_results());
    }

    #[test]
    fn test_overrides_apply() {
        let config = Config::builder()
            .language("german")
            .min_fragment_length(3)
            .interfixes(["es", "s"])
            .interfix_mode(InterfixMode::Separate)
            .fold_initial_case(false)
            .cache_results(false)
            .build()
            .unwrap();

        assert_eq!(config.min_fragment_length(), 3);
        assert_eq!(config.interfix_policy().candidates(), &["es", "s"]);
        assert_eq!(config.interfix_mode(), InterfixMode::Separate);
        assert!(!config.fold_initial_case());
        assert!(!config.cache_results());
    }

    #[test]
    fn test_zero_min_length_rejected() {
        let result = Config::builder().min_fragment_length(0).build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let result = Config::builder().language("klingon").build();
        assert!(matches!(result, Err(Error::InvalidLanguage(_))));
    }

    #[test]
    fn test_external_profile_has_no_builtin() {
        let profile = LanguageConfig::from_toml_str(
            "[metadata]\ncode = \"nl\"\nname = \"Dutch\"\n[splitting]\ninterfixes = [\"s\"]\n",
        )
        .unwrap();
        let config = Config::builder()
            .language("de")
            .language_config(profile)
            .build()
            .unwrap();

        assert_eq!(config.language_code(), "nl");
        assert_eq!(config.builtin_language(), None);
    }
}
