//! Connecting characters between compound fragments

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How interfixes appear in split output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfixMode {
    /// Interfixes are dropped: "Arbeitszeit" -> ["Arbeit", "Zeit"]
    #[default]
    Hidden,
    /// Interfixes stay on the preceding fragment: ["Arbeits", "zeit"]
    Attached,
    /// Interfixes are their own elements: ["Arbeit", "s", "zeit"]
    Separate,
}

impl InterfixMode {
    /// Name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            InterfixMode::Hidden => "hidden",
            InterfixMode::Attached => "attached",
            InterfixMode::Separate => "separate",
        }
    }
}

impl fmt::Display for InterfixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterfixMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hidden" | "strip" => Ok(InterfixMode::Hidden),
            "attached" | "attach" => Ok(InterfixMode::Attached),
            "separate" => Ok(InterfixMode::Separate),
            other => Err(crate::Error::Configuration(format!(
                "unknown interfix mode '{other}'"
            ))),
        }
    }
}

/// Ordered interfix candidates plus their output mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfixPolicy {
    candidates: Vec<String>,
    mode: InterfixMode,
}

impl InterfixPolicy {
    /// Create a policy; candidates are reordered longest first
    ///
    /// Equal-length candidates keep the caller's order. Empty strings and
    /// duplicates are dropped.
    pub fn new<I, S>(candidates: I, mode: InterfixMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered: Vec<String> = Vec::new();
        for candidate in candidates.into_iter().map(Into::into) {
            if !candidate.is_empty() && !ordered.contains(&candidate) {
                ordered.push(candidate);
            }
        }
        ordered.sort_by_key(|c| std::cmp::Reverse(c.chars().count()));

        Self {
            candidates: ordered,
            mode,
        }
    }

    /// Policy without any interfixes
    pub fn none() -> Self {
        Self::new(Vec::<String>::new(), InterfixMode::Hidden)
    }

    /// Interfixes in matching order
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Whether interfixes appear in split output
    pub fn visible(&self) -> bool {
        self.mode != InterfixMode::Hidden
    }

    /// Output mode
    pub fn mode(&self) -> InterfixMode {
        self.mode
    }

    /// Interfixes that `text` starts with, longest first
    pub(crate) fn prefixes_of<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.candidates
            .iter()
            .map(String::as_str)
            .filter(move |candidate| text.starts_with(candidate))
    }
}

impl Default for InterfixPolicy {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_candidates_first() {
        let policy = InterfixPolicy::new(["s", "-", "s-"], InterfixMode::Hidden);
        assert_eq!(policy.candidates(), &["s-", "s", "-"]);
    }

    #[test]
    fn test_empty_and_duplicate_candidates_dropped() {
        let policy = InterfixPolicy::new(["s", "", "es", "s"], InterfixMode::Separate);
        assert_eq!(policy.candidates(), &["es", "s"]);
    }

    #[test]
    fn test_visibility() {
        assert!(!InterfixPolicy::new(["s"], InterfixMode::Hidden).visible());
        assert!(InterfixPolicy::new(["s"], InterfixMode::Attached).visible());
        assert!(InterfixPolicy::new(["s"], InterfixMode::Separate).visible());
    }

    #[test]
    fn test_prefixes_of() {
        let policy = InterfixPolicy::new(["s", "-", "s-"], InterfixMode::Hidden);
        let found: Vec<&str> = policy.prefixes_of("s-bahn").collect();
        assert_eq!(found, vec!["s-", "s"]);
        assert_eq!(policy.prefixes_of("bahn").count(), 0);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("Separate".parse::<InterfixMode>().unwrap(), InterfixMode::Separate);
        assert_eq!("strip".parse::<InterfixMode>().unwrap(), InterfixMode::Hidden);
        assert!("visible".parse::<InterfixMode>().is_err());
    }
}
