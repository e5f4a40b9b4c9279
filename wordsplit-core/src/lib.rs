//! Compound word decomposition
//!
//! This crate splits compound words such as German "Autobahnraststätte" into
//! their dictionary words (`["Auto", "Bahn", "Rast", "Stätte"]`). Splitting
//! is driven by an immutable dictionary, an ordered list of interfixes
//! ("Fugenelemente" like the `s` in "Arbeitszeit"), a minimum fragment
//! length and a table of curated exceptions.
//!
//! # Architecture
//!
//! - **Domain layer**: dictionary, exception table, interfix policy, the
//!   decomposition engine and the result cache
//! - **Language layer**: TOML language profiles and embedded resources
//! - **API layer**: configuration builder and the `WordSplitter` entry point
//!
//! # Example
//!
//! ```rust
//! use wordsplit_core::{Dictionary, WordSplitter};
//!
//! let splitter = WordSplitter::builder()
//!     .dictionary(Dictionary::from_words(["Auto", "bahn", "Arbeit", "Zeit"]))
//!     .without_exceptions()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(splitter.split("Autobahn"), vec!["Auto", "bahn"]);
//! assert_eq!(splitter.split("Arbeitszeit"), vec!["Arbeit", "Zeit"]);
//! assert_eq!(splitter.split("Katze"), vec!["Katze"]);
//! ```

pub mod api;
pub mod domain;
pub mod error;
pub mod language;

pub use api::{Config, ConfigBuilder, WordSplitter, WordSplitterBuilder};
pub use domain::{
    CacheStats, Decomposition, DecompositionEngine, Dictionary, DictionaryBlob, ExceptionTable,
    InterfixMode, InterfixPolicy, Part, ResultCache,
};
pub use error::{Error, Result};
pub use language::{Language, LanguageConfig};
