//! Language profiles
//!
//! A language is configuration, not code: a TOML profile plus optional
//! embedded dictionary and exception resources.

pub mod config;
mod loader;

pub use config::{Exceptions, LanguageConfig, Metadata, Splitting};
pub use loader::Language;
