//! Public API for word splitting
//!
//! This module provides the configuration and builder surface used by the
//! CLI and by library callers. Internal engine details stay in `domain`.

mod config;
mod source;
mod splitter;


pub use config::{defaults, Config, ConfigBuilder};
pub use source::{DictionarySource, ExceptionSource};
pub use splitter::{WordSplitter, WordSplitterBuilder};
