//! Domain layer for compound decomposition
//!
//! Dictionary storage, exception overrides, interfix policy, the
//! decomposition engine and the result cache. Nothing here knows about
//! languages or configuration files.

pub mod blob;
pub mod cache;
pub mod dictionary;
pub mod engine;
pub mod exceptions;
pub mod interfix;

pub use blob::DictionaryBlob;
pub use cache::{CacheStats, ResultCache};
pub use dictionary::Dictionary;
pub use engine::{Decomposition, DecompositionEngine, Part};
pub use exceptions::ExceptionTable;
pub use interfix::{InterfixMode, InterfixPolicy};
