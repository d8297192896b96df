//! Core analysis engine.
//!
//! `CheckContext` loads configuration, the translation bundle and the mock
//! files; rules then run over the parsed documents.
//!
//! ## Module Structure
//!
//! - `context`: CheckContext (config merge, discovery, parallel parsing)
//! - `data`: MockDocument and TranslationBundle
//! - `file_scanner`: mock file discovery
//! - `parsers`: JSON and `.properties` parsers

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod parsers;

pub use context::CheckContext;
pub use data::{MessageEntry, MockDocument, TranslationBundle};
