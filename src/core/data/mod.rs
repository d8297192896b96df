//! Core data types shared by the checker and its host.
//!
//! ## Module Structure
//!
//! - `bundle`: TranslationBundle (key → localized string)
//! - `document`: MockDocument and the guarded MessageEntry view

pub mod bundle;
pub mod document;

pub use bundle::TranslationBundle;
pub use document::{MessageEntry, MockDocument};
