//! Rule implementations for mocklint.
//!
//! Rules are pure functions: they take only the inputs they need and return
//! findings, without touching the filesystem.
//!
//! ## Module Structure
//!
//! - `mock_bundle`: mock response ↔ translation bundle consistency

pub mod mock_bundle;

pub use mock_bundle::{Finding, IgnoreList, check_mock_document};
