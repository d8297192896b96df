//! Mocklint - i18n checker for API mock responses
//!
//! Mocklint is a CLI tool and library that cross-checks mock API responses
//! against a translation bundle. It reports mocks whose message is hard-coded
//! instead of referencing an i18n key, and i18n keys that the bundle does not
//! define.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Analysis context, data model, file discovery and parsers
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Detection rules

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
