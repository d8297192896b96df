//! File parsers for mock responses and translation bundles.
//!
//! - `json`: mock response files and JSON bundles
//! - `properties`: Java `.properties` bundles

pub mod json;
pub mod properties;

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use crate::core::TranslationBundle;

/// Load a translation bundle, choosing the parser by file extension.
pub fn load_bundle(path: &Path, name: &str) -> Result<TranslationBundle> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read translation bundle: {:?}", path))?;

    let entries = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => json::parse_json_bundle(&content),
        Some("properties") => properties::parse_properties(&content),
        _ => bail!(
            "Unsupported translation bundle format: {:?} (expected .json or .properties)",
            path
        ),
    }
    .with_context(|| format!("Failed to parse translation bundle: {:?}", path))?;

    Ok(TranslationBundle::new(name, entries).with_file_path(path.to_string_lossy()))
}
