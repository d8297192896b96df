use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::core::MockDocument;

/// Read a mock response file as UTF-8 and parse it as JSON.
pub fn parse_mock_file(path: &Path) -> Result<MockDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read mock file: {:?}", path))?;
    parse_mock_source(&content)
}

pub fn parse_mock_source(content: &str) -> Result<MockDocument> {
    let json: Value = serde_json::from_str(content)?;
    Ok(MockDocument::new(json))
}

/// Parse a JSON translation bundle into flat key → string entries.
///
/// Nested objects are flattened with `.` separators, so both flat bundles
/// (`{"oie.tooManyRequests": "..."}`) and nested ones
/// (`{"oie": {"tooManyRequests": "..."}}`) produce the same key.
pub fn parse_json_bundle(content: &str) -> Result<HashMap<String, String>> {
    let json: Value = serde_json::from_str(content).context("Invalid JSON bundle")?;
    if !json.is_object() {
        bail!("JSON bundle must be an object at the top level");
    }

    let mut entries = HashMap::new();
    flatten_json(&json, String::new(), &mut entries);
    Ok(entries)
}

fn flatten_json(value: &Value, prefix: String, result: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(val, new_prefix, result);
            }
        }
        Value::String(s) => {
            result.insert(prefix, s.clone());
        }
        // Non-string leaves still define the key
        other => {
            result.insert(prefix, other.to_string());
        }
    }
}
