use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tempfile::TempDir;


/// Test fixture for MCP integration tests
///
/// Manages a temporary project with a `mocks/` directory and a JSON bundle at
/// `i18n/login.json`.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join(".git"))?;
        fs::create_dir_all(project_root.join("mocks"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with the given bundle contents
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_bundle(json!({"welcome": "Welcome!"}))?;
    /// ```
    pub fn with_bundle(bundle: Value) -> Result<Self> {
        let fixture = Self::new()?;
        fixture.write_json("i18n/login.json", &bundle)?;
        Ok(fixture)
    }

    /// Write a mock response to mocks/idp/idx/<name>
    pub fn write_mock(&self, name: &str, content: &Value) -> Result<()> {
        self.write_json(&format!("mocks/idp/idx/{}", name), content)
    }

    /// Write raw text, e.g. an unparsable mock
    pub fn write_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .mocklintrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        self.write_json(".mocklintrc.json", content)
    }

    fn write_json(&self, relative_path: &str, content: &Value) -> Result<()> {
        let json_str = serde_json::to_string_pretty(content)
            .with_context(|| format!("Failed to serialize JSON for: {}", relative_path))?;
        self.write_file(relative_path, &format!("{}\n", json_str))
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// A mock whose first message references `key`
pub fn mock_with_key(key: &str) -> Value {
    json!({
        "version": "1.0.0",
        "messages": {
            "type": "array",
            "value": [
                { "message": "Localized text", "i18n": { "key": key }, "class": "INFO" }
            ]
        }
    })
}

/// A mock whose first message is a hard-coded English string
pub fn mock_hardcoded() -> Value {
    json!({
        "version": "1.0.0",
        "messages": {
            "type": "array",
            "value": [
                { "message": "Something went wrong.", "class": "ERROR" }
            ]
        }
    })
}

/// A project with one clean mock, one hard-coded mock and `count` mocks
/// referencing keys missing from the bundle
pub fn fixture_with_gaps(count: usize) -> Result<McpTestFixture> {
    let fixture = McpTestFixture::with_bundle(json!({
        "welcome": "Welcome!",
        "oie": { "tooManyRequests": "Too many requests" }
    }))?;

    fixture.write_mock("identify.json", &mock_with_key("welcome"))?;
    fixture.write_mock("challenge/email.json", &mock_hardcoded())?;
    for i in 0..count {
        fixture.write_mock(
            &format!("gap-{:02}.json", i),
            &mock_with_key(&format!("ghost.{:02}", i)),
        )?;
    }

    Ok(fixture)
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a scan result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
