//! Mock API response documents.

use serde_json::Value;

/// Parsed content of one mock API response file.
///
/// The document keeps the raw JSON tree. Field access goes through guarded
/// accessors so that a well-formed JSON file with an unexpected shape never
/// causes a failure, only an absent value.
#[derive(Debug, Clone, PartialEq)]
pub struct MockDocument {
    root: Value,
}

impl MockDocument {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Entries of `messages.value`, or `None` when the container is absent or
    /// is not an array.
    pub fn messages(&self) -> Option<&[Value]> {
        self.root
            .get("messages")?
            .get("value")?
            .as_array()
            .map(Vec::as_slice)
    }

    /// The message the mock is checked by: the first entry of `messages.value`.
    ///
    /// Later entries are deliberately not inspected.
    pub fn primary_message(&self) -> Option<MessageEntry<'_>> {
        self.messages()?.first().map(MessageEntry)
    }
}

impl From<Value> for MockDocument {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

/// Borrowed view over one entry of `messages.value`.
#[derive(Debug, Clone, Copy)]
pub struct MessageEntry<'a>(&'a Value);

impl<'a> MessageEntry<'a> {
    /// `i18n.key` when it is a non-empty string.
    pub fn i18n_key(&self) -> Option<&'a str> {
        self.0
            .get("i18n")?
            .get("key")?
            .as_str()
            .filter(|key| !key.is_empty())
    }
}
