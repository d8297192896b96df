//! Translation bundle data.

use std::collections::HashMap;

/// Key → localized string mapping for one locale.
///
/// A key counts as covered when it is present, whatever its value. The bundle
/// is loaded once per run and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationBundle {
    /// Display name used in messages (e.g. `login.properties`).
    pub name: String,
    /// Path the bundle was loaded from, empty for in-memory bundles.
    pub file_path: String,
    pub entries: HashMap<String, String>,
}

impl TranslationBundle {
    pub fn new(name: impl Into<String>, entries: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            file_path: String::new(),
            entries,
        }
    }

    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = file_path.into();
        self
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationBundle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            name: String::new(),
            file_path: String::new(),
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
