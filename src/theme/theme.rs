//! Theme struct for key/spec mappings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An immutable mapping from style keys to style-spec strings.
///
/// A theme associates each category of output (a style key) with a
/// human-readable style spec like `"bright yellow"`. Themes are assembled
/// once with the fluent [`add`](Theme::add) builder and never mutated
/// afterward; consumers look entries up by key only.
///
/// The theme itself performs no validation of its spec strings. Specs are
/// parsed when the theme is handed to a [`Highlighter`](crate::Highlighter),
/// and malformed specs surface there.
///
/// # Example
///
/// ```rust
/// use reprtint::Theme;
///
/// let theme = Theme::new()
///     .add("string-representation", "bright green")
///     .add("number-representation", "bright red");
///
/// assert_eq!(theme.get("number-representation"), Some("bright red"));
/// assert_eq!(theme.get("unknown"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    entries: HashMap<String, String>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Adds a keyed style spec, returning an updated theme for chaining.
    ///
    /// Adding a key that is already present replaces its spec.
    pub fn add(mut self, key: &str, spec: &str) -> Self {
        self.entries.insert(key.to_string(), spec.to_string());
        self
    }

    /// Returns the spec string for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true if the theme contains an entry for the key.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the theme has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all key/spec pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, spec)| (key.as_str(), spec.as_str()))
    }
}
