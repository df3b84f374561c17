//! Theme-driven text highlighting.

use std::collections::HashMap;

use console::Style;

use crate::style::{parse_spec, StyleSpecError};
use crate::theme::Theme;

/// Error returned when a theme entry's spec string cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightError {
    /// The style key whose spec failed to parse
    pub key: String,
    /// The underlying parse error
    pub source: StyleSpecError,
}

impl std::fmt::Display for HighlightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "style key '{}': {}", self.key, self.source)
    }
}

impl std::error::Error for HighlightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Applies a theme's styles to text by key.
///
/// A `Highlighter` is constructed from a [`Theme`] and compiles every spec
/// string into a [`console::Style`] up front, so malformed specs are caught
/// at construction rather than mid-output. The theme is borrowed read-only
/// and left untouched.
///
/// Color output follows the `console` crate's terminal detection; use
/// [`force_styling`](Highlighter::force_styling) to override it.
///
/// # Example
///
/// ```rust
/// use reprtint::{keys, repr_theme, Highlighter};
///
/// let theme = repr_theme();
/// let highlighter = Highlighter::new(&theme).unwrap();
///
/// println!("{}", highlighter.paint(keys::NUMBER, "42"));
///
/// let plain = highlighter.paint("unknown-key", "42");
/// assert_eq!(plain, "42");
/// ```
#[derive(Debug, Clone)]
pub struct Highlighter {
    styles: HashMap<String, Style>,
}

impl Highlighter {
    /// Compiles a theme into a highlighter.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending key if any spec string in the
    /// theme fails to parse.
    pub fn new(theme: &Theme) -> Result<Self, HighlightError> {
        let mut styles = HashMap::new();
        for (key, spec) in theme.iter() {
            let style = parse_spec(spec).map_err(|source| HighlightError {
                key: key.to_string(),
                source,
            })?;
            styles.insert(key.to_string(), style);
        }
        Ok(Self { styles })
    }

    /// Forces styling on or off for all compiled styles, bypassing terminal
    /// detection. Returns the updated highlighter for chaining.
    pub fn force_styling(mut self, enable: bool) -> Self {
        for style in self.styles.values_mut() {
            *style = style.clone().force_styling(enable);
        }
        self
    }

    /// Returns the compiled style for a key, if the theme defined one.
    pub fn style(&self, key: &str) -> Option<&Style> {
        self.styles.get(key)
    }

    /// Applies the style registered under `key` to `text`.
    ///
    /// Unknown keys fall back to the text unstyled.
    pub fn paint(&self, key: &str, text: &str) -> String {
        match self.styles.get(key) {
            Some(style) => style.apply_to(text).to_string(),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{keys, repr_theme};

    #[test]
    fn test_highlighter_compiles_repr_theme() {
        let theme = repr_theme();
        assert!(Highlighter::new(&theme).is_ok());
    }

    #[test]
    fn test_highlighter_paints_known_key() {
        let theme = Theme::new().add("tone", "red");
        let highlighter = Highlighter::new(&theme).unwrap().force_styling(true);
        let output = highlighter.paint("tone", "hi");
        assert!(output.contains("\x1b[31"));
        assert!(output.contains("hi"));
    }

    #[test]
    fn test_highlighter_unknown_key_passes_through() {
        let theme = repr_theme();
        let highlighter = Highlighter::new(&theme).unwrap().force_styling(true);
        assert_eq!(highlighter.paint("nonexistent-key", "hi"), "hi");
    }

    #[test]
    fn test_highlighter_rejects_malformed_spec() {
        let theme = Theme::new().add("tone", "chartreuse");
        let err = Highlighter::new(&theme).unwrap_err();
        assert_eq!(err.key, "tone");
        assert_eq!(
            err.source,
            StyleSpecError::UnknownToken {
                token: "chartreuse".to_string(),
            }
        );
    }

    #[test]
    fn test_highlighter_style_lookup() {
        let theme = repr_theme();
        let highlighter = Highlighter::new(&theme).unwrap();
        assert!(highlighter.style(keys::NUMBER).is_some());
        assert!(highlighter.style("nonexistent-key").is_none());
    }

    #[test]
    fn test_highlight_error_display_names_key() {
        let theme = Theme::new().add("tone", "");
        let err = Highlighter::new(&theme).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("tone"));
        assert!(msg.contains("empty"));
    }
}
