//! The built-in repr highlight theme.

use super::theme::Theme;

/// Style keys for the categories of repr output.
pub mod keys {
    /// Display of an object's own class name.
    pub const OWN_CLASS: &str = "own-class-representation";
    /// Display of markup/tag names.
    pub const TAG_NAME: &str = "tag-name-representation";
    /// Display of function calls and other symbols.
    pub const CALL: &str = "call-representation";
    /// Display of string literals.
    pub const STRING: &str = "string-representation";
    /// Display of numeric literals.
    pub const NUMBER: &str = "number-representation";
    /// Display of null/none values.
    pub const NONE_VALUE: &str = "none-representation";
    /// Display of object attribute names.
    pub const ATTRIBUTE_NAME: &str = "attribute-name-representation";
    /// Display of object attribute values.
    pub const ATTRIBUTE_VALUE: &str = "attribute-value-representation";
}

const REPR_STYLES: [(&str, &str); 8] = [
    (keys::OWN_CLASS, "bright yellow"),       // class names
    (keys::TAG_NAME, "bright yellow"),        // tag names
    (keys::CALL, "bright yellow"),            // function calls and other symbols
    (keys::STRING, "bright green"),           // string literals
    (keys::NUMBER, "bright red"),             // numbers
    (keys::NONE_VALUE, "bright blue"),        // none values
    (keys::ATTRIBUTE_NAME, "bright yellow"),  // attribute names
    (keys::ATTRIBUTE_VALUE, "bright blue"),   // attribute values
];

/// Builds the repr highlight theme.
///
/// A pure constructor: every call returns an equal theme holding the eight
/// repr entries, keyed by the constants in [`keys`]. Pass the result to a
/// [`Highlighter`](crate::Highlighter) to colorize output.
///
/// # Example
///
/// ```rust
/// use reprtint::{keys, repr_theme};
///
/// let theme = repr_theme();
/// assert_eq!(theme.get(keys::STRING), Some("bright green"));
/// ```
pub fn repr_theme() -> Theme {
    REPR_STYLES
        .iter()
        .fold(Theme::new(), |theme, &(key, spec)| theme.add(key, spec))
}
