//! Repr highlight theme for styled console output.
//!
//! `reprtint` provides a small, immutable theme mapping each category of
//! repr-style output (class names, calls, strings, numbers, none values,
//! attribute names and values) to a style-spec string, plus a
//! [`Highlighter`] that compiles those specs into [`console::Style`] values
//! and applies them to text.
//!
//! The theme is plain data: construct it, look up specs by key, hand it to
//! a highlighter. No globals, no mutation after construction.
//!
//! # Example
//!
//! ```rust
//! use reprtint::{keys, repr_theme, Highlighter};
//!
//! let theme = repr_theme();
//! assert_eq!(theme.get(keys::NUMBER), Some("bright red"));
//!
//! let highlighter = Highlighter::new(&theme).unwrap();
//! println!("{}", highlighter.paint(keys::STRING, "\"hello\""));
//! ```
//!
//! Custom themes use the same fluent builder the built-in theme is made of:
//!
//! ```rust
//! use reprtint::{Highlighter, Theme};
//!
//! let theme = Theme::new()
//!     .add("number-representation", "cyan bold")
//!     .add("string-representation", "magenta");
//!
//! let highlighter = Highlighter::new(&theme).unwrap();
//! assert_eq!(highlighter.paint("missing-key", "as-is"), "as-is");
//! ```

mod highlight;
pub mod style;
pub mod theme;

pub use highlight::{HighlightError, Highlighter};
pub use style::{parse_spec, StyleSpecError};
pub use theme::{keys, repr_theme, Theme};
