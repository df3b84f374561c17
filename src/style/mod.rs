//! Style-spec parsing.
//!
//! This module provides the styling primitives:
//!
//! - [`parse_spec`]: Parse a style-spec string into a [`console::Style`]
//! - [`StyleSpecError`]: Errors from style-spec parsing
//!
//! Theme entries hold their style specs as plain strings; parsing happens
//! only when a theme is handed to a [`Highlighter`](crate::Highlighter).

mod error;
mod spec;

pub use error::StyleSpecError;
pub use spec::parse_spec;
