//! Theme construction and the built-in repr theme.
//!
//! This module provides:
//!
//! - [`Theme`]: An immutable key/spec mapping with a fluent builder API
//! - [`repr_theme`]: The built-in eight-entry repr highlight theme
//! - [`keys`]: Style-key constants for the repr categories

mod repr;
#[allow(clippy::module_inception)]
mod theme;

pub use repr::{keys, repr_theme};
pub use theme::Theme;
