//! Style-spec parse errors.

/// Error returned when a style-spec string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleSpecError {
    /// The spec string contained no tokens
    Empty,
    /// A token matched no known color, palette index, or attribute
    UnknownToken { token: String },
    /// A modifier (e.g. `bright`) appeared without a color name after it
    DanglingModifier { modifier: String },
}

impl std::fmt::Display for StyleSpecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleSpecError::Empty => {
                write!(f, "style spec is empty")
            }
            StyleSpecError::UnknownToken { token } => {
                write!(f, "unrecognized style token '{}'", token)
            }
            StyleSpecError::DanglingModifier { modifier } => {
                write!(f, "modifier '{}' must be followed by a color name", modifier)
            }
        }
    }
}

impl std::error::Error for StyleSpecError {}
