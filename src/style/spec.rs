//! Style-spec string parsing.
//!
//! A style spec is a whitespace-separated list of tokens describing how a
//! category of output should look, e.g. `"bright yellow"` or `"red bold"`.
//! Recognized tokens:
//!
//! - The 16 ANSI color names: `black`, `red`, `green`, `yellow`, `blue`,
//!   `magenta`, `cyan`, `white`, each optionally brightened with a standalone
//!   `bright` modifier (`bright yellow`) or a `bright_` prefix
//!   (`bright_yellow`)
//! - A 256-color palette index: `208`
//! - Emphasis attributes: `bold`, `dim`, `italic`, `underline`, `blink`,
//!   `reverse`, `hidden`, `strikethrough`

use console::Style;

use super::error::StyleSpecError;

/// Parses a style-spec string into a [`console::Style`].
///
/// # Example
///
/// ```rust
/// use reprtint::parse_spec;
///
/// let style = parse_spec("bright green").unwrap();
/// println!("{}", style.apply_to("ok"));
///
/// assert!(parse_spec("cyan bold").is_ok());
/// assert!(parse_spec("chartreuse").is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the spec is empty, contains an unrecognized token,
/// or ends with a dangling `bright` modifier.
pub fn parse_spec(spec: &str) -> Result<Style, StyleSpecError> {
    let mut tokens = spec.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return Err(StyleSpecError::Empty);
    }

    let mut style = Style::new();
    while let Some(token) = tokens.next() {
        if token == "bright" {
            let name = tokens.next().ok_or_else(|| StyleSpecError::DanglingModifier {
                modifier: token.to_string(),
            })?;
            style = apply_color(style, name)
                .ok_or_else(|| StyleSpecError::UnknownToken {
                    token: name.to_string(),
                })?
                .bright();
            continue;
        }

        if let Some(name) = token.strip_prefix("bright_") {
            style = apply_color(style, name)
                .ok_or_else(|| StyleSpecError::UnknownToken {
                    token: token.to_string(),
                })?
                .bright();
            continue;
        }

        if let Ok(index) = token.parse::<u8>() {
            style = style.color256(index);
            continue;
        }

        if let Some(colored) = apply_color(style.clone(), token) {
            style = colored;
            continue;
        }

        style = apply_attribute(style, token).ok_or_else(|| StyleSpecError::UnknownToken {
            token: token.to_string(),
        })?;
    }

    Ok(style)
}

fn apply_color(style: Style, name: &str) -> Option<Style> {
    Some(match name {
        "black" => style.black(),
        "red" => style.red(),
        "green" => style.green(),
        "yellow" => style.yellow(),
        "blue" => style.blue(),
        "magenta" => style.magenta(),
        "cyan" => style.cyan(),
        "white" => style.white(),
        _ => return None,
    })
}

fn apply_attribute(style: Style, name: &str) -> Option<Style> {
    Some(match name {
        "bold" => style.bold(),
        "dim" => style.dim(),
        "italic" => style.italic(),
        "underline" | "underlined" => style.underlined(),
        "blink" => style.blink(),
        "reverse" => style.reverse(),
        "hidden" => style.hidden(),
        "strikethrough" => style.strikethrough(),
        _ => return None,
    })
}
