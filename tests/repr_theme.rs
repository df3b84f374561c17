//! End-to-end tests for the built-in repr theme.

use console::Style;
use reprtint::{keys, repr_theme, Highlighter, Theme};

fn render(style: Style, text: &str) -> String {
    style.force_styling(true).apply_to(text).to_string()
}

#[test]
fn test_repr_theme_matches_contract_table() {
    let theme = repr_theme();
    let expected = [
        (keys::OWN_CLASS, "bright yellow"),
        (keys::TAG_NAME, "bright yellow"),
        (keys::CALL, "bright yellow"),
        (keys::STRING, "bright green"),
        (keys::NUMBER, "bright red"),
        (keys::NONE_VALUE, "bright blue"),
        (keys::ATTRIBUTE_NAME, "bright yellow"),
        (keys::ATTRIBUTE_VALUE, "bright blue"),
    ];

    assert_eq!(theme.len(), expected.len());
    for (key, spec) in expected {
        assert_eq!(theme.get(key), Some(spec), "entry for '{}'", key);
    }
}

#[test]
fn test_repr_theme_paints_every_category() {
    let theme = repr_theme();
    let highlighter = Highlighter::new(&theme).unwrap().force_styling(true);

    for (key, _) in theme.iter() {
        let output = highlighter.paint(key, "sample");
        assert!(output.starts_with("\x1b["), "'{}' should be styled", key);
        assert!(output.contains("sample"));
        assert!(output.ends_with("\x1b[0m"));
    }
}

#[test]
fn test_repr_theme_number_paints_bright_red() {
    let highlighter = Highlighter::new(&repr_theme()).unwrap().force_styling(true);
    let expected = render(Style::new().red().bright(), "42");
    assert_eq!(highlighter.paint(keys::NUMBER, "42"), expected);
}

#[test]
fn test_repr_theme_none_paints_bright_blue() {
    let highlighter = Highlighter::new(&repr_theme()).unwrap().force_styling(true);
    let expected = render(Style::new().blue().bright(), "None");
    assert_eq!(highlighter.paint(keys::NONE_VALUE, "None"), expected);
}

#[test]
fn test_independent_constructions_compare_equal() {
    let first = repr_theme();
    let second = repr_theme();
    assert_eq!(first, second);
    for (key, spec) in first.iter() {
        assert_eq!(second.get(key), Some(spec));
    }
}

#[test]
fn test_theme_loaded_from_json_paints_like_builder() {
    let from_json: Theme = serde_json::from_str(
        r#"{
            "number-representation": "bright red",
            "string-representation": "bright green"
        }"#,
    )
    .unwrap();
    let built = Theme::new()
        .add(keys::NUMBER, "bright red")
        .add(keys::STRING, "bright green");
    assert_eq!(from_json, built);

    let highlighter = Highlighter::new(&from_json).unwrap().force_styling(true);
    let expected = render(Style::new().green().bright(), "\"copper\"");
    assert_eq!(highlighter.paint(keys::STRING, "\"copper\""), expected);
}

#[test]
fn test_highlighter_leaves_theme_untouched() {
    let theme = repr_theme();
    let _highlighter = Highlighter::new(&theme).unwrap();
    assert_eq!(theme, repr_theme());
}
