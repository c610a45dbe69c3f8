//! Selector model for addressing task pane elements.
//!
//! Native hosts are addressed through the accessibility tree, web content
//! through the DOM. A [`Selector`] keeps the addressing scheme explicit so
//! every session backend can translate it into its own lookup strategy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector type for locating elements
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Selector {
    /// Accessibility identifier (`~ShowTaskPaneButton`)
    AccessibilityId(String),
    /// CSS selector (`#taskpane-root`, `[name="email"]`)
    Css(String),
    /// Accessible name of a native control (`[Name="Run"]`)
    Name(String),
    /// Button whose visible label equals the text exactly (`button=Run`)
    ButtonText(String),
}

impl Selector {
    /// Create an accessibility id selector
    #[must_use]
    pub fn accessibility_id(id: impl Into<String>) -> Self {
        Self::AccessibilityId(id.into())
    }

    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create an accessible-name selector
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Create a button-by-label selector
    #[must_use]
    pub fn button_text(label: impl Into<String>) -> Self {
        Self::ButtonText(label.into())
    }

    /// CSS selector for a form control with the given `name` attribute
    #[must_use]
    pub fn named_input(field: &str) -> Self {
        Self::Css(format!("[name={}]", css_string(field)))
    }

    /// W3C WebDriver locator strategy and value for this selector.
    ///
    /// Button labels are matched with an XPath on the normalized text so
    /// that only exact matches qualify.
    #[must_use]
    pub fn to_strategy(&self) -> (&'static str, String) {
        match self {
            Self::AccessibilityId(id) => ("accessibility id", id.clone()),
            Self::Css(css) => ("css selector", css.clone()),
            Self::Name(name) => ("name", name.clone()),
            Self::ButtonText(label) => (
                "xpath",
                format!("//button[normalize-space(.)={}]", xpath_literal(label)),
            ),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessibilityId(id) => write!(f, "~{id}"),
            Self::Css(css) => f.write_str(css),
            Self::Name(name) => write!(f, "[Name={}]", css_string(name)),
            Self::ButtonText(label) => write!(f, "button={label}"),
        }
    }
}

/// Quote a value as a CSS attribute string.
fn css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

/// Quote a value as an XPath 1.0 string literal.
///
/// XPath has no escape sequences, so a value holding both quote kinds is
/// assembled with `concat()`.
fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{value}'");
    }
    if !value.contains('"') {
        return format!("\"{value}\"");
    }
    let parts: Vec<String> = value
        .split('\'')
        .map(|part| format!("'{part}'"))
        .collect();
    format!("concat({})", parts.join(", \"'\", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod display_tests {
        use super::*;

        #[test]
        fn test_accessibility_id_display() {
            assert_eq!(
                Selector::accessibility_id("TaskPaneTitle").to_string(),
                "~TaskPaneTitle"
            );
        }

        #[test]
        fn test_name_display() {
            assert_eq!(Selector::name("Run").to_string(), r#"[Name="Run"]"#);
        }

        #[test]
        fn test_button_text_display() {
            assert_eq!(Selector::button_text("Save").to_string(), "button=Save");
        }

        #[test]
        fn test_named_input_escapes_quotes() {
            assert_eq!(
                Selector::named_input(r#"a"b"#).to_string(),
                r#"[name="a\"b"]"#
            );
        }
    }

    mod strategy_tests {
        use super::*;

        #[test]
        fn test_css_strategy() {
            let (using, value) = Selector::css("#taskpane-root").to_strategy();
            assert_eq!(using, "css selector");
            assert_eq!(value, "#taskpane-root");
        }

        #[test]
        fn test_accessibility_strategy() {
            let (using, value) = Selector::accessibility_id("TaskPaneContainer").to_strategy();
            assert_eq!(using, "accessibility id");
            assert_eq!(value, "TaskPaneContainer");
        }

        #[test]
        fn test_button_strategy_is_exact_xpath() {
            let (using, value) = Selector::button_text("Run").to_strategy();
            assert_eq!(using, "xpath");
            assert_eq!(value, "//button[normalize-space(.)='Run']");
        }

        #[test]
        fn test_button_strategy_with_apostrophe() {
            let (_, value) = Selector::button_text("Don't").to_strategy();
            assert_eq!(value, r#"//button[normalize-space(.)="Don't"]"#);
        }

        #[test]
        fn test_button_strategy_with_both_quotes() {
            let (_, value) = Selector::button_text(r#"a'b"c"#).to_strategy();
            assert_eq!(
                value,
                r#"//button[normalize-space(.)=concat('a', "'", 'b"c')]"#
            );
        }
    }

    #[test]
    fn test_selector_yaml_shape() {
        let selector: Selector =
            serde_yaml_ng::from_str("kind: accessibility_id\nvalue: ShowTaskPaneButton\n").unwrap();
        assert_eq!(selector, Selector::accessibility_id("ShowTaskPaneButton"));
    }
}
