//! Content addressing strategies.
//!
//! Once a page object has established its context, the task pane content is
//! addressed either through the native accessibility tree or through the
//! DOM. Both strategies answer the same questions (where is the root, the
//! title, a labeled button, a named input) and also say how an input's
//! content is read back.

use crate::config::{MacLocators, WebLocators, WindowsLocators};
use crate::result::PaneResult;
use crate::selector::Selector;
use crate::session::{AutomationSession, ElementHandle};

/// How an input's current content is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProjection {
    /// Accessible name/text (native input controls)
    Text,
    /// Form value (DOM inputs)
    Value,
}

impl InputProjection {
    /// Read the element's content through this projection
    pub async fn read(
        self,
        session: &dyn AutomationSession,
        element: &ElementHandle,
    ) -> PaneResult<String> {
        match self {
            Self::Text => session.text(element).await,
            Self::Value => session.value(element).await,
        }
    }
}

/// Selectors for the task pane content of one host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentAddressing {
    /// Accessibility-tree addressing (Windows)
    Native {
        /// Task pane container id
        container: String,
        /// Title id
        title: String,
    },
    /// DOM addressing inside a webview or iframe (mac, web)
    Dom {
        /// Root CSS selector
        root: String,
        /// Title CSS selector
        title: String,
    },
}

impl ContentAddressing {
    /// Native addressing from the Windows locators
    #[must_use]
    pub fn native(locators: &WindowsLocators) -> Self {
        Self::Native {
            container: locators.container.clone(),
            title: locators.title.clone(),
        }
    }

    /// DOM addressing from the mac webview locators
    #[must_use]
    pub fn webview(locators: &MacLocators) -> Self {
        Self::Dom {
            root: locators.root.clone(),
            title: locators.title.clone(),
        }
    }

    /// DOM addressing from the web iframe locators
    #[must_use]
    pub fn iframe(locators: &WebLocators) -> Self {
        Self::Dom {
            root: locators.root.clone(),
            title: locators.title.clone(),
        }
    }

    /// Element whose visibility means "task pane is shown"
    #[must_use]
    pub fn root(&self) -> Selector {
        match self {
            Self::Native { container, .. } => Selector::accessibility_id(container),
            Self::Dom { root, .. } => Selector::css(root),
        }
    }

    /// Title element
    #[must_use]
    pub fn title(&self) -> Selector {
        match self {
            Self::Native { title, .. } => Selector::accessibility_id(title),
            Self::Dom { title, .. } => Selector::css(title),
        }
    }

    /// Button whose visible label is exactly `label`
    #[must_use]
    pub fn button(&self, label: &str) -> Selector {
        match self {
            Self::Native { .. } => Selector::name(label),
            Self::Dom { .. } => Selector::button_text(label),
        }
    }

    /// Input identified by `field`
    #[must_use]
    pub fn input(&self, field: &str) -> Selector {
        match self {
            Self::Native { .. } => Selector::accessibility_id(field),
            Self::Dom { .. } => Selector::named_input(field),
        }
    }

    /// Projection used to read input content.
    ///
    /// Native input accessibility exposes content as text, not as a form
    /// value, so the two strategies intentionally differ here.
    #[must_use]
    pub const fn input_projection(&self) -> InputProjection {
        match self {
            Self::Native { .. } => InputProjection::Text,
            Self::Dom { .. } => InputProjection::Value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_addressing() {
        let addressing = ContentAddressing::native(&WindowsLocators::default());
        assert_eq!(addressing.root(), Selector::accessibility_id("TaskPaneContainer"));
        assert_eq!(addressing.title(), Selector::accessibility_id("TaskPaneTitle"));
        assert_eq!(addressing.button("Run"), Selector::name("Run"));
        assert_eq!(addressing.input("email"), Selector::accessibility_id("email"));
        assert_eq!(addressing.input_projection(), InputProjection::Text);
    }

    #[test]
    fn test_dom_addressing() {
        let addressing = ContentAddressing::iframe(&WebLocators::default());
        assert_eq!(addressing.root(), Selector::css("#taskpane-root"));
        assert_eq!(addressing.title(), Selector::css("#taskpane-title"));
        assert_eq!(addressing.button("Run"), Selector::button_text("Run"));
        assert_eq!(addressing.input("email"), Selector::css(r#"[name="email"]"#));
        assert_eq!(addressing.input_projection(), InputProjection::Value);
    }

    #[test]
    fn test_webview_and_iframe_share_dom_strategy() {
        assert_eq!(
            ContentAddressing::webview(&MacLocators::default()),
            ContentAddressing::iframe(&WebLocators::default())
        );
    }
}
