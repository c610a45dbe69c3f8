//! macOS desktop task pane (Mac2 driver).
//!
//! The host's menus live in the native accessibility tree while the add-in
//! itself renders inside an embedded webview:
//!
//! ```text
//!            switch_to_native_context
//!   ┌────────┐ ◄───────────────────── ┌─────────┐
//!   │ native │                        │ webview │
//!   └────────┘ ─────────────────────► └─────────┘
//!            switch_to_webview_context
//!            (no-op while no webview context exists)
//! ```
//!
//! | Operation              | Context                          |
//! |------------------------|----------------------------------|
//! | wait_for_plugin_loaded | native                           |
//! | open_task_pane         | native, click menu, then webview |
//! | close_task_pane        | native                           |
//! | everything else        | webview                          |

use super::addressing::ContentAddressing;
use super::{content, visible_or_false, BasePage, TaskPanePage};
use crate::config::{MacLocators, PaneConfig};
use crate::context::{self, OsContext};
use crate::platform::Platform;
use crate::result::PaneResult;
use crate::selector::Selector;
use crate::session::AutomationSession;
use async_trait::async_trait;
use std::time::Duration;

/// Task pane page object for the macOS desktop host
pub struct MacTaskPane<'s> {
    session: &'s dyn AutomationSession,
    locators: MacLocators,
    addressing: ContentAddressing,
    load_timeout: Duration,
}

impl<'s> MacTaskPane<'s> {
    /// Create a page object with the default locators
    #[must_use]
    pub fn new(session: &'s dyn AutomationSession) -> Self {
        Self::with_config(session, &PaneConfig::default())
    }

    /// Create a page object from a configuration
    #[must_use]
    pub fn with_config(session: &'s dyn AutomationSession, config: &PaneConfig) -> Self {
        Self {
            session,
            addressing: ContentAddressing::webview(&config.mac),
            locators: config.mac.clone(),
            load_timeout: config.load_timeout(Platform::Mac),
        }
    }

    /// Enter the first webview context; stays put if there is none yet.
    pub async fn switch_to_webview_context(&self) -> PaneResult<Option<OsContext>> {
        context::switch_to_webview_context(self.session, &self.locators.webview_marker).await
    }

    /// Enter the native context.
    pub async fn switch_to_native_context(&self) -> PaneResult<OsContext> {
        context::switch_to_native_context(self.session, &self.locators.native_context).await
    }

    async fn click_native(&self, id: &str) -> PaneResult<()> {
        let element = self
            .session
            .find_element(&Selector::accessibility_id(id))
            .await?;
        self.session.click(&element).await
    }

    async fn probe_visibility(&self) -> PaneResult<bool> {
        self.switch_to_webview_context().await?;
        content::root_displayed(self.session, &self.addressing).await
    }
}

impl std::fmt::Debug for MacTaskPane<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MacTaskPane")
            .field("locators", &self.locators)
            .field("load_timeout", &self.load_timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl BasePage for MacTaskPane<'_> {
    fn platform(&self) -> Platform {
        Platform::Mac
    }

    async fn wait_for_plugin_loaded(&self) -> PaneResult<()> {
        self.switch_to_native_context().await?;
        let marker = Selector::accessibility_id(&self.locators.addin_marker);
        self.session.wait_for_exist(&marker, self.load_timeout).await?;
        Ok(())
    }

    async fn open_task_pane(&self) -> PaneResult<()> {
        self.switch_to_native_context().await?;
        self.click_native(&self.locators.show_menu_item).await?;
        self.switch_to_webview_context().await?;
        Ok(())
    }

    async fn close_task_pane(&self) -> PaneResult<()> {
        self.switch_to_native_context().await?;
        self.click_native(&self.locators.close_button).await
    }

    async fn is_task_pane_visible(&self) -> bool {
        visible_or_false(Platform::Mac, self.probe_visibility().await)
    }
}

#[async_trait]
impl TaskPanePage for MacTaskPane<'_> {
    async fn title(&self) -> PaneResult<String> {
        self.switch_to_webview_context().await?;
        content::title(self.session, &self.addressing).await
    }

    async fn click_button(&self, label: &str) -> PaneResult<()> {
        self.switch_to_webview_context().await?;
        content::click_button(self.session, &self.addressing, label).await
    }

    async fn input_value(&self, field: &str) -> PaneResult<String> {
        self.switch_to_webview_context().await?;
        content::input_value(self.session, &self.addressing, field).await
    }

    async fn set_input_value(&self, field: &str, value: &str) -> PaneResult<()> {
        self.switch_to_webview_context().await?;
        content::set_input_value(self.session, &self.addressing, field, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{ClickEffect, MockElement, MockSession};
    use crate::result::PaneError;
    use crate::session::NATIVE_CONTEXT;

    const WEBVIEW: &str = "WEBVIEW_42";

    fn desktop() -> MockSession {
        MockSession::new()
            .with_element(
                MockElement::new(Selector::accessibility_id("com.microsoft.Excel.addin.taskpane"))
                    .in_context(NATIVE_CONTEXT),
            )
            .with_element(
                MockElement::new(Selector::accessibility_id("ShowTaskPaneMenuItem"))
                    .in_context(NATIVE_CONTEXT)
                    .on_click(ClickEffect::AddContext(WEBVIEW.to_string()))
                    .on_click(ClickEffect::Show(Selector::css("#taskpane-root"))),
            )
            .with_element(
                MockElement::new(Selector::accessibility_id("TaskPaneCloseButton"))
                    .in_context(NATIVE_CONTEXT)
                    .on_click(ClickEffect::Hide(Selector::css("#taskpane-root"))),
            )
            .with_element(
                MockElement::new(Selector::css("#taskpane-root"))
                    .in_context(WEBVIEW)
                    .hidden(),
            )
            .with_element(
                MockElement::new(Selector::css("#taskpane-title"))
                    .in_context(WEBVIEW)
                    .with_text("Contoso"),
            )
            .with_element(MockElement::new(Selector::button_text("Run")).in_context(WEBVIEW))
            .with_element(MockElement::new(Selector::named_input("email")).in_context(WEBVIEW))
    }

    #[tokio::test]
    async fn test_switch_to_webview_selects_webview_context() {
        let session = MockSession::new().with_contexts(["NATIVE_APP", "WEBVIEW_42"]);
        let page = MacTaskPane::new(&session);
        let entered = page.switch_to_webview_context().await.unwrap();
        assert_eq!(entered, Some(OsContext::WebView("WEBVIEW_42".into())));
        assert_eq!(session.current_context(), "WEBVIEW_42");
    }

    #[tokio::test]
    async fn test_switch_to_webview_without_webview_is_noop() {
        let session = MockSession::new().with_contexts(["NATIVE_APP"]);
        let page = MacTaskPane::new(&session);
        let entered = page.switch_to_webview_context().await.unwrap();
        assert_eq!(entered, None);
        assert_eq!(session.current_context(), "NATIVE_APP");
        assert!(!session.was_called("switch_context"));
    }

    #[tokio::test]
    async fn test_wait_for_plugin_loaded_enters_native_first() {
        let session = desktop().with_contexts(["NATIVE_APP", WEBVIEW]);
        session.switch_context(WEBVIEW).await.unwrap();
        let page = MacTaskPane::new(&session);
        page.wait_for_plugin_loaded().await.unwrap();
        assert_eq!(session.current_context(), NATIVE_CONTEXT);
    }

    #[tokio::test]
    async fn test_open_ends_in_webview() {
        let session = desktop();
        let page = MacTaskPane::new(&session);
        page.open_task_pane().await.unwrap();
        assert_eq!(session.current_context(), WEBVIEW);
        assert!(page.is_task_pane_visible().await);
    }

    #[tokio::test]
    async fn test_close_from_webview() {
        let session = desktop();
        let page = MacTaskPane::new(&session);
        page.open_task_pane().await.unwrap();
        page.close_task_pane().await.unwrap();
        assert!(!page.is_task_pane_visible().await);
    }

    #[tokio::test]
    async fn test_content_operations_switch_every_time() {
        let session = desktop();
        let page = MacTaskPane::new(&session);
        page.open_task_pane().await.unwrap();
        session.clear_history();

        assert_eq!(page.title().await.unwrap(), "Contoso");
        page.click_button("Run").await.unwrap();
        assert_eq!(session.count_calls(&format!("switch_context:{WEBVIEW}")), 2);
    }

    #[tokio::test]
    async fn test_visibility_false_before_webview_exists() {
        let session = desktop();
        let page = MacTaskPane::new(&session);
        assert!(!page.is_task_pane_visible().await);
    }

    #[tokio::test]
    async fn test_title_without_webview_fails_in_native_tree() {
        let session = desktop();
        let page = MacTaskPane::new(&session);
        let err = page.title().await.unwrap_err();
        assert!(matches!(err, PaneError::ElementNotFound { .. }));
    }

    #[tokio::test]
    async fn test_context_listing_failure_is_context_switch_failure() {
        let session = desktop().failing("contexts");
        let page = MacTaskPane::new(&session);
        let err = page.title().await.unwrap_err();
        assert!(matches!(err, PaneError::ContextSwitchFailure { .. }));
        assert!(!page.is_task_pane_visible().await);
    }

    #[tokio::test]
    async fn test_set_input_value_overwrites() {
        let session = desktop();
        let page = MacTaskPane::new(&session);
        page.open_task_pane().await.unwrap();
        page.set_input_value("email", "x@y.z").await.unwrap();
        page.set_input_value("email", "x@y.z").await.unwrap();
        assert_eq!(page.input_value("email").await.unwrap(), "x@y.z");
    }
}
