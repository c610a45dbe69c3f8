//! Page Object Model for the add-in task pane
//!
//! Scenarios are written once against [`TaskPanePage`]; each host provides
//! its own implementation:
//!
//! | Host    | Type              | Context protocol                      |
//! |---------|-------------------|---------------------------------------|
//! | Windows | `WindowsTaskPane` | none, the pane lives in the native tree |
//! | macOS   | `MacTaskPane`     | `NATIVE_APP` ⇄ discovered webview     |
//! | Web     | `WebTaskPane`     | top-level document ⇄ add-in iframe    |
//!
//! Implementations hold only a borrow of the session plus immutable
//! locators. None of them remembers which context the session is in.

pub mod addressing;
#[cfg(feature = "mac")]
pub mod mac;
#[cfg(feature = "web")]
pub mod web;
#[cfg(feature = "windows")]
pub mod windows;

use crate::platform::Platform;
use crate::result::PaneResult;
use crate::session::AutomationSession;
use addressing::ContentAddressing;
use async_trait::async_trait;
use tracing::debug;

/// Task pane lifecycle shared by every host.
#[async_trait]
pub trait BasePage: Send + Sync {
    /// Host this page object drives
    fn platform(&self) -> Platform;

    /// Block until the host's readiness element exists.
    ///
    /// # Errors
    ///
    /// [`crate::PaneError::Timeout`] when it does not appear within the
    /// platform's load timeout.
    async fn wait_for_plugin_loaded(&self) -> PaneResult<()>;

    /// Run the host's sequence that reveals the task pane.
    ///
    /// Does not verify the result; call [`BasePage::is_task_pane_visible`].
    async fn open_task_pane(&self) -> PaneResult<()>;

    /// Close the task pane. Does not verify the result.
    async fn close_task_pane(&self) -> PaneResult<()>;

    /// Whether the task pane is shown.
    ///
    /// Never fails: any error while probing reads as `false`.
    async fn is_task_pane_visible(&self) -> bool;
}

/// Content operations on an open task pane.
#[async_trait]
pub trait TaskPanePage: BasePage {
    /// Text of the task pane title
    async fn title(&self) -> PaneResult<String>;

    /// Click the control whose visible label is exactly `label`
    async fn click_button(&self, label: &str) -> PaneResult<()>;

    /// Current content of the input `field`
    async fn input_value(&self, field: &str) -> PaneResult<String>;

    /// Replace the content of the input `field` with `value`
    async fn set_input_value(&self, field: &str, value: &str) -> PaneResult<()>;
}

/// Collapse a visibility probe into a plain answer.
///
/// This is the only place errors are turned into a value instead of being
/// propagated.
pub(crate) fn visible_or_false(platform: Platform, probe: PaneResult<bool>) -> bool {
    match probe {
        Ok(visible) => visible,
        Err(err) => {
            debug!(%platform, error = %err, "task pane visibility probe failed");
            false
        }
    }
}

/// Content helpers run after the caller has established the right context.
pub(crate) mod content {
    use super::*;

    pub(crate) async fn root_displayed(
        session: &dyn AutomationSession,
        addressing: &ContentAddressing,
    ) -> PaneResult<bool> {
        let root = session.find_element(&addressing.root()).await?;
        session.is_displayed(&root).await
    }

    pub(crate) async fn title(
        session: &dyn AutomationSession,
        addressing: &ContentAddressing,
    ) -> PaneResult<String> {
        let title = session.find_element(&addressing.title()).await?;
        session.text(&title).await
    }

    pub(crate) async fn click_button(
        session: &dyn AutomationSession,
        addressing: &ContentAddressing,
        label: &str,
    ) -> PaneResult<()> {
        let button = session.find_element(&addressing.button(label)).await?;
        session.click(&button).await
    }

    pub(crate) async fn input_value(
        session: &dyn AutomationSession,
        addressing: &ContentAddressing,
        field: &str,
    ) -> PaneResult<String> {
        let input = session.find_element(&addressing.input(field)).await?;
        addressing.input_projection().read(session, &input).await
    }

    pub(crate) async fn set_input_value(
        session: &dyn AutomationSession,
        addressing: &ContentAddressing,
        field: &str,
        value: &str,
    ) -> PaneResult<()> {
        let input = session.find_element(&addressing.input(field)).await?;
        session.clear_value(&input).await?;
        session.set_value(&input, value).await
    }
}
