//! Windows desktop task pane (WinAppDriver-style accessibility tree).
//!
//! The pane is a native element, so no context switching happens here.

use super::addressing::ContentAddressing;
use super::{content, visible_or_false, BasePage, TaskPanePage};
use crate::config::{PaneConfig, WindowsLocators};
use crate::platform::Platform;
use crate::result::PaneResult;
use crate::selector::Selector;
use crate::session::AutomationSession;
use async_trait::async_trait;
use std::time::Duration;

/// Task pane page object for the Windows desktop host
pub struct WindowsTaskPane<'s> {
    session: &'s dyn AutomationSession,
    locators: WindowsLocators,
    addressing: ContentAddressing,
    load_timeout: Duration,
}

impl<'s> WindowsTaskPane<'s> {
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
            addressing: ContentAddressing::native(&config.windows),
            locators: config.windows.clone(),
            load_timeout: config.load_timeout(Platform::Windows),
        }
    }

    async fn click(&self, id: &str) -> PaneResult<()> {
        let element = self
            .session
            .find_element(&Selector::accessibility_id(id))
            .await?;
        self.session.click(&element).await
    }
}

impl std::fmt::Debug for WindowsTaskPane<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowsTaskPane")
            .field("locators", &self.locators)
            .field("load_timeout", &self.load_timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl BasePage for WindowsTaskPane<'_> {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    async fn wait_for_plugin_loaded(&self) -> PaneResult<()> {
        let ribbon_tab = Selector::accessibility_id(&self.locators.ribbon_tab);
        self.session
            .wait_for_exist(&ribbon_tab, self.load_timeout)
            .await?;
        Ok(())
    }

    async fn open_task_pane(&self) -> PaneResult<()> {
        self.click(&self.locators.show_button).await
    }

    async fn close_task_pane(&self) -> PaneResult<()> {
        self.click(&self.locators.close_button).await
    }

    async fn is_task_pane_visible(&self) -> bool {
        let probe = content::root_displayed(self.session, &self.addressing).await;
        visible_or_false(Platform::Windows, probe)
    }
}

#[async_trait]
impl TaskPanePage for WindowsTaskPane<'_> {
    async fn title(&self) -> PaneResult<String> {
        content::title(self.session, &self.addressing).await
    }

    async fn click_button(&self, label: &str) -> PaneResult<()> {
        content::click_button(self.session, &self.addressing, label).await
    }

    async fn input_value(&self, field: &str) -> PaneResult<String> {
        content::input_value(self.session, &self.addressing, field).await
    }

    async fn set_input_value(&self, field: &str, value: &str) -> PaneResult<()> {
        content::set_input_value(self.session, &self.addressing, field, value).await
    }
}
