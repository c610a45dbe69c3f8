//! Browser-hosted task pane.
//!
//! The add-in renders inside an iframe of the spreadsheet page. Ribbon
//! controls live in the top-level document, content lives in the iframe.
//! Entering the iframe always starts with a reset to the top-level document
//! so that frame lookups never nest.

use super::addressing::ContentAddressing;
use super::{content, visible_or_false, BasePage, TaskPanePage};
use crate::config::{PaneConfig, WebLocators};
use crate::context::{self, FrameContext};
use crate::platform::Platform;
use crate::result::PaneResult;
use crate::selector::Selector;
use crate::session::AutomationSession;
use async_trait::async_trait;
use std::time::Duration;

/// Task pane page object for the browser host
pub struct WebTaskPane<'s> {
    session: &'s dyn AutomationSession,
    locators: WebLocators,
    addressing: ContentAddressing,
    load_timeout: Duration,
}

impl<'s> WebTaskPane<'s> {
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
            addressing: ContentAddressing::iframe(&config.web),
            locators: config.web.clone(),
            load_timeout: config.load_timeout(Platform::Web),
        }
    }

    /// Focus the top-level document.
    pub async fn switch_to_default_content(&self) -> PaneResult<FrameContext> {
        context::switch_to_default_content(self.session).await
    }

    /// Focus the add-in iframe, resetting to the top-level document first.
    pub async fn switch_to_addin_iframe(&self) -> PaneResult<FrameContext> {
        context::switch_to_addin_iframe(self.session, &Selector::css(&self.locators.addin_iframe))
            .await
    }

    async fn click_top_level(&self, css: &str) -> PaneResult<()> {
        let element = self.session.find_element(&Selector::css(css)).await?;
        self.session.click(&element).await
    }

    async fn probe_visibility(&self) -> PaneResult<bool> {
        self.switch_to_addin_iframe().await?;
        content::root_displayed(self.session, &self.addressing).await
    }
}

impl std::fmt::Debug for WebTaskPane<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebTaskPane")
            .field("locators", &self.locators)
            .field("load_timeout", &self.load_timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl BasePage for WebTaskPane<'_> {
    fn platform(&self) -> Platform {
        Platform::Web
    }

    async fn wait_for_plugin_loaded(&self) -> PaneResult<()> {
        self.switch_to_addin_iframe().await?;
        self.session
            .wait_for_exist(&self.addressing.root(), self.load_timeout)
            .await?;
        Ok(())
    }

    async fn open_task_pane(&self) -> PaneResult<()> {
        self.switch_to_default_content().await?;
        self.click_top_level(&self.locators.ribbon_tab).await?;
        self.click_top_level(&self.locators.addin_button).await?;
        self.switch_to_addin_iframe().await?;
        Ok(())
    }

    async fn close_task_pane(&self) -> PaneResult<()> {
        self.switch_to_default_content().await?;
        self.click_top_level(&self.locators.close_button).await
    }

    async fn is_task_pane_visible(&self) -> bool {
        visible_or_false(Platform::Web, self.probe_visibility().await)
    }
}

#[async_trait]
impl TaskPanePage for WebTaskPane<'_> {
    async fn title(&self) -> PaneResult<String> {
        self.switch_to_addin_iframe().await?;
        content::title(self.session, &self.addressing).await
    }

    async fn click_button(&self, label: &str) -> PaneResult<()> {
        self.switch_to_addin_iframe().await?;
        content::click_button(self.session, &self.addressing, label).await
    }

    async fn input_value(&self, field: &str) -> PaneResult<String> {
        self.switch_to_addin_iframe().await?;
        content::input_value(self.session, &self.addressing, field).await
    }

    async fn set_input_value(&self, field: &str, value: &str) -> PaneResult<()> {
        self.switch_to_addin_iframe().await?;
        content::set_input_value(self.session, &self.addressing, field, value).await
    }
}
