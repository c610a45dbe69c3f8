//! Locator and timeout configuration
//!
//! Defaults reproduce the identifiers the add-in ships with. A YAML file can
//! override any subset of them per platform:
//!
//! ```yaml
//! load_timeout_ms: 45000
//! windows:
//!   ribbon_tab: ContosoRibbonTab
//! web:
//!   addin_iframe: 'iframe[title="Contoso"]'
//! ```

use crate::context::{validate_marker, WEBVIEW_MARKER};
use crate::platform::Platform;
use crate::result::{PaneError, PaneResult};
use crate::session::NATIVE_CONTEXT;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// CSS selector of the task pane root inside web content
pub const TASKPANE_ROOT: &str = "#taskpane-root";

/// CSS selector of the task pane title inside web content
pub const TASKPANE_TITLE: &str = "#taskpane-title";

/// Accessibility ids used on the Windows desktop host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowsLocators {
    /// Ribbon tab whose presence signals the add-in has loaded
    pub ribbon_tab: String,
    /// Ribbon button that shows the task pane
    pub show_button: String,
    /// Close button of the task pane
    pub close_button: String,
    /// Task pane container
    pub container: String,
    /// Task pane title
    pub title: String,
}

impl Default for WindowsLocators {
    fn default() -> Self {
        Self {
            ribbon_tab: "MyPluginRibbonTab".to_string(),
            show_button: "ShowTaskPaneButton".to_string(),
            close_button: "TaskPaneCloseButton".to_string(),
            container: "TaskPaneContainer".to_string(),
            title: "TaskPaneTitle".to_string(),
        }
    }
}

/// Native ids and web selectors used on the macOS desktop host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacLocators {
    /// Native marker whose presence signals the add-in has loaded
    pub addin_marker: String,
    /// Menu item that shows the task pane
    pub show_menu_item: String,
    /// Native close button of the task pane
    pub close_button: String,
    /// Name of the native context
    pub native_context: String,
    /// Substring identifying the webview context
    pub webview_marker: String,
    /// Task pane root inside the webview
    pub root: String,
    /// Task pane title inside the webview
    pub title: String,
}

impl Default for MacLocators {
    fn default() -> Self {
        Self {
            addin_marker: "com.microsoft.Excel.addin.taskpane".to_string(),
            show_menu_item: "ShowTaskPaneMenuItem".to_string(),
            close_button: "TaskPaneCloseButton".to_string(),
            native_context: NATIVE_CONTEXT.to_string(),
            webview_marker: WEBVIEW_MARKER.to_string(),
            root: TASKPANE_ROOT.to_string(),
            title: TASKPANE_TITLE.to_string(),
        }
    }
}

/// DOM selectors used on the browser host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebLocators {
    /// The add-in iframe, located from the top-level document
    pub addin_iframe: String,
    /// Ribbon tab that reveals the add-in launcher
    pub ribbon_tab: String,
    /// Add-in launch control on that tab
    pub addin_button: String,
    /// Close control of the task pane (top-level document)
    pub close_button: String,
    /// Task pane root inside the iframe
    pub root: String,
    /// Task pane title inside the iframe
    pub title: String,
}

impl Default for WebLocators {
    fn default() -> Self {
        Self {
            addin_iframe: r#"iframe[title="My Add-in"]"#.to_string(),
            ribbon_tab: r#"[data-automation-id="ribbon-tab-insert"]"#.to_string(),
            addin_button: r#"[data-automation-id="my-addin-button"]"#.to_string(),
            close_button: r#"[data-automation-id="taskpane-close"]"#.to_string(),
            root: TASKPANE_ROOT.to_string(),
            title: TASKPANE_TITLE.to_string(),
        }
    }
}

/// Configuration shared by every page object of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneConfig {
    /// Overrides the platform's plugin-load timeout
    pub load_timeout_ms: Option<u64>,
    /// Windows locators
    pub windows: WindowsLocators,
    /// macOS locators
    pub mac: MacLocators,
    /// Web locators
    pub web: WebLocators,
}

impl PaneConfig {
    /// Create a config with the built-in defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the plugin-load timeout for every platform
    #[must_use]
    pub const fn with_load_timeout_ms(mut self, ms: u64) -> Self {
        self.load_timeout_ms = Some(ms);
        self
    }

    /// Plugin-load timeout for `platform`
    #[must_use]
    pub fn load_timeout(&self, platform: Platform) -> Duration {
        self.load_timeout_ms
            .map_or_else(|| platform.default_load_timeout(), Duration::from_millis)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> PaneResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> PaneResult<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|err| {
            PaneError::configuration(format!("cannot read {}: {err}", path.display()))
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Check that no locator is blank and the timeout is usable
    pub fn validate(&self) -> PaneResult<()> {
        if self.load_timeout_ms == Some(0) {
            return Err(PaneError::configuration("load_timeout_ms must be positive"));
        }
        let w = &self.windows;
        let m = &self.mac;
        let web = &self.web;
        let fields = [
            ("windows.ribbon_tab", &w.ribbon_tab),
            ("windows.show_button", &w.show_button),
            ("windows.close_button", &w.close_button),
            ("windows.container", &w.container),
            ("windows.title", &w.title),
            ("mac.addin_marker", &m.addin_marker),
            ("mac.show_menu_item", &m.show_menu_item),
            ("mac.close_button", &m.close_button),
            ("mac.native_context", &m.native_context),
            ("mac.root", &m.root),
            ("mac.title", &m.title),
            ("web.addin_iframe", &web.addin_iframe),
            ("web.ribbon_tab", &web.ribbon_tab),
            ("web.addin_button", &web.addin_button),
            ("web.close_button", &web.close_button),
            ("web.root", &web.root),
            ("web.title", &web.title),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(PaneError::configuration(format!("{name} must not be empty")));
        }
        validate_marker(&m.webview_marker)
    }
}
