//! Paneprobe: Cross-Platform Page Objects for Spreadsheet Add-in Task Panes
//!
//! One test suite, three hosts. Scenarios are written against
//! [`TaskPanePage`]; the factory hands back the Windows, macOS or browser
//! implementation selected by `TEST_PLATFORM`, and each implementation
//! hides its host's context juggling.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PANEPROBE Architecture                        │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────────────┐    │
//! │   │ Scenario   │    │ TaskPane   │    │ AutomationSession  │    │
//! │   │ Runner     │───►│ Page       │───►│ (Mock / Remote)    │    │
//! │   │            │    │ win/mac/web│    │                    │    │
//! │   └────────────┘    └────────────┘    └────────────────────┘    │
//! │          ▲                 ▲                                     │
//! │          │          ┌────────────┐                               │
//! │   TEST_PLATFORM ───►│  Factory   │                               │
//! │                     └────────────┘                               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use paneprobe::{create_task_pane_page, MockSession, Platform, PluginScenario, ScenarioRunner};
//!
//! # async fn run() -> paneprobe::PaneResult<()> {
//! let session = MockSession::new();
//! let page = create_task_pane_page(&session, Platform::from_env()?)?;
//! let report = ScenarioRunner::new()
//!     .run(page.as_ref(), &PluginScenario::SUITE)
//!     .await;
//! assert!(report.all_passed());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod factory;
mod platform;
mod result;
mod selector;
mod session;

/// Session capability documents per platform
pub mod capabilities;

/// Locator tables and YAML configuration
pub mod config;

/// OS-context and document-frame transitions
pub mod context;

/// Tracing subscriber setup
pub mod logging;

/// In-memory automation session for tests
pub mod mock;

/// Page-object contracts and per-platform implementations
pub mod pages;

/// W3C WebDriver / Appium transport
#[cfg(feature = "remote")]
pub mod remote;

/// Plugin-load scenarios and the sequential runner
pub mod scenario;

pub use config::{MacLocators, PaneConfig, WebLocators, WindowsLocators};
pub use context::{FrameContext, OsContext};
pub use factory::{
    create_task_pane_page, create_task_pane_page_named, create_task_pane_page_with, BoxedTaskPane,
};
pub use mock::{ClickEffect, MockElement, MockSession};
#[cfg(feature = "mac")]
pub use pages::mac::MacTaskPane;
#[cfg(feature = "web")]
pub use pages::web::WebTaskPane;
#[cfg(feature = "windows")]
pub use pages::windows::WindowsTaskPane;
pub use pages::{BasePage, TaskPanePage};
pub use platform::{Platform, NATIVE_LOAD_TIMEOUT_MS, PLATFORM_ENV, WEB_LOAD_TIMEOUT_MS};
#[cfg(feature = "remote")]
pub use remote::RemoteSession;
pub use result::{PaneError, PaneResult};
pub use scenario::{PluginScenario, ScenarioResult, ScenarioRunner, SuiteReport};
pub use selector::Selector;
pub use session::{AutomationSession, ElementHandle, NATIVE_CONTEXT};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::{
        create_task_pane_page, create_task_pane_page_named, create_task_pane_page_with,
        AutomationSession, BasePage, PaneConfig, PaneError, PaneResult, Platform, PluginScenario,
        ScenarioRunner, Selector, TaskPanePage,
    };
}
