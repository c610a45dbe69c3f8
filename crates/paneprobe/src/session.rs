//! AutomationSession - the capability interface consumed by page objects
//!
//! Page objects never talk to a transport directly. Everything they need
//! from a running driver connection is expressed by [`AutomationSession`]:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  TaskPanePage (Windows / Mac / Web)                              │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  AutomationSession (this trait)                                  │
//! │    find_element · wait_for_exist · click · text · value          │
//! │    clear_value · set_value · is_displayed                        │
//! │    contexts · switch_context · switch_to_frame                   │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  MockSession (tests)    │   RemoteSession (W3C / Appium, opt.)   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is owned by the test lifecycle. Page objects only borrow it,
//! and the trait deliberately has no way to close or replace it.

use crate::result::PaneResult;
use crate::selector::Selector;
use async_trait::async_trait;
use std::time::Duration;

/// Name of the native accessibility context on Appium-style drivers
pub const NATIVE_CONTEXT: &str = "NATIVE_APP";

/// Opaque reference to an element resolved by a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementHandle {
    /// Session-assigned element identifier
    pub id: String,
    /// Selector the element was resolved from
    pub selector: Selector,
}

impl ElementHandle {
    /// Create a new element handle
    #[must_use]
    pub fn new(id: impl Into<String>, selector: Selector) -> Self {
        Self {
            id: id.into(),
            selector,
        }
    }
}

/// Capability set a live automation session must provide.
///
/// Every method is a suspension point. Callers issue them strictly one
/// after another against a single session.
#[async_trait]
pub trait AutomationSession: Send + Sync {
    /// Resolve the first element matching `selector` in the current context/frame
    async fn find_element(&self, selector: &Selector) -> PaneResult<ElementHandle>;

    /// Wait until an element matching `selector` exists, bounded by `timeout`
    async fn wait_for_exist(
        &self,
        selector: &Selector,
        timeout: Duration,
    ) -> PaneResult<ElementHandle>;

    /// Whether the element is rendered and visible
    async fn is_displayed(&self, element: &ElementHandle) -> PaneResult<bool>;

    /// Click the element
    async fn click(&self, element: &ElementHandle) -> PaneResult<()>;

    /// Visible / accessible text of the element
    async fn text(&self, element: &ElementHandle) -> PaneResult<String>;

    /// Form value of the element
    async fn value(&self, element: &ElementHandle) -> PaneResult<String>;

    /// Clear the element's editable content
    async fn clear_value(&self, element: &ElementHandle) -> PaneResult<()>;

    /// Type `value` into the element
    async fn set_value(&self, element: &ElementHandle, value: &str) -> PaneResult<()>;

    /// Names of the execution contexts currently available, in driver order
    async fn contexts(&self) -> PaneResult<Vec<String>>;

    /// Switch the automation context by name
    async fn switch_context(&self, name: &str) -> PaneResult<()>;

    /// Focus a frame element, or the top-level document for `None`
    async fn switch_to_frame(&self, frame: Option<&ElementHandle>) -> PaneResult<()>;
}
