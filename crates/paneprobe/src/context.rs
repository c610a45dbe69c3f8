//! Execution context transitions.
//!
//! Two independent axes exist depending on the host:
//!
//! - **OS context** (mac): the native accessibility tree or an embedded
//!   webview whose name is only known once the driver enumerates it.
//! - **Document frame** (web): the top-level document or the add-in iframe.
//!
//! Page objects keep no record of where the session currently points. Each
//! operation calls one of the transitions below before it touches content,
//! even when the session is probably already there.

use crate::result::{PaneError, PaneResult};
use crate::selector::Selector;
use crate::session::AutomationSession;
use std::fmt;
use tracing::debug;

/// Substring identifying webview contexts (matched case-insensitively)
pub const WEBVIEW_MARKER: &str = "webview";

/// OS-level automation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsContext {
    /// Native accessibility tree
    Native,
    /// Embedded web renderer, by discovered name
    WebView(String),
}

impl fmt::Display for OsContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => f.write_str("native"),
            Self::WebView(name) => write!(f, "webview {name}"),
        }
    }
}

/// Document-level frame focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameContext {
    /// Top-level document
    TopLevel,
    /// The add-in's iframe
    AddinIframe,
}

impl fmt::Display for FrameContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopLevel => f.write_str("top-level document"),
            Self::AddinIframe => f.write_str("add-in iframe"),
        }
    }
}

/// Pick the webview context out of an enumerated context list.
///
/// First case-insensitive substring match on `marker` wins; enumeration
/// order decides between several candidates.
#[must_use]
pub fn select_webview_context<'a>(contexts: &'a [String], marker: &str) -> Option<&'a str> {
    let marker = marker.to_lowercase();
    contexts
        .iter()
        .find(|name| name.to_lowercase().contains(&marker))
        .map(String::as_str)
}

/// Switch into the first webview context, if the driver exposes one.
///
/// Returns the entered context, or `None` when no webview exists yet, in
/// which case the session is left where it was.
pub async fn switch_to_webview_context(
    session: &dyn AutomationSession,
    marker: &str,
) -> PaneResult<Option<OsContext>> {
    let contexts = session
        .contexts()
        .await
        .map_err(|err| err.into_context_switch("webview"))?;
    let Some(name) = select_webview_context(&contexts, marker) else {
        debug!(available = ?contexts, "no webview context yet, staying put");
        return Ok(None);
    };
    session
        .switch_context(name)
        .await
        .map_err(|err| err.into_context_switch(name))?;
    debug!(context = name, "switched to webview context");
    Ok(Some(OsContext::WebView(name.to_string())))
}

/// Unconditionally switch to the native context.
pub async fn switch_to_native_context(
    session: &dyn AutomationSession,
    native: &str,
) -> PaneResult<OsContext> {
    session
        .switch_context(native)
        .await
        .map_err(|err| err.into_context_switch(native))?;
    debug!(context = native, "switched to native context");
    Ok(OsContext::Native)
}

/// Focus the top-level document. Safe to call from any frame.
pub async fn switch_to_default_content(session: &dyn AutomationSession) -> PaneResult<FrameContext> {
    session
        .switch_to_frame(None)
        .await
        .map_err(|err| err.into_context_switch(FrameContext::TopLevel.to_string()))?;
    Ok(FrameContext::TopLevel)
}

/// Focus the add-in iframe, always starting from the top-level document.
///
/// A missing iframe is a [`PaneError::ContextSwitchFailure`].
pub async fn switch_to_addin_iframe(
    session: &dyn AutomationSession,
    iframe: &Selector,
) -> PaneResult<FrameContext> {
    switch_to_default_content(session).await?;
    let target = FrameContext::AddinIframe.to_string();
    let frame = session
        .find_element(iframe)
        .await
        .map_err(|err| err.into_context_switch(target.as_str()))?;
    session
        .switch_to_frame(Some(&frame))
        .await
        .map_err(|err| err.into_context_switch(target.as_str()))?;
    debug!(frame = %iframe, "switched to add-in iframe");
    Ok(FrameContext::AddinIframe)
}

/// Reject an empty context marker before any session traffic.
pub(crate) fn validate_marker(marker: &str) -> PaneResult<()> {
    if marker.trim().is_empty() {
        return Err(PaneError::configuration("webview marker must not be empty"));
    }
    Ok(())
}
