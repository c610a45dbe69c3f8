//! W3C WebDriver / Appium HTTP session.
//!
//! Speaks the JSON wire format directly over `reqwest`. Contexts use the
//! Appium `/contexts` and `/context` extensions, everything else is plain
//! W3C WebDriver, so the same session type drives WinAppDriver, Mac2 and
//! browser drivers.

use crate::result::{PaneError, PaneResult};
use crate::selector::Selector;
use crate::session::{AutomationSession, ElementHandle};
use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// Key under which W3C drivers return element references
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Polling interval used by [`RemoteSession::wait_for_exist`]
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Error payload of a failed WebDriver command
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireError {
    /// W3C error code, e.g. `no such element`
    pub error: String,
    /// Driver-supplied message
    #[serde(default)]
    pub message: String,
}

impl WireError {
    /// Parse the `{"value": {"error", "message"}}` envelope of a failed response
    #[must_use]
    pub fn from_body(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct Envelope {
            value: WireError,
        }
        serde_json::from_str::<Envelope>(body).map_or_else(
            |_| Self {
                error: "unknown error".to_string(),
                message: format!("HTTP {status}: {body}"),
            },
            |envelope| envelope.value,
        )
    }

    /// Map to a [`PaneError`]; `subject` names the selector, context or frame involved
    #[must_use]
    pub fn into_pane_error(self, subject: &str) -> PaneError {
        match self.error.as_str() {
            "no such element" | "stale element reference" => PaneError::element_not_found(subject),
            "no such frame" | "no such context" | "no such window" => {
                PaneError::context_switch(subject, self.message)
            }
            "timeout" | "script timeout" => PaneError::DriverTimeout {
                subject: subject.to_string(),
                message: self.message,
            },
            _ => PaneError::session(format!("{}: {}", self.error, self.message)),
        }
    }
}

/// Extract the element id from a W3C (or legacy JSONWP) element reference
#[must_use]
pub fn element_id(reference: &Value) -> Option<&str> {
    reference
        .get(ELEMENT_KEY)
        .or_else(|| reference.get("ELEMENT"))
        .and_then(Value::as_str)
}

/// Request body for `POST /frame`
#[must_use]
pub fn frame_body(frame: Option<&ElementHandle>) -> Value {
    match frame {
        Some(element) => json!({ "id": { ELEMENT_KEY: element.id } }),
        None => json!({ "id": null }),
    }
}

/// Live session against a remote WebDriver or Appium server
#[derive(Debug)]
pub struct RemoteSession {
    base_url: String,
    session_id: String,
    client: reqwest::Client,
}

impl RemoteSession {
    /// Create a session on `server_url` with `capabilities` as `alwaysMatch`
    pub async fn start(server_url: impl Into<String>, capabilities: Value) -> PaneResult<Self> {
        Self::start_with_client(server_url, capabilities, reqwest::Client::new()).await
    }

    /// Same as [`RemoteSession::start`] with a caller-configured client
    pub async fn start_with_client(
        server_url: impl Into<String>,
        capabilities: Value,
        client: reqwest::Client,
    ) -> PaneResult<Self> {
        let base_url = server_url.into().trim_end_matches('/').to_string();
        let body = json!({ "capabilities": { "alwaysMatch": capabilities } });
        let url = format!("{base_url}/session");
        let value = send(&client, Method::POST, &url, Some(body), "session").await?;
        let session_id = value
            .get("sessionId")
            .and_then(Value::as_str)
            .ok_or_else(|| PaneError::session("new session response carried no sessionId"))?
            .to_string();
        debug!(%session_id, "remote session started");
        Ok(Self {
            base_url,
            session_id,
            client,
        })
    }

    /// Session identifier assigned by the server
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Delete the session on the server
    pub async fn end(self) -> PaneResult<()> {
        self.command(Method::DELETE, "", None, "session").await?;
        debug!(session_id = %self.session_id, "remote session ended");
        Ok(())
    }

    async fn command(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        subject: &str,
    ) -> PaneResult<Value> {
        let url = format!("{}/session/{}{path}", self.base_url, self.session_id);
        send(&self.client, method, &url, body, subject).await
    }

    async fn element_command(
        &self,
        method: Method,
        element: &ElementHandle,
        endpoint: &str,
        body: Option<Value>,
    ) -> PaneResult<Value> {
        let path = format!("/element/{}/{endpoint}", element.id);
        self.command(method, &path, body, &element.selector.to_string())
            .await
    }
}

async fn send(
    client: &reqwest::Client,
    method: Method,
    url: &str,
    body: Option<Value>,
    subject: &str,
) -> PaneResult<Value> {
    let request = client.request(method, url);
    // W3C requires a JSON body on every POST, even an empty one
    let request = match body {
        Some(body) => request.json(&body),
        None => request,
    };
    let resp = request.send().await?;

    let status = resp.status();
    if !status.is_success() {
        let body = match resp.text().await {
            Ok(body) => body,
            Err(err) => format!("<unreadable body: {err}>"),
        };
        return Err(WireError::from_body(status.as_u16(), &body).into_pane_error(subject));
    }

    let mut payload: Value = resp.json().await?;
    Ok(payload.get_mut("value").map(Value::take).unwrap_or(Value::Null))
}

fn as_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[async_trait]
impl AutomationSession for RemoteSession {
    async fn find_element(&self, selector: &Selector) -> PaneResult<ElementHandle> {
        let (using, value) = selector.to_strategy();
        let body = json!({ "using": using, "value": value });
        let reference = self
            .command(Method::POST, "/element", Some(body), &selector.to_string())
            .await?;
        let id = element_id(&reference)
            .ok_or_else(|| PaneError::session(format!("malformed element reference: {reference}")))?;
        Ok(ElementHandle::new(id, selector.clone()))
    }

    async fn wait_for_exist(
        &self,
        selector: &Selector,
        timeout: Duration,
    ) -> PaneResult<ElementHandle> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            match self.find_element(selector).await {
                Err(PaneError::ElementNotFound { .. }) if tokio::time::Instant::now() < deadline => {
                    tokio::time::sleep(POLL_INTERVAL).await;
                }
                Err(PaneError::ElementNotFound { .. }) => {
                    return Err(PaneError::Timeout {
                        selector: selector.to_string(),
                        ms: timeout.as_millis() as u64,
                    });
                }
                other => return other,
            }
        }
    }

    async fn is_displayed(&self, element: &ElementHandle) -> PaneResult<bool> {
        let value = self
            .element_command(Method::GET, element, "displayed", None)
            .await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    async fn click(&self, element: &ElementHandle) -> PaneResult<()> {
        self.element_command(Method::POST, element, "click", Some(json!({})))
            .await?;
        Ok(())
    }

    async fn text(&self, element: &ElementHandle) -> PaneResult<String> {
        self.element_command(Method::GET, element, "text", None)
            .await
            .map(as_string)
    }

    async fn value(&self, element: &ElementHandle) -> PaneResult<String> {
        self.element_command(Method::GET, element, "property/value", None)
            .await
            .map(as_string)
    }

    async fn clear_value(&self, element: &ElementHandle) -> PaneResult<()> {
        self.element_command(Method::POST, element, "clear", Some(json!({})))
            .await?;
        Ok(())
    }

    async fn set_value(&self, element: &ElementHandle, value: &str) -> PaneResult<()> {
        self.element_command(Method::POST, element, "value", Some(json!({ "text": value })))
            .await?;
        Ok(())
    }

    async fn contexts(&self) -> PaneResult<Vec<String>> {
        let value = self.command(Method::GET, "/contexts", None, "contexts").await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn switch_context(&self, name: &str) -> PaneResult<()> {
        self.command(Method::POST, "/context", Some(json!({ "name": name })), name)
            .await?;
        Ok(())
    }

    async fn switch_to_frame(&self, frame: Option<&ElementHandle>) -> PaneResult<()> {
        let target = frame.map_or_else(
            || "top-level document".to_string(),
            |element| element.selector.to_string(),
        );
        self.command(Method::POST, "/frame", Some(frame_body(frame)), &target)
            .await?;
        Ok(())
    }
}
