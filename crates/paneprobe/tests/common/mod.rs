//! Mock hosts shared by the integration tests.
//!
//! Every fixture starts in the "add-in loaded, task pane shown" state and
//! wires the ribbon/menu controls so that open and close toggle the pane.

#![allow(dead_code)]

use paneprobe::{ClickEffect, MockElement, MockSession, Platform, Selector, NATIVE_CONTEXT};

/// Webview context exposed by the mac fixture
pub const WEBVIEW: &str = "WEBVIEW_com.microsoft.Excel";

/// Add-in iframe of the web fixture
pub const IFRAME: &str = r#"iframe[title="My Add-in"]"#;

/// Form field present on every host
pub const FIELD: &str = "email";

pub fn windows_desktop() -> MockSession {
    let container = Selector::accessibility_id("TaskPaneContainer");
    MockSession::new()
        .with_element(MockElement::new(Selector::accessibility_id("MyPluginRibbonTab")))
        .with_element(
            MockElement::new(Selector::accessibility_id("ShowTaskPaneButton"))
                .on_click(ClickEffect::Show(container.clone())),
        )
        .with_element(
            MockElement::new(Selector::accessibility_id("TaskPaneCloseButton"))
                .on_click(ClickEffect::Hide(container.clone())),
        )
        .with_element(MockElement::new(container))
        .with_element(
            MockElement::new(Selector::accessibility_id("TaskPaneTitle")).with_text("Contoso Tools"),
        )
        .with_element(MockElement::new(Selector::name("Refresh")))
        .with_element(MockElement::new(Selector::accessibility_id(FIELD)).native_input())
}

pub fn mac_desktop() -> MockSession {
    let root = Selector::css("#taskpane-root");
    MockSession::new()
        .with_contexts([NATIVE_CONTEXT, WEBVIEW])
        .with_element(
            MockElement::new(Selector::accessibility_id("com.microsoft.Excel.addin.taskpane"))
                .in_context(NATIVE_CONTEXT),
        )
        .with_element(
            MockElement::new(Selector::accessibility_id("ShowTaskPaneMenuItem"))
                .in_context(NATIVE_CONTEXT)
                .on_click(ClickEffect::Show(root.clone())),
        )
        .with_element(
            MockElement::new(Selector::accessibility_id("TaskPaneCloseButton"))
                .in_context(NATIVE_CONTEXT)
                .on_click(ClickEffect::Hide(root.clone())),
        )
        .with_element(MockElement::new(root).in_context(WEBVIEW))
        .with_element(
            MockElement::new(Selector::css("#taskpane-title"))
                .in_context(WEBVIEW)
                .with_text("Contoso Tools"),
        )
        .with_element(MockElement::new(Selector::button_text("Refresh")).in_context(WEBVIEW))
        .with_element(MockElement::new(Selector::named_input(FIELD)).in_context(WEBVIEW))
}

pub fn web_workbook() -> MockSession {
    let iframe = Selector::css(IFRAME);
    let root = Selector::css("#taskpane-root");
    MockSession::new()
        .with_element(MockElement::new(iframe.clone()))
        .with_element(MockElement::new(Selector::css(
            r#"[data-automation-id="ribbon-tab-insert"]"#,
        )))
        .with_element(
            MockElement::new(Selector::css(r#"[data-automation-id="my-addin-button"]"#))
                .on_click(ClickEffect::Show(root.clone())),
        )
        .with_element(
            MockElement::new(Selector::css(r#"[data-automation-id="taskpane-close"]"#))
                .on_click(ClickEffect::Hide(root.clone())),
        )
        .with_element(MockElement::new(root).in_frame(iframe.clone()))
        .with_element(
            MockElement::new(Selector::css("#taskpane-title"))
                .in_frame(iframe.clone())
                .with_text("Contoso Tools"),
        )
        .with_element(MockElement::new(Selector::button_text("Refresh")).in_frame(iframe.clone()))
        .with_element(MockElement::new(Selector::named_input(FIELD)).in_frame(iframe))
}

/// Loaded host for `platform`
pub fn loaded_host(platform: Platform) -> MockSession {
    match platform {
        Platform::Windows => windows_desktop(),
        Platform::Mac => mac_desktop(),
        Platform::Web => web_workbook(),
    }
}
