//! Session capability documents per platform.
//!
//! These are the `capabilities` a W3C / Appium server needs to start a
//! session against each host. Values come from the environment with the
//! fixed fallbacks for a stock install.

use crate::platform::Platform;
use serde_json::{json, Value};

/// Path of the Excel executable on Windows
pub const WIN_EXCEL_PATH_ENV: &str = "WIN_EXCEL_PATH";

/// Browser used for the web host
pub const BROWSER_ENV: &str = "O365_BROWSER";

/// Bundle id of the macOS host application
pub const MAC_BUNDLE_ID_ENV: &str = "MAC_EXCEL_BUNDLE_ID";

const DEFAULT_WIN_EXCEL_PATH: &str = r"C:\Program Files\Microsoft Office\root\Office16\EXCEL.EXE";
const DEFAULT_BROWSER: &str = "chrome";
const DEFAULT_MAC_BUNDLE_ID: &str = "com.microsoft.Excel";

/// Capabilities for `platform`, reading overrides from the process environment
#[must_use]
pub fn session_capabilities(platform: Platform) -> Value {
    session_capabilities_from(platform, |key| std::env::var(key).ok())
}

/// Capabilities for `platform`, reading overrides through `lookup`
#[must_use]
pub fn session_capabilities_from<F>(platform: Platform, lookup: F) -> Value
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str, default: &str| {
        lookup(key)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default.to_string())
    };
    match platform {
        Platform::Windows => json!({
            "platformName": "Windows",
            "appium:automationName": "Windows",
            "appium:app": var(WIN_EXCEL_PATH_ENV, DEFAULT_WIN_EXCEL_PATH),
            "appium:createSessionTimeout": 30000,
            "appium:newCommandTimeout": 60,
        }),
        Platform::Mac => json!({
            "platformName": "mac",
            "appium:automationName": "Mac2",
            "appium:bundleId": var(MAC_BUNDLE_ID_ENV, DEFAULT_MAC_BUNDLE_ID),
            "appium:newCommandTimeout": 60,
        }),
        Platform::Web => json!({
            "browserName": var(BROWSER_ENV, DEFAULT_BROWSER),
            "goog:chromeOptions": {
                "args": ["--start-maximized", "--disable-notifications"],
            },
        }),
    }
}
