//! Platform selector: resolves a platform to its task pane page object.
//!
//! Each branch constructs only its own implementation, and each
//! implementation is compiled only with its cargo feature, so a build for a
//! single host carries none of the other hosts' code.

use crate::config::PaneConfig;
use crate::pages::TaskPanePage;
use crate::platform::Platform;
use crate::result::{PaneError, PaneResult};
use crate::session::AutomationSession;
use tracing::debug;

/// Boxed page object borrowing a session for `'s`
pub type BoxedTaskPane<'s> = Box<dyn TaskPanePage + 's>;

/// Page object for `platform` with the default configuration
pub fn create_task_pane_page(
    session: &dyn AutomationSession,
    platform: Platform,
) -> PaneResult<BoxedTaskPane<'_>> {
    create_task_pane_page_with(session, platform, &PaneConfig::default())
}

/// Page object for a textual platform name (`windows`, `mac`, `web`).
///
/// An unknown name fails before the session is touched.
pub fn create_task_pane_page_named<'s>(
    session: &'s dyn AutomationSession,
    name: &str,
) -> PaneResult<BoxedTaskPane<'s>> {
    let platform: Platform = name.parse()?;
    create_task_pane_page(session, platform)
}

/// Page object for `platform` using `config`.
///
/// The configuration is validated before the session is touched.
pub fn create_task_pane_page_with<'s>(
    session: &'s dyn AutomationSession,
    platform: Platform,
    config: &PaneConfig,
) -> PaneResult<BoxedTaskPane<'s>> {
    config.validate()?;
    debug!(%platform, "creating task pane page object");
    match platform {
        Platform::Windows => windows_page(session, config),
        Platform::Mac => mac_page(session, config),
        Platform::Web => web_page(session, config),
    }
}

#[cfg(feature = "windows")]
fn windows_page<'s>(
    session: &'s dyn AutomationSession,
    config: &PaneConfig,
) -> PaneResult<BoxedTaskPane<'s>> {
    Ok(Box::new(crate::pages::windows::WindowsTaskPane::with_config(
        session, config,
    )))
}

#[cfg(not(feature = "windows"))]
fn windows_page<'s>(
    _session: &'s dyn AutomationSession,
    _config: &PaneConfig,
) -> PaneResult<BoxedTaskPane<'s>> {
    Err(not_compiled(Platform::Windows))
}

#[cfg(feature = "mac")]
fn mac_page<'s>(
    session: &'s dyn AutomationSession,
    config: &PaneConfig,
) -> PaneResult<BoxedTaskPane<'s>> {
    Ok(Box::new(crate::pages::mac::MacTaskPane::with_config(
        session, config,
    )))
}

#[cfg(not(feature = "mac"))]
fn mac_page<'s>(
    _session: &'s dyn AutomationSession,
    _config: &PaneConfig,
) -> PaneResult<BoxedTaskPane<'s>> {
    Err(not_compiled(Platform::Mac))
}

#[cfg(feature = "web")]
fn web_page<'s>(
    session: &'s dyn AutomationSession,
    config: &PaneConfig,
) -> PaneResult<BoxedTaskPane<'s>> {
    Ok(Box::new(crate::pages::web::WebTaskPane::with_config(
        session, config,
    )))
}

#[cfg(not(feature = "web"))]
fn web_page<'s>(
    _session: &'s dyn AutomationSession,
    _config: &PaneConfig,
) -> PaneResult<BoxedTaskPane<'s>> {
    Err(not_compiled(Platform::Web))
}

#[cfg(any(not(feature = "windows"), not(feature = "mac"), not(feature = "web")))]
fn not_compiled(platform: Platform) -> PaneError {
    PaneError::configuration(format!(
        "support for platform \"{platform}\" is not compiled in (enable the `{platform}` feature)"
    ))
}

#[cfg(all(test, feature = "windows", feature = "mac", feature = "web"))]
mod tests {
    use super::*;
    use crate::mock::MockSession;
    use crate::pages::BasePage;

    #[test]
    fn test_each_platform_resolves() {
        let session = MockSession::new();
        for platform in Platform::ALL {
            let page = create_task_pane_page(&session, platform).unwrap();
            assert_eq!(page.platform(), platform);
        }
    }

    #[test]
    fn test_named_resolution() {
        let session = MockSession::new();
        for name in ["windows", "mac", "web"] {
            let page = create_task_pane_page_named(&session, name).unwrap();
            assert_eq!(page.platform().as_str(), name);
        }
    }

    #[test]
    fn test_unknown_name_fails_before_session_use() {
        let session = MockSession::new();
        for name in ["linux", "", "WEB"] {
            let err = create_task_pane_page_named(&session, name).err().unwrap();
            assert!(err.is_configuration());
        }
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_construction_does_not_touch_session() {
        let session = MockSession::new();
        let _page = create_task_pane_page(&session, Platform::Mac).unwrap();
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_invalid_config_fails_before_session_use() {
        let session = MockSession::new().with_contexts(["NATIVE_APP", "WEBVIEW_42"]);

        let mut blank_marker = PaneConfig::new();
        blank_marker.mac.webview_marker = String::new();
        let mut blank_locator = PaneConfig::new();
        blank_locator.web.addin_iframe = "  ".to_string();
        let zero_timeout = PaneConfig::new().with_load_timeout_ms(0);

        for config in [blank_marker, blank_locator, zero_timeout] {
            for platform in Platform::ALL {
                let err = create_task_pane_page_with(&session, platform, &config)
                    .err()
                    .unwrap();
                assert!(err.is_configuration(), "{platform}: {err}");
            }
        }
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_config_flows_into_page() {
        let session = MockSession::new();
        let config = PaneConfig::new().with_load_timeout_ms(1234);
        let page = create_task_pane_page_with(&session, Platform::Windows, &config).unwrap();
        assert!(page.wait_for_plugin_loaded().await.is_err());
        assert!(session.was_called("wait_for_exist:~MyPluginRibbonTab:1234"));
    }
}
