//! Plugin-load suite run through the factory on every host.

#![cfg(all(feature = "windows", feature = "mac", feature = "web"))]

mod common;

use common::{loaded_host, FIELD};
use paneprobe::prelude::*;
use paneprobe::{logging, MockSession, SuiteReport};

async fn run_suite(session: &MockSession, name: &str) -> SuiteReport {
    let page = create_task_pane_page_named(session, name).unwrap();
    ScenarioRunner::new()
        .run(page.as_ref(), &PluginScenario::SUITE)
        .await
}

#[tokio::test]
async fn test_suite_passes_on_every_platform() {
    logging::try_init_test_logging();
    for platform in Platform::ALL {
        let session = loaded_host(platform);
        let report = run_suite(&session, platform.as_str()).await;
        assert!(
            report.all_passed(),
            "{platform}: {:?}",
            report.failures()
        );
        assert_eq!(report.passed_count(), 2);
        assert_eq!(report.platform, platform);
        assert!(!report.run_id.is_empty());
    }
}

#[tokio::test]
async fn test_platform_from_environment_value() {
    let platform = Platform::from_env_value(Some("mac")).unwrap();
    let session = loaded_host(platform);
    let page = create_task_pane_page(&session, platform).unwrap();
    page.wait_for_plugin_loaded().await.unwrap();
    assert!(session.was_called("wait_for_exist:~com.microsoft.Excel.addin.taskpane:30000"));
}

#[tokio::test]
async fn test_empty_host_fails_first_scenario() {
    for platform in Platform::ALL {
        let session = MockSession::new();
        let page = create_task_pane_page_with(
            &session,
            platform,
            &PaneConfig::new().with_load_timeout_ms(10),
        )
        .unwrap();
        let report = ScenarioRunner::new()
            .with_fail_fast()
            .run(page.as_ref(), &PluginScenario::SUITE)
            .await;
        assert_eq!(report.results.len(), 1, "{platform}");
        assert_eq!(report.failed_count(), 1, "{platform}");
    }
}

#[tokio::test]
async fn test_scenarios_observe_close_then_open() {
    for platform in Platform::ALL {
        let session = loaded_host(platform);
        let page = create_task_pane_page(&session, platform).unwrap();
        PluginScenario::OpenCloseRoundTrip
            .run(page.as_ref())
            .await
            .unwrap();
        assert!(page.is_task_pane_visible().await, "{platform}");
    }
}

#[tokio::test]
async fn test_content_operations_on_every_platform() {
    for platform in Platform::ALL {
        let session = loaded_host(platform);
        let page = create_task_pane_page(&session, platform).unwrap();

        assert_eq!(page.title().await.unwrap(), "Contoso Tools", "{platform}");
        page.click_button("Refresh").await.unwrap();
        page.set_input_value(FIELD, "ops@contoso.com").await.unwrap();
        assert_eq!(
            page.input_value(FIELD).await.unwrap(),
            "ops@contoso.com",
            "{platform}"
        );
    }
}

#[tokio::test]
async fn test_yaml_config_overrides_locators() {
    let yaml = r#"
load_timeout_ms: 500
web:
  addin_iframe: 'iframe[title="Contoso"]'
"#;
    let config = PaneConfig::from_yaml_str(yaml).unwrap();
    let session = MockSession::new();
    let page = create_task_pane_page_with(&session, Platform::Web, &config).unwrap();

    let err = page.wait_for_plugin_loaded().await.unwrap_err();
    assert!(matches!(err, PaneError::ContextSwitchFailure { .. }));
    assert!(session.was_called(r#"find_element:iframe[title="Contoso"]"#));
}
