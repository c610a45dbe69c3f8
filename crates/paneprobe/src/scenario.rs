//! Platform-agnostic scenarios and a sequential runner.
//!
//! Scenarios only see [`TaskPanePage`], so the same suite runs unchanged
//! against every host.

use crate::pages::{BasePage, TaskPanePage};
use crate::platform::Platform;
use crate::result::{PaneError, PaneResult};
use std::time::{Duration, Instant};
use tracing::{info, warn};
use uuid::Uuid;

/// Plugin-load scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginScenario {
    /// The add-in loads and its task pane is shown
    LoadsWithoutErrors,
    /// Closing hides the pane, opening shows it again
    OpenCloseRoundTrip,
}

impl PluginScenario {
    /// The plugin-load suite, in execution order
    pub const SUITE: [Self; 2] = [Self::LoadsWithoutErrors, Self::OpenCloseRoundTrip];

    /// Scenario name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LoadsWithoutErrors => "should load the plugin without errors",
            Self::OpenCloseRoundTrip => "should open and close the task pane",
        }
    }

    /// Run the scenario against `page`
    pub async fn run(self, page: &dyn TaskPanePage) -> PaneResult<()> {
        match self {
            Self::LoadsWithoutErrors => {
                page.wait_for_plugin_loaded().await?;
                expect_visible(page, true).await
            }
            Self::OpenCloseRoundTrip => {
                page.close_task_pane().await?;
                expect_visible(page, false).await?;
                page.open_task_pane().await?;
                expect_visible(page, true).await
            }
        }
    }
}

/// Fail unless the task pane's visibility equals `expected`
pub async fn expect_visible(page: &dyn BasePage, expected: bool) -> PaneResult<()> {
    let actual = page.is_task_pane_visible().await;
    if actual == expected {
        Ok(())
    } else {
        Err(PaneError::assertion(format!(
            "expected task pane visible == {expected} on {}, got {actual}",
            page.platform()
        )))
    }
}

/// Outcome of a single scenario
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    /// Scenario name
    pub name: String,
    /// Whether the scenario passed
    pub passed: bool,
    /// Error message if it failed
    pub error: Option<String>,
    /// Scenario duration
    pub duration: Duration,
}

impl ScenarioResult {
    /// Create a passing result
    #[must_use]
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            error: None,
            duration: Duration::ZERO,
        }
    }

    /// Create a failing result
    #[must_use]
    pub fn fail(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            error: Some(error.into()),
            duration: Duration::ZERO,
        }
    }

    /// Set duration
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Results of one suite run
#[derive(Debug, Clone)]
pub struct SuiteReport {
    /// Identifier of this run
    pub run_id: String,
    /// Platform the suite ran against
    pub platform: Platform,
    /// Individual results, in execution order
    pub results: Vec<ScenarioResult>,
    /// Total duration
    pub duration: Duration,
}

impl SuiteReport {
    /// Check if all scenarios passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Count passed scenarios
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Count failed scenarios
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.passed).count()
    }

    /// Get failed scenarios
    #[must_use]
    pub fn failures(&self) -> Vec<&ScenarioResult> {
        self.results.iter().filter(|r| !r.passed).collect()
    }
}

/// Runs scenarios one after another against a single page object
#[derive(Debug, Default)]
pub struct ScenarioRunner {
    /// Whether to stop on first failure
    pub fail_fast: bool,
}

impl ScenarioRunner {
    /// Create a new runner
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable fail-fast mode
    #[must_use]
    pub const fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Run `scenarios` in order
    pub async fn run(&self, page: &dyn TaskPanePage, scenarios: &[PluginScenario]) -> SuiteReport {
        let run_id = Uuid::new_v4().to_string();
        let start = Instant::now();
        let mut results = Vec::with_capacity(scenarios.len());

        for scenario in scenarios {
            info!(%run_id, scenario = scenario.name(), "starting");
            let started = Instant::now();
            let outcome = scenario.run(page).await;
            let elapsed = started.elapsed();
            let result = match outcome {
                Ok(()) => {
                    info!(%run_id, platform = %page.platform(), scenario = scenario.name(), "passed");
                    ScenarioResult::pass(scenario.name())
                }
                Err(err) => {
                    warn!(%run_id, platform = %page.platform(), scenario = scenario.name(), error = %err, "failed");
                    ScenarioResult::fail(scenario.name(), err.to_string())
                }
            };
            let failed = !result.passed;
            results.push(result.with_duration(elapsed));
            if failed && self.fail_fast {
                break;
            }
        }

        SuiteReport {
            run_id,
            platform: page.platform(),
            results,
            duration: start.elapsed(),
        }
    }
}
