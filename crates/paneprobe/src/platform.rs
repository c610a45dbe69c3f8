//! Platform identifier and run-time platform selection.

use crate::result::{PaneError, PaneResult};
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Environment variable that selects the platform for a test run
pub const PLATFORM_ENV: &str = "TEST_PLATFORM";

/// Cold-start budget for native hosts (30 seconds)
pub const NATIVE_LOAD_TIMEOUT_MS: u64 = 30_000;

/// Load budget for the browser-hosted add-in (15 seconds)
pub const WEB_LOAD_TIMEOUT_MS: u64 = 15_000;

/// Host surface the task pane runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Native Windows desktop host (accessibility tree)
    Windows,
    /// Native macOS host (accessibility tree + embedded webview)
    Mac,
    /// Browser-hosted spreadsheet (DOM + add-in iframe)
    Web,
}

impl Platform {
    /// All supported platforms
    pub const ALL: [Self; 3] = [Self::Windows, Self::Mac, Self::Web];

    /// Textual identifier (`windows`, `mac`, `web`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Mac => "mac",
            Self::Web => "web",
        }
    }

    /// Whether the host is a native desktop application
    #[must_use]
    pub const fn is_native(self) -> bool {
        matches!(self, Self::Windows | Self::Mac)
    }

    /// Default time allowed for the add-in to come up
    #[must_use]
    pub const fn default_load_timeout(self) -> Duration {
        if self.is_native() {
            Duration::from_millis(NATIVE_LOAD_TIMEOUT_MS)
        } else {
            Duration::from_millis(WEB_LOAD_TIMEOUT_MS)
        }
    }

    /// Resolve the platform from [`PLATFORM_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`PaneError::Configuration`] if the variable is unset or not
    /// one of `windows`, `mac`, `web`.
    pub fn from_env() -> PaneResult<Self> {
        Self::from_env_var(std::env::var(PLATFORM_ENV))
    }

    /// Resolve the platform from the raw result of reading [`PLATFORM_ENV`].
    ///
    /// A value that is set but not valid UTF-8 is reported as invalid, not
    /// as missing.
    pub fn from_env_var(var: Result<String, VarError>) -> PaneResult<Self> {
        match var {
            Ok(value) => Self::from_env_value(Some(&value)),
            Err(VarError::NotPresent) => Self::from_env_value(None),
            Err(VarError::NotUnicode(raw)) => Err(PaneError::configuration(format!(
                "Invalid {PLATFORM_ENV} {raw:?}: not valid UTF-8. Must be one of: windows, mac, web"
            ))),
        }
    }

    /// Resolve the platform from an already-read environment value.
    ///
    /// # Errors
    ///
    /// Returns [`PaneError::Configuration`] for `None` or any unknown value.
    pub fn from_env_value(value: Option<&str>) -> PaneResult<Self> {
        match value {
            Some(raw) => raw.parse(),
            None => Err(PaneError::configuration(format!(
                "{PLATFORM_ENV} is not set. Must be one of: windows, mac, web"
            ))),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = PaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "windows" => Ok(Self::Windows),
            "mac" => Ok(Self::Mac),
            "web" => Ok(Self::Web),
            other => Err(PaneError::configuration(format!(
                "Invalid {PLATFORM_ENV} \"{other}\". Must be one of: windows, mac, web"
            ))),
        }
    }
}
