//! Result and error types for paneprobe.

use thiserror::Error;

/// Result type for paneprobe operations
pub type PaneResult<T> = Result<T, PaneError>;

/// Errors that can occur while driving a task pane
#[derive(Debug, Error)]
pub enum PaneError {
    /// Invalid or missing platform selection, or unusable configuration
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// No element matched the selector
    #[error("Element not found: {selector}")]
    ElementNotFound {
        /// Selector that failed to match
        selector: String,
    },

    /// Element did not appear within the allotted time
    #[error("Timed out after {ms}ms waiting for {selector}")]
    Timeout {
        /// Selector that was awaited
        selector: String,
        /// Timeout in milliseconds
        ms: u64,
    },

    /// The driver gave up on a command under its own timeout
    #[error("Driver timed out on {subject}: {message}")]
    DriverTimeout {
        /// Selector, context or frame the command targeted
        subject: String,
        /// Driver-supplied message
        message: String,
    },

    /// The required automation context or document frame could not be entered
    #[error("Could not switch to {target}: {message}")]
    ContextSwitchFailure {
        /// Context or frame that was targeted
        target: String,
        /// Error message
        message: String,
    },

    /// The automation session rejected a command
    #[error("Session error: {message}")]
    Session {
        /// Error message
        message: String,
    },

    /// A scenario expectation did not hold
    #[error("Assertion failed: {message}")]
    AssertionFailed {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// HTTP transport error
    #[cfg(feature = "remote")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl PaneError {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an element-not-found error
    #[must_use]
    pub fn element_not_found(selector: impl ToString) -> Self {
        Self::ElementNotFound {
            selector: selector.to_string(),
        }
    }

    /// Create a context switch failure
    #[must_use]
    pub fn context_switch(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ContextSwitchFailure {
            target: target.into(),
            message: message.into(),
        }
    }

    /// Create a session error
    #[must_use]
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session {
            message: message.into(),
        }
    }

    /// Create an assertion failure
    #[must_use]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            message: message.into(),
        }
    }

    /// Re-tag any failure raised while entering `target` as a context switch failure.
    ///
    /// Errors that already are context switch failures pass through unchanged.
    #[must_use]
    pub fn into_context_switch(self, target: impl Into<String>) -> Self {
        match self {
            err @ Self::ContextSwitchFailure { .. } => err,
            other => Self::context_switch(target, other.to_string()),
        }
    }

    /// Whether this error is a configuration failure
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
