//! Status vocabulary: severity levels, reported findings, and notification
//! verbosity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity level of a single health check finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// The check passed.
    Success,
    /// The check identified a warning (non-blocking).
    Warning,
    /// The check failed.
    Error,
}

impl Severity {
    /// Returns true if this severity is [`Severity::Success`].
    pub fn is_success(self) -> bool {
        self == Severity::Success
    }
}

// The rendered word is an observable contract: log lines, Markdown detail
// lines, and HTML highlighting all carry it verbatim.
impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Success => "Success",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        })
    }
}

/// A single finding reported by a health check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckStatus {
    /// Human-readable message describing the finding. May embed the inline
    /// markup tags `<strong>` and `<em>`, which are converted at render
    /// time.
    pub message: String,
    /// Severity of the finding.
    pub severity: Severity,
}

impl CheckStatus {
    /// Creates a successful finding.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    /// Creates a warning finding.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// Creates an error finding.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Returns true if this finding is a success.
    pub fn is_success(&self) -> bool {
        self.severity.is_success()
    }
}

/// Controls how much detail rendered notifications include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verbosity {
    /// Omit the message of successful findings; warnings and errors always
    /// keep theirs.
    Summary,
    /// Include the message of every finding.
    Detailed,
}
