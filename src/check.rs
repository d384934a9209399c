//! The health check capability consumed by the aggregator.

use anyhow::Result;

use crate::status::CheckStatus;

/// A named diagnostic unit producing zero or more status entries.
///
/// Implementations are supplied by the scheduling layer; any value with a
/// name and a status-producing operation qualifies, which keeps test
/// doubles trivial.
pub trait HealthCheck {
    /// Stable, human-readable identity of the check.
    ///
    /// Keys the aggregated results, so it must be unique across a
    /// scheduled run; a duplicate name silently overwrites the earlier
    /// check's outcome.
    fn name(&self) -> &str;

    /// Runs the check and returns its findings, in reporting order.
    ///
    /// An empty list counts as a success.
    ///
    /// # Errors
    ///
    /// Implementations may fail for any reason. The aggregator contains
    /// the failure: it is logged and surfaced as a single `Error`-severity
    /// finding whose message carries the error's display description.
    fn status(&self) -> Result<Vec<CheckStatus>>;
}
