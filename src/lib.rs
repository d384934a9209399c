//! Scheduled health check reporting.
//!
//! Runs a set of registered health checks, aggregates their findings into
//! one report, and renders that report as log lines, Markdown, or HTML
//! for notification delivery. Check implementations, scheduling, and the
//! notification transports that consume the rendered text are
//! collaborators of this crate, not part of it.
//!
//! # Pipeline
//!
//! | Stage | Operation |
//! |-------|-----------|
//! | Collect | [`HealthCheckResults::new`]: runs every check once, contains failures |
//! | Verdict | [`HealthCheckResults::all_successful`] |
//! | Render | [`log_results`](HealthCheckResults::log_results), [`as_markdown`](HealthCheckResults::as_markdown), [`as_html`](HealthCheckResults::as_html) |
//!
//! Collection happens once, at construction; the rendering operations are
//! pure, repeatable projections of the stored state.
//!
//! # Entry Point
//!
//! ```
//! use health_report::{
//!     CheckStatus, HealthCheck, HealthCheckResults, MarkdownFlavor, Verbosity,
//! };
//!
//! struct DiskSpace;
//!
//! impl HealthCheck for DiskSpace {
//!     fn name(&self) -> &str {
//!         "Disk Space"
//!     }
//!
//!     fn status(&self) -> anyhow::Result<Vec<CheckStatus>> {
//!         Ok(vec![CheckStatus::success("Free space above threshold")])
//!     }
//! }
//!
//! let checks: [&dyn HealthCheck; 1] = [&DiskSpace];
//! let results = HealthCheckResults::new(checks);
//! assert!(results.all_successful());
//!
//! let report = results.as_markdown(Verbosity::Summary, MarkdownFlavor::Standard);
//! assert!(report.contains("Checks for 'Disk Space' all completed succesfully."));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod check;
pub mod render;
pub mod results;
pub mod status;

pub use check::HealthCheck;
pub use render::MarkdownFlavor;
pub use results::HealthCheckResults;
pub use status::{CheckStatus, Severity, Verbosity};
