//! Aggregated results of one scheduled health check run.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::check::HealthCheck;
use crate::render::{self, MarkdownFlavor};
use crate::status::{CheckStatus, Severity, Verbosity};

/// Aggregated outcomes of a scheduled run, keyed by check name.
///
/// Built once by [`HealthCheckResults::new`]; the rendering operations are
/// pure projections of the stored state and can be called repeatedly.
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResults {
    outcomes: IndexMap<String, Vec<CheckStatus>>,
    all_successful: bool,
}

impl HealthCheckResults {
    /// Runs every check and aggregates the findings.
    ///
    /// Checks run sequentially, in the given order, each exactly once. A
    /// check that fails is contained: the failure is logged at Error level
    /// and recorded as that check's sole finding, so construction itself
    /// never fails. A duplicate check name overwrites the earlier entry.
    pub fn new<'a, I>(checks: I) -> Self
    where
        I: IntoIterator<Item = &'a dyn HealthCheck>,
    {
        let mut outcomes: IndexMap<String, Vec<CheckStatus>> = IndexMap::new();
        for check in checks {
            let name = check.name();
            let statuses = match check.status() {
                Ok(statuses) => statuses,
                Err(err) => {
                    error!(error = %err, "Error running scheduled health check: {name}");
                    vec![CheckStatus::error(format!(
                        "Health check failed with exception: {err}. See logs for details."
                    ))]
                }
            };
            outcomes.insert(name.to_owned(), statuses);
        }

        // An outcome with no findings counts as trivially successful.
        let all_successful = outcomes
            .values()
            .all(|statuses| statuses.iter().all(CheckStatus::is_success));

        Self {
            outcomes,
            all_successful,
        }
    }

    /// Returns true when every finding across every check is a success.
    pub fn all_successful(&self) -> bool {
        self.all_successful
    }

    /// Returns the number of checks with at least one non-success finding.
    pub fn failed_check_count(&self) -> usize {
        self.outcomes
            .values()
            .filter(|statuses| !statuses.iter().all(CheckStatus::is_success))
            .count()
    }

    /// Read access to the stored outcomes, keyed by check name.
    ///
    /// Iteration order is fixed for a given construction; each check's
    /// findings keep the order the check reported them in.
    pub fn outcomes(&self) -> &IndexMap<String, Vec<CheckStatus>> {
        &self.outcomes
    }

    /// Logs the full report: a banner line, then one summary line and one
    /// line per finding for each check.
    pub fn log_results(&self) {
        info!("Scheduled health check results:");
        for (name, statuses) in &self.outcomes {
            if statuses.iter().all(CheckStatus::is_success) {
                info!("    Checks for '{name}' all completed succesfully.");
            } else {
                warn!("    Checks for '{name}' completed with errors.");
            }
            for status in statuses {
                info!(
                    "        Result: {}, Message: '{}'",
                    status.severity, status.message
                );
            }
        }
    }

    /// Renders the report as Markdown.
    ///
    /// With [`Verbosity::Summary`] the message of successful findings is
    /// omitted; warnings and errors always include theirs. The flavor
    /// selects the bullet glyph and the emphasis dialect embedded message
    /// markup is converted to.
    pub fn as_markdown(&self, verbosity: Verbosity, flavor: MarkdownFlavor) -> String {
        let bullet = flavor.bullet();
        let mut out = String::new();

        for (index, (name, statuses)) in self.outcomes.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }

            if statuses.iter().all(CheckStatus::is_success) {
                out.push_str(&format!(
                    "{bullet}Checks for '{name}' all completed succesfully.\n"
                ));
            } else {
                out.push_str(&format!(
                    "{bullet}Checks for '{name}' completed with errors.\n"
                ));
            }

            for status in statuses {
                out.push_str(&format!("\t{bullet}Result: '{}'", status.severity));

                if status.severity != Severity::Success || verbosity == Verbosity::Detailed {
                    out.push_str(&format!(
                        ", Message: '{}'",
                        render::convert_inline_markup(&status.message, flavor)
                    ));
                }

                // Two trailing newlines so the Markdown converter keeps
                // each finding on its own line.
                out.push_str("\n\n");
            }
        }

        out
    }

    /// Renders the report as HTML.
    ///
    /// Standard-flavor Markdown is converted through the Markdown
    /// renderer, then result lines are color-coded by severity.
    pub fn as_html(&self, verbosity: Verbosity) -> String {
        let markdown = self.as_markdown(verbosity, MarkdownFlavor::Standard);
        render::highlight_severities(&render::markdown_to_html(&markdown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    struct StaticCheck {
        name: &'static str,
        statuses: Vec<CheckStatus>,
    }

    impl HealthCheck for StaticCheck {
        fn name(&self) -> &str {
            self.name
        }

        fn status(&self) -> anyhow::Result<Vec<CheckStatus>> {
            Ok(self.statuses.clone())
        }
    }

    struct BrokenCheck;

    impl HealthCheck for BrokenCheck {
        fn name(&self) -> &str {
            "Backup Store"
        }

        fn status(&self) -> anyhow::Result<Vec<CheckStatus>> {
            bail!("connection refused")
        }
    }

    #[test]
    fn all_success_statuses_give_successful_verdict() {
        let disk = StaticCheck {
            name: "Disk Space",
            statuses: vec![
                CheckStatus::success("Free space above threshold"),
                CheckStatus::success("Inode usage nominal"),
            ],
        };
        let results = HealthCheckResults::new([&disk as &dyn HealthCheck]);
        assert!(results.all_successful());
        assert_eq!(results.failed_check_count(), 0);
    }

    #[test]
    fn single_warning_flips_verdict() {
        let disk = StaticCheck {
            name: "Disk Space",
            statuses: vec![CheckStatus::success("OK")],
        };
        let config = StaticCheck {
            name: "Config",
            statuses: vec![CheckStatus::warning("deprecated setting")],
        };
        let results = HealthCheckResults::new([&disk as &dyn HealthCheck, &config]);
        assert!(!results.all_successful());
        assert_eq!(results.failed_check_count(), 1);
    }

    #[test]
    fn empty_outcome_is_trivially_successful() {
        let noop = StaticCheck {
            name: "Noop",
            statuses: vec![],
        };
        let results = HealthCheckResults::new([&noop as &dyn HealthCheck]);
        assert!(results.all_successful());
    }

    #[test]
    fn failing_check_is_contained_as_single_error_finding() {
        let results = HealthCheckResults::new([&BrokenCheck as &dyn HealthCheck]);
        assert!(!results.all_successful());

        let statuses = &results.outcomes()["Backup Store"];
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].severity, Severity::Error);
        assert_eq!(
            statuses[0].message,
            "Health check failed with exception: connection refused. See logs for details."
        );
    }

    #[test]
    fn duplicate_names_overwrite() {
        let first = StaticCheck {
            name: "Disk Space",
            statuses: vec![CheckStatus::warning("old probe")],
        };
        let second = StaticCheck {
            name: "Disk Space",
            statuses: vec![CheckStatus::success("new probe")],
        };
        let results = HealthCheckResults::new([&first as &dyn HealthCheck, &second]);
        assert_eq!(results.outcomes().len(), 1);
        assert_eq!(results.outcomes()["Disk Space"][0].message, "new probe");
        assert!(results.all_successful());
    }

    #[test]
    fn one_outcome_per_check_in_insertion_order() {
        let a = StaticCheck {
            name: "Disk Space",
            statuses: vec![CheckStatus::success("OK")],
        };
        let b = StaticCheck {
            name: "Config",
            statuses: vec![CheckStatus::success("OK")],
        };
        let results = HealthCheckResults::new([&a as &dyn HealthCheck, &b]);
        let names: Vec<&str> = results.outcomes().keys().map(String::as_str).collect();
        assert_eq!(names, ["Disk Space", "Config"]);
    }

    #[test]
    fn summary_markdown_omits_success_messages() {
        let disk = StaticCheck {
            name: "Disk Space",
            statuses: vec![CheckStatus::success("OK")],
        };
        let md = HealthCheckResults::new([&disk as &dyn HealthCheck])
            .as_markdown(Verbosity::Summary, MarkdownFlavor::Standard);
        assert!(md.contains("- Checks for 'Disk Space' all completed succesfully.\n"));
        assert!(md.contains("\t- Result: 'Success'\n\n"));
        assert!(!md.contains("Message: 'OK'"));
    }

    #[test]
    fn detailed_markdown_includes_success_messages() {
        let disk = StaticCheck {
            name: "Disk Space",
            statuses: vec![CheckStatus::success("OK")],
        };
        let md = HealthCheckResults::new([&disk as &dyn HealthCheck])
            .as_markdown(Verbosity::Detailed, MarkdownFlavor::Standard);
        assert!(md.contains("\t- Result: 'Success', Message: 'OK'\n\n"));
    }

    #[test]
    fn summary_markdown_keeps_warning_messages() {
        let config = StaticCheck {
            name: "Config",
            statuses: vec![CheckStatus::warning("deprecated setting")],
        };
        let md = HealthCheckResults::new([&config as &dyn HealthCheck])
            .as_markdown(Verbosity::Summary, MarkdownFlavor::Standard);
        assert!(md.contains("- Checks for 'Config' completed with errors.\n"));
        assert!(md.contains("\t- Result: 'Warning', Message: 'deprecated setting'\n\n"));
    }

    #[test]
    fn chat_flavor_uses_bullet_glyph_throughout() {
        let disk = StaticCheck {
            name: "Disk Space",
            statuses: vec![CheckStatus::success("OK")],
        };
        let config = StaticCheck {
            name: "Config",
            statuses: vec![CheckStatus::warning("deprecated setting")],
        };
        let md = HealthCheckResults::new([&disk as &dyn HealthCheck, &config])
            .as_markdown(Verbosity::Summary, MarkdownFlavor::Chat);
        assert!(md.contains("• Checks for 'Disk Space' all completed succesfully.\n"));
        assert!(md.contains("\t• Result: 'Warning'"));
        assert!(!md.contains("- "));
    }

    #[test]
    fn blank_line_separates_checks() {
        let a = StaticCheck {
            name: "Disk Space",
            statuses: vec![CheckStatus::success("OK")],
        };
        let b = StaticCheck {
            name: "Config",
            statuses: vec![CheckStatus::success("OK")],
        };
        let md = HealthCheckResults::new([&a as &dyn HealthCheck, &b])
            .as_markdown(Verbosity::Summary, MarkdownFlavor::Standard);
        assert!(md.contains("\n\n\n- Checks for 'Config'"));
        assert!(!md.starts_with('\n'));
    }
}
