//! `quire check` command implementation.

use clap::Args;
use quire_site::CheckReport;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Print the report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

impl CheckArgs {
    /// Cross-check navigation and content.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CheckFailed` when any problem is found, so the
    /// process exits non-zero.
    pub(crate) fn execute(self, site_args: &SiteArgs) -> Result<(), CliError> {
        let site = site_args.load_site()?;
        let output = Output::new();
        output.info(&format!("Checking {}...", site.content().dir().display()));

        let report = site.check();

        if self.json {
            output.json(&report)?;
        } else {
            print_report(&output, &report);
        }

        if report.is_clean() {
            output.success("No problems found.");
            Ok(())
        } else {
            Err(CliError::CheckFailed(report.problem_count()))
        }
    }
}

fn print_report(output: &Output, report: &CheckReport) {
    print_section(
        output,
        "Navigation paths without a document",
        &report.missing_documents,
    );
    print_section(
        output,
        "Documents missing from navigation",
        &report.unlisted_documents,
    );
    print_section(output, "Unreadable documents", &report.unreadable_documents);

    if !report.duplicate_anchors.is_empty() {
        output.highlight(&format!(
            "\nDuplicate heading anchors ({}):",
            report.duplicate_anchors.len()
        ));
        for entry in &report.duplicate_anchors {
            output.warning(&format!("  {}: {}", entry.slug, entry.ids.join(", ")));
        }
    }
}

fn print_section(output: &Output, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    output.highlight(&format!("\n{title} ({}):", items.len()));
    for item in items {
        output.warning(&format!("  {item}"));
    }
}
