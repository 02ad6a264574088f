//! `quire breadcrumb` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the breadcrumb command.
#[derive(Args, Debug)]
pub(crate) struct BreadcrumbArgs {
    /// Page path (e.g., "/docs/frontend/html/cheatsheet").
    path: String,
}

impl BreadcrumbArgs {
    /// Print the breadcrumb trail of a page path as a JSON array.
    ///
    /// Unknown paths print an empty array.
    pub(crate) fn execute(self, site_args: &SiteArgs) -> Result<(), CliError> {
        let config = site_args.load_config()?;
        let tree = config.load_navigation()?;
        let trail = tree.breadcrumb(&self.path);
        if trail.is_empty() {
            tracing::info!(path = %self.path, "Path is not in navigation");
        }
        Output::new().json(&trail)
    }
}
