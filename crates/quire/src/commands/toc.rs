//! `quire toc` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the toc command.
#[derive(Args, Debug)]
pub(crate) struct TocArgs {
    /// Document slug (e.g., "frontend/html/cheatsheet").
    slug: String,
}

impl TocArgs {
    /// Print the nested outline of a document as JSON.
    pub(crate) fn execute(self, site_args: &SiteArgs) -> Result<(), CliError> {
        let site = site_args.load_site()?;
        let outline = site.outline(&self.slug)?;
        Output::new().json(&outline)
    }
}
