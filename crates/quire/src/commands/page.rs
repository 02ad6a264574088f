//! `quire page` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the page command.
#[derive(Args, Debug)]
pub(crate) struct PageArgs {
    /// Document slug (e.g., "frontend/html/cheatsheet").
    slug: String,
}

impl PageArgs {
    /// Print the page context (path, breadcrumb, outline, pagination) as JSON.
    pub(crate) fn execute(self, site_args: &SiteArgs) -> Result<(), CliError> {
        let site = site_args.load_site()?;
        let page = site.page(&self.slug)?;
        Output::new().json(&page)
    }
}
