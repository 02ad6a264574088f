//! `quire pagination` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the pagination command.
#[derive(Args, Debug)]
pub(crate) struct PaginationArgs {
    /// Page path (e.g., "/docs/frontend/html/cheatsheet").
    path: String,

    /// Print the whole reading order of the path's section instead.
    #[arg(long)]
    index: bool,
}

impl PaginationArgs {
    /// Print `{previous, next}` for a page path, or its section's reading
    /// order with `--index`.
    pub(crate) fn execute(self, site_args: &SiteArgs) -> Result<(), CliError> {
        let config = site_args.load_config()?;
        let tree = config.load_navigation()?;
        let output = Output::new();

        if self.index {
            let section = tree
                .section_for(&self.path)
                .ok_or_else(|| CliError::NoSection(self.path.clone()))?;
            output.json(&section.pagination_index())
        } else {
            output.json(&tree.adjacent(&self.path))
        }
    }
}
