//! `quire sitemap` command implementation.

use std::path::PathBuf;

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sitemap command.
#[derive(Args, Debug)]
pub(crate) struct SitemapArgs {
    /// Write the sitemap to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SitemapArgs {
    /// Render the XML sitemap of every navigation path.
    pub(crate) fn execute(self, site_args: &SiteArgs) -> Result<(), CliError> {
        let site = site_args.load_site()?;
        let xml = site.sitemap()?;
        let output = Output::new();

        match self.output {
            Some(path) => {
                std::fs::write(&path, xml)?;
                output.success(&format!(
                    "Wrote {} pages to {}",
                    site.navigation().paths().len(),
                    path.display()
                ));
                Ok(())
            }
            None => output.raw(&xml),
        }
    }
}
