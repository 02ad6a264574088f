//! CLI command implementations.

pub(crate) mod breadcrumb;
pub(crate) mod check;
pub(crate) mod page;
pub(crate) mod pagination;
pub(crate) mod sitemap;
pub(crate) mod toc;

use std::path::PathBuf;

use clap::Args;
use quire_config::{CliSettings, Config};
use quire_site::Site;

use crate::error::CliError;

pub(crate) use breadcrumb::BreadcrumbArgs;
pub(crate) use check::CheckArgs;
pub(crate) use page::PageArgs;
pub(crate) use pagination::PaginationArgs;
pub(crate) use sitemap::SitemapArgs;
pub(crate) use toc::TocArgs;

/// Options shared by every command.
#[derive(Args, Debug, Default)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover quire.toml).
    #[arg(short, long, global = true, env = "QUIRE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Content directory (overrides config).
    #[arg(long, global = true)]
    pub content_dir: Option<PathBuf>,

    /// Navigation file (overrides config).
    #[arg(long, global = true)]
    pub navigation: Option<PathBuf>,

    /// Site base URL for sitemap entries (overrides config).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl SiteArgs {
    /// Load configuration with command-line overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            content_dir: self.content_dir.clone(),
            navigation_file: self.navigation.clone(),
            base_url: self.base_url.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Using configuration");
        }
        Ok(config)
    }

    /// Load configuration and build the site from it.
    pub(crate) fn load_site(&self) -> Result<Site, CliError> {
        let config = self.load_config()?;
        Ok(Site::from_config(&config)?)
    }
}
