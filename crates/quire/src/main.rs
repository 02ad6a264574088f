//! Quire CLI - documentation site navigation.
//!
//! Provides commands for:
//! - `toc`: Print the outline of a document
//! - `breadcrumb`: Print the breadcrumb trail of a page path
//! - `pagination`: Print the previous and next pages of a page path
//! - `page`: Print the full page context of a document
//! - `sitemap`: Render the XML sitemap
//! - `check`: Cross-check navigation and content

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    BreadcrumbArgs, CheckArgs, PageArgs, PaginationArgs, SiteArgs, SitemapArgs, TocArgs,
};
use output::Output;

/// Quire - documentation site navigation.
#[derive(Parser, Debug)]
#[command(name = "quire", version, about)]
struct Cli {
    #[command(flatten)]
    site: SiteArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the nested outline of a document as JSON.
    Toc(TocArgs),
    /// Print the breadcrumb trail of a page path as JSON.
    Breadcrumb(BreadcrumbArgs),
    /// Print the previous and next pages of a page path as JSON.
    Pagination(PaginationArgs),
    /// Print the page context of a document as JSON.
    Page(PageArgs),
    /// Render the XML sitemap.
    Sitemap(SitemapArgs),
    /// Check navigation and content for problems.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.site.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let site = &cli.site;
    let result = match cli.command {
        Commands::Toc(args) => args.execute(site),
        Commands::Breadcrumb(args) => args.execute(site),
        Commands::Pagination(args) => args.execute(site),
        Commands::Page(args) => args.execute(site),
        Commands::Sitemap(args) => args.execute(site),
        Commands::Check(args) => args.execute(site),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "quire",
            "page",
            "frontend/html/cheatsheet",
            "--config",
            "site/quire.toml",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(cli.site.config, Some(PathBuf::from("site/quire.toml")));
        assert!(cli.site.verbose);
        assert!(matches!(cli.command, Commands::Page(_)));
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "quire",
            "--content-dir",
            "content",
            "--navigation",
            "nav.yaml",
            "--base-url",
            "https://docs.example.com",
            "sitemap",
            "--output",
            "public/sitemap.xml",
        ])
        .unwrap();

        assert_eq!(cli.site.content_dir, Some(PathBuf::from("content")));
        assert_eq!(cli.site.navigation, Some(PathBuf::from("nav.yaml")));
        assert_eq!(cli.site.base_url.as_deref(), Some("https://docs.example.com"));
        assert!(matches!(cli.command, Commands::Sitemap(_)));
    }

    #[test]
    fn test_parse_pagination_index_flag() {
        let cli =
            Cli::try_parse_from(["quire", "pagination", "/docs/frontend/a11y", "--index"]).unwrap();

        assert!(matches!(cli.command, Commands::Pagination(_)));
    }

    #[test]
    fn test_parse_requires_argument() {
        assert!(Cli::try_parse_from(["quire", "toc"]).is_err());
        assert!(Cli::try_parse_from(["quire", "breadcrumb"]).is_err());
    }
}
