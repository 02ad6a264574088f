//! Site assembly for Quire.
//!
//! This crate provides:
//! - [`ContentStore`]: document lookup and discovery under the content directory
//! - [`Site`]: page context (breadcrumb, outline, pagination), site checks and
//!   the sitemap
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use quire_config::Config;
//! use quire_site::Site;
//!
//! let config = Config::load(None, None)?;
//! let site = Site::from_config(&config)?;
//!
//! let page = site.page("frontend/html/cheatsheet")?;
//! assert_eq!(page.path, "/docs/frontend/html/cheatsheet");
//! # Ok(())
//! # }
//! ```

mod content;
mod site;
pub mod sitemap;

pub use content::{ContentError, ContentStore};
pub use site::{CheckReport, DuplicateAnchors, PageContext, Site, SiteError};
