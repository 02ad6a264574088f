//! CLI error types.

use quire_config::{ConfigError, NavigationError};
use quire_site::SiteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Navigation(#[from] NavigationError),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("no navigation section matches {0}")]
    NoSection(String),

    #[error("site check found {0} problem(s)")]
    CheckFailed(usize),
}
