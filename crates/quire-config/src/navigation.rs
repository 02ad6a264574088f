//! Navigation file loading.
//!
//! The navigation file is a YAML list of sections:
//!
//! ```yaml
//! - title: Frontend
//!   items:
//!     - title: HTML & CSS
//!       items:
//!         - title: HTML Cheatsheet
//!           path: /docs/frontend/html/cheatsheet
//!           items:
//!             - title: Forms
//!               path: /docs/frontend/html/forms
//! ```
//!
//! Entries with a `path` are pages; entries without one group other entries.
//! A page may list child pages one level deep.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use quire_nav::{NavBranch, NavEntry, NavLeaf, NavigationTree};

/// Navigation loading error.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// File not found.
    #[error("Navigation file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Entry violates the navigation file rules.
    #[error("Invalid navigation entry at {location}: {message}")]
    Invalid {
        /// Entry location (e.g., "`sections[0].items[2]`").
        location: String,
        /// What is wrong with the entry.
        message: String,
    },
}

/// Load and validate a navigation file.
///
/// # Errors
///
/// Returns `NavigationError` if the file is missing, is not valid YAML, or
/// has invalid entries.
pub fn load_navigation(path: &Path, route_prefix: &str) -> Result<NavigationTree, NavigationError> {
    if !path.exists() {
        return Err(NavigationError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let tree = parse_navigation(&content, route_prefix)?;

    tracing::debug!(
        path = %path.display(),
        sections = tree.sections().len(),
        "Loaded navigation"
    );
    Ok(tree)
}

/// Parse and validate navigation YAML.
///
/// Duplicate page paths are logged and kept; lookups resolve to the first
/// one in authored order.
///
/// # Errors
///
/// Returns `NavigationError::Parse` for malformed YAML or unknown keys and
/// `NavigationError::Invalid` for entries that break the rules.
pub fn parse_navigation(yaml: &str, route_prefix: &str) -> Result<NavigationTree, NavigationError> {
    let sections: Vec<NavBranch> = serde_yaml::from_str(yaml)?;

    {
        let mut validator = Validator::default();
        for (i, section) in sections.iter().enumerate() {
            let location = format!("sections[{i}]");
            require_title(&section.title, &location)?;
            validator.branch(section, &location)?;
        }
    }

    Ok(NavigationTree::new(sections).with_route_prefix(route_prefix))
}

#[derive(Default)]
struct Validator<'a> {
    paths: HashSet<&'a str>,
}

impl<'a> Validator<'a> {
    fn branch(&mut self, branch: &'a NavBranch, location: &str) -> Result<(), NavigationError> {
        for (i, entry) in branch.items.iter().enumerate() {
            let location = format!("{location}.items[{i}]");
            require_title(entry.title(), &location)?;
            match entry {
                NavEntry::Branch(child) => self.branch(child, &location)?,
                NavEntry::Leaf(leaf) => self.leaf(leaf, &location, true)?,
            }
        }
        Ok(())
    }

    fn leaf(
        &mut self,
        leaf: &'a NavLeaf,
        location: &str,
        may_nest: bool,
    ) -> Result<(), NavigationError> {
        if leaf.path.is_empty() {
            return Err(invalid(location, "path cannot be empty"));
        }
        if !leaf.path.starts_with('/') {
            return Err(invalid(
                location,
                format!("path {:?} must start with /", leaf.path),
            ));
        }
        if !self.paths.insert(&leaf.path) {
            tracing::warn!(
                path = %leaf.path,
                location = %location,
                "Duplicate navigation path, the first entry wins"
            );
        }
        if !may_nest && !leaf.items.is_empty() {
            return Err(invalid(
                location,
                "child pages cannot have pages of their own",
            ));
        }
        for (i, child) in leaf.items.iter().enumerate() {
            let location = format!("{location}.items[{i}]");
            require_title(&child.title, &location)?;
            self.leaf(child, &location, false)?;
        }
        Ok(())
    }
}

fn require_title(title: &str, location: &str) -> Result<(), NavigationError> {
    if title.trim().is_empty() {
        return Err(invalid(location, "title cannot be empty"));
    }
    Ok(())
}

fn invalid(location: &str, message: impl Into<String>) -> NavigationError {
    NavigationError::Invalid {
        location: location.to_owned(),
        message: message.into(),
    }
}
