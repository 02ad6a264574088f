//! Site facade tying navigation, content and outlines together.

use std::collections::HashSet;

use quire_config::{Config, NavigationError};
use quire_nav::{Adjacent, NavigationTree};
use quire_outline::{ExtractOptions, OutlineNode, build_outline, duplicate_ids, extract_headings_with};
use rayon::prelude::*;
use serde::Serialize;

use crate::content::{ContentError, ContentStore};
use crate::sitemap;

/// Site error.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// No document exists for the slug.
    #[error("Page not found: {0}")]
    NotFound(String),
    /// Document lookup or read failed.
    #[error(transparent)]
    Content(ContentError),
    /// Navigation file could not be loaded.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    /// Output could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ContentError> for SiteError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::NotFound(slug) => Self::NotFound(slug),
            other => Self::Content(other),
        }
    }
}

/// Everything a page template needs besides the rendered body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext {
    /// Canonical page path (route prefix + slug).
    pub path: String,
    /// Section-to-page titles; empty when the page is not in the navigation.
    pub breadcrumb: Vec<String>,
    /// Nested table of contents.
    pub outline: Vec<OutlineNode>,
    /// Neighbouring pages within the section.
    pub pagination: Adjacent,
}

/// Headings sharing an anchor within one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateAnchors {
    /// Document slug.
    pub slug: String,
    /// Anchor ids that occur more than once.
    pub ids: Vec<String>,
}

/// Result of [`Site::check`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Navigation paths with no backing document.
    pub missing_documents: Vec<String>,
    /// Document slugs not linked from the navigation.
    pub unlisted_documents: Vec<String>,
    /// Documents with repeated heading anchors.
    pub duplicate_anchors: Vec<DuplicateAnchors>,
    /// Documents that exist but could not be read.
    pub unreadable_documents: Vec<String>,
}

impl CheckReport {
    /// Total number of problems found.
    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.missing_documents.len()
            + self.unlisted_documents.len()
            + self.duplicate_anchors.len()
            + self.unreadable_documents.len()
    }

    /// Whether no problems were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.problem_count() == 0
    }
}

/// Documentation site: navigation tree, content store and outline settings.
///
/// Immutable once built; share it behind an `Arc` to serve concurrent
/// requests.
pub struct Site {
    navigation: NavigationTree,
    content: ContentStore,
    base_url: String,
    extract: ExtractOptions,
}

impl Site {
    /// Create a site with default outline settings and a local base URL.
    #[must_use]
    pub fn new(navigation: NavigationTree, content: ContentStore) -> Self {
        Self {
            navigation,
            content,
            base_url: "http://localhost:3000".to_owned(),
            extract: ExtractOptions::default(),
        }
    }

    /// Build a site from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Navigation` if the navigation file cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self, SiteError> {
        let navigation = config.load_navigation()?;
        let content = ContentStore::new(
            config.content.dir.clone(),
            config.content.extensions.clone(),
        );
        let extract = ExtractOptions {
            min_level: config.toc.min_level,
            max_level: config.toc.max_level,
            skip_code_fences: config.toc.skip_code_fences,
        };

        Ok(Self::new(navigation, content)
            .with_base_url(config.site.base_url.clone())
            .with_extract_options(extract))
    }

    /// Set the absolute base URL used by the sitemap.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the heading extraction options used for outlines.
    #[must_use]
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract = options;
        self
    }

    /// Navigation tree.
    #[must_use]
    pub fn navigation(&self) -> &NavigationTree {
        &self.navigation
    }

    /// Content store.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    /// Canonical page path for a document slug.
    #[must_use]
    pub fn path_for(&self, slug: &str) -> String {
        let prefix = self.navigation.route_prefix().trim_end_matches('/');
        format!("{prefix}/{}", slug.trim_start_matches('/'))
    }

    /// Document slug for a page path, if the path lies under the route prefix.
    #[must_use]
    pub fn slug_for(&self, path: &str) -> Option<String> {
        let prefix = self.navigation.route_prefix().trim_end_matches('/');
        let rest = path.strip_prefix(prefix)?.strip_prefix('/')?;
        let slug = rest.trim_end_matches('/');
        (!slug.is_empty()).then(|| slug.to_owned())
    }

    /// Outline of the document at `slug`.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::NotFound` if there is no document for the slug.
    pub fn outline(&self, slug: &str) -> Result<Vec<OutlineNode>, SiteError> {
        let text = self.content.read(slug)?;
        let outline = build_outline(&extract_headings_with(&text, &self.extract));
        tracing::debug!(
            slug,
            headings = outline.iter().map(OutlineNode::node_count).sum::<usize>(),
            "Built outline"
        );
        Ok(outline)
    }

    /// Assemble the page context for the document at `slug`.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::NotFound` if there is no document for the slug.
    pub fn page(&self, slug: &str) -> Result<PageContext, SiteError> {
        let outline = self.outline(slug)?;
        let path = self.path_for(slug);
        let breadcrumb = self.navigation.breadcrumb(&path);
        if breadcrumb.is_empty() {
            tracing::debug!(path = %path, "Page is not in navigation");
        }
        let pagination = self.navigation.adjacent(&path);

        Ok(PageContext {
            path,
            breadcrumb,
            outline,
            pagination,
        })
    }

    /// Cross-check the navigation against the content directory.
    ///
    /// Documents are read and scanned for repeated heading anchors in
    /// parallel. Report entries are in sorted or authored order, so repeated
    /// runs give identical reports.
    #[must_use]
    pub fn check(&self) -> CheckReport {
        let slugs = self.content.slugs();

        let nav_paths = self.navigation.paths();
        let mut listed = HashSet::new();
        let mut missing_documents = Vec::new();
        for path in &nav_paths {
            match self.slug_for(path) {
                Some(slug) if self.content.contains(&slug) => {
                    listed.insert(slug);
                }
                _ => missing_documents.push((*path).to_owned()),
            }
        }

        let unlisted_documents = slugs
            .iter()
            .filter(|slug| !listed.contains(slug.as_str()))
            .cloned()
            .collect();

        let scans: Vec<(&String, Result<Vec<String>, ContentError>)> = slugs
            .par_iter()
            .map(|slug| (slug, self.scan_anchors(slug)))
            .collect();

        let mut duplicate_anchors = Vec::new();
        let mut unreadable_documents = Vec::new();
        for (slug, scan) in scans {
            match scan {
                Ok(ids) if ids.is_empty() => {}
                Ok(ids) => duplicate_anchors.push(DuplicateAnchors {
                    slug: slug.clone(),
                    ids,
                }),
                Err(e) => {
                    tracing::warn!(slug = %slug, error = %e, "Failed to read document");
                    unreadable_documents.push(slug.clone());
                }
            }
        }

        let report = CheckReport {
            missing_documents,
            unlisted_documents,
            duplicate_anchors,
            unreadable_documents,
        };
        tracing::info!(
            documents = slugs.len(),
            pages = nav_paths.len(),
            problems = report.problem_count(),
            "Site check finished"
        );
        report
    }

    /// Render the XML sitemap for every navigation path.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Io` if the XML writer fails.
    pub fn sitemap(&self) -> Result<String, SiteError> {
        Ok(sitemap::render(&self.base_url, self.navigation.paths())?)
    }

    /// Repeated anchor ids in one document.
    fn scan_anchors(&self, slug: &str) -> Result<Vec<String>, ContentError> {
        let text = self.content.read(slug)?;
        let headings = extract_headings_with(&text, &self.extract);
        Ok(duplicate_ids(&headings)
            .into_iter()
            .map(str::to_owned)
            .collect())
    }
}
