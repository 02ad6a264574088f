//! Document lookup and discovery on the filesystem.
//!
//! A document slug is its path below the content directory without the file
//! extension, using `/` separators (e.g., `frontend/html/cheatsheet` for
//! `src/content/frontend/html/cheatsheet.mdx`).

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Content store error.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Slug is empty or escapes the content directory.
    #[error("Invalid document slug: {0:?}")]
    InvalidSlug(String),
    /// No document file exists for the slug.
    #[error("Document not found: {0}")]
    NotFound(String),
    /// Document exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Document file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Read-only view of the documents under a content directory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    dir: PathBuf,
    extensions: Vec<String>,
}

impl ContentStore {
    /// Create a store over `dir`.
    ///
    /// `extensions` are tried in order when resolving a slug, so with
    /// `["mdx", "md"]` an `.mdx` file shadows an `.md` file of the same name.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            dir: dir.into(),
            extensions,
        }
    }

    /// Content directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Find the file backing `slug`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::InvalidSlug` for empty, absolute or `..` slugs
    /// and `ContentError::NotFound` when no file with a known extension exists.
    pub fn resolve(&self, slug: &str) -> Result<PathBuf, ContentError> {
        validate_slug(slug)?;
        let base = self.dir.join(slug);
        self.extensions
            .iter()
            .map(|ext| {
                // Appended rather than replaced so "v1.2" keeps its dot.
                let mut file = base.clone().into_os_string();
                file.push(".");
                file.push(ext);
                PathBuf::from(file)
            })
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| ContentError::NotFound(slug.to_owned()))
    }

    /// Read the text of the document at `slug`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`ContentStore::resolve`] and
    /// `ContentError::Io` if the file cannot be read.
    pub fn read(&self, slug: &str) -> Result<String, ContentError> {
        let path = self.resolve(slug)?;
        fs::read_to_string(&path).map_err(|source| ContentError::Io { path, source })
    }

    /// Whether a document exists for `slug`.
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.resolve(slug).is_ok()
    }

    /// Every document slug under the content directory, sorted.
    ///
    /// Hidden files and directories are skipped. Returns an empty list if the
    /// content directory doesn't exist.
    #[must_use]
    pub fn slugs(&self) -> Vec<String> {
        let mut slugs = BTreeSet::new();
        self.scan_directory(&self.dir, "", &mut slugs);
        tracing::debug!(dir = %self.dir.display(), count = slugs.len(), "Scanned content");
        slugs.into_iter().collect()
    }

    fn scan_directory(&self, dir: &Path, prefix: &str, slugs: &mut BTreeSet<String>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };

        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            let path = entry.path();
            let child = if prefix.is_empty() {
                name
            } else {
                format!("{prefix}/{name}")
            };

            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                self.scan_directory(&path, &child, slugs);
            } else if let Some(stem) = self.document_stem(&path, &child) {
                slugs.insert(stem.to_owned());
            }
        }
    }

    /// Strip a known extension from `relative`, the slash-joined path of `path`.
    fn document_stem<'a>(&self, path: &Path, relative: &'a str) -> Option<&'a str> {
        let ext = path.extension()?.to_str()?;
        if !self.extensions.iter().any(|known| known == ext) {
            return None;
        }
        relative.strip_suffix(ext)?.strip_suffix('.')
    }
}

/// Reject slugs that are empty or could leave the content directory.
fn validate_slug(slug: &str) -> Result<(), ContentError> {
    let valid = !slug.is_empty()
        && slug
            .split('/')
            .all(|segment| !matches!(segment, "" | "." | "..") && !segment.contains('\\'));
    if valid {
        Ok(())
    } else {
        Err(ContentError::InvalidSlug(slug.to_owned()))
    }
}
