//! Configuration management for Quire.
//!
//! Parses `quire.toml` with serde, discovers it in parent directories when no
//! path is given, and loads the YAML navigation file it points to.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `site.base_url` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! The default base URL is `${QUIRE_BASE_URL:-http://localhost:3000}`.

mod expand;
mod navigation;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use navigation::{NavigationError, load_navigation, parse_navigation};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "quire.toml";

/// Base URL used when the config file does not set one.
const DEFAULT_BASE_URL: &str = "${QUIRE_BASE_URL:-http://localhost:3000}";

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content directory.
    pub content_dir: Option<PathBuf>,
    /// Override navigation file.
    pub navigation_file: Option<PathBuf>,
    /// Override site base URL.
    pub base_url: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Public site settings.
    pub site: SiteConfig,
    /// Content directory settings.
    pub content: ContentConfig,
    /// Navigation file settings.
    pub navigation: NavigationConfig,
    /// Table-of-contents extraction settings.
    pub toc: TocConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Public site settings.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute base URL used for sitemap entries.
    pub base_url: String,
    /// URL prefix under which every navigation path lives.
    pub route_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            route_prefix: quire_nav::DEFAULT_ROUTE_PREFIX.to_owned(),
        }
    }
}

/// Content directory settings.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Directory holding the documents.
    pub dir: PathBuf,
    /// Document file extensions, in lookup priority order.
    pub extensions: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("src/content"),
            extensions: vec!["mdx".to_owned(), "md".to_owned()],
        }
    }
}

/// Navigation file settings.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    /// YAML file describing the navigation tree.
    pub file: PathBuf,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("navigation.yaml"),
        }
    }
}

/// Table-of-contents extraction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TocConfig {
    /// Shallowest heading level included.
    pub min_level: u8,
    /// Deepest heading level included.
    pub max_level: u8,
    /// Ignore `#` prefix headings inside fenced code blocks.
    pub skip_code_fences: bool,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            min_level: 2,
            max_level: 3,
            skip_code_fences: false,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base_url`").
        field: String,
        /// Error message.
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `quire.toml` in the current directory and
    /// parents, falling back to defaults relative to the current directory.
    ///
    /// Environment variables are expanded first, then CLI settings are
    /// applied, then the result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// a referenced variable is unset, or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default_with_cwd()
        };

        config.expand_env_vars()?;

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;

        Ok(config)
    }

    /// Load the navigation tree named by `navigation.file`.
    ///
    /// The tree uses `site.route_prefix` for section lookup.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError` if the file is missing, malformed, or has
    /// invalid entries.
    pub fn load_navigation(&self) -> Result<quire_nav::NavigationTree, NavigationError> {
        load_navigation(&self.navigation.file, &self.site.route_prefix)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(content_dir) = &settings.content_dir {
            self.content.dir.clone_from(content_dir);
        }
        if let Some(navigation_file) = &settings.navigation_file {
            self.navigation.file.clone_from(navigation_file);
        }
        if let Some(base_url) = &settings.base_url {
            self.site.base_url.clone_from(base_url);
        }
    }

    /// Search for the config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self::default();
        config.resolve_paths(base);
        config
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_content()?;
        self.validate_toc()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.base_url, "site.base_url")?;
        require_http_url(&self.site.base_url, "site.base_url")?;
        if !self.site.route_prefix.starts_with('/') {
            return Err(ConfigError::Validation(
                "site.route_prefix must start with /".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_content(&self) -> Result<(), ConfigError> {
        if self.content.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "content.extensions cannot be empty".to_owned(),
            ));
        }
        for extension in &self.content.extensions {
            require_non_empty(extension, "content.extensions")?;
            if extension.starts_with('.') {
                return Err(ConfigError::Validation(format!(
                    "content.extensions entry {extension:?} must not start with a dot"
                )));
            }
        }
        Ok(())
    }

    fn validate_toc(&self) -> Result<(), ConfigError> {
        let TocConfig {
            min_level,
            max_level,
            ..
        } = self.toc;
        if !(2..=6).contains(&min_level) {
            return Err(ConfigError::Validation(
                "toc.min_level must be between 2 and 6".to_owned(),
            ));
        }
        if !(min_level..=6).contains(&max_level) {
            return Err(ConfigError::Validation(format!(
                "toc.max_level must be between {min_level} and 6"
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.content.dir = config_dir.join(&self.content.dir);
        self.navigation.file = config_dir.join(&self.navigation.file);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/site"));

        assert_eq!(config.site.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.site.route_prefix, "/docs");
        assert_eq!(config.content.dir, PathBuf::from("/site/src/content"));
        assert_eq!(config.content.extensions, vec!["mdx", "md"]);
        assert_eq!(config.navigation.file, PathBuf::from("/site/navigation.yaml"));
        assert_eq!(config.toc, TocConfig::default());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.site.route_prefix, "/docs");
        assert_eq!(config.toc, TocConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[site]
base_url = "https://docs.example.com"
route_prefix = "/notes"

[content]
dir = "content"
extensions = ["md"]

[navigation]
file = "nav/site.yaml"

[toc]
min_level = 2
max_level = 4
skip_code_fences = true
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.site.base_url, "https://docs.example.com");
        assert_eq!(config.site.route_prefix, "/notes");
        assert_eq!(config.content.dir, PathBuf::from("content"));
        assert_eq!(config.content.extensions, vec!["md"]);
        assert_eq!(config.navigation.file, PathBuf::from("nav/site.yaml"));
        assert_eq!(
            config.toc,
            TocConfig {
                min_level: 2,
                max_level: 4,
                skip_code_fences: true,
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let result: Result<Config, _> = toml::from_str("[site]\nbase = \"x\"\n");

        assert!(result.is_err());
    }

    #[test]
    fn test_load_resolves_paths_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
[site]
base_url = "https://docs.example.com"

[content]
dir = "docs"
"#,
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.content.dir, dir.path().join("docs"));
        assert_eq!(config.navigation.file, dir.path().join("navigation.yaml"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        let err = Config::load(Some(&missing), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(path) if path == missing));
    }

    #[test]
    fn test_load_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[site\n");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_expands_base_url() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::set_var("QUIRE_TEST_CONFIG_HOST", "docs.example.com");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "[site]\nbase_url = \"https://${QUIRE_TEST_CONFIG_HOST}\"\n",
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.base_url, "https://docs.example.com");
        unsafe {
            std::env::remove_var("QUIRE_TEST_CONFIG_HOST");
        }
    }

    #[test]
    fn test_load_missing_env_var() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::remove_var("QUIRE_TEST_CONFIG_MISSING");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "[site]\nbase_url = \"${QUIRE_TEST_CONFIG_MISSING}\"\n",
        );

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "site.base_url"));
    }

    #[test]
    fn test_load_applies_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[site]\nbase_url = \"https://a.example.com\"\n");
        let settings = CliSettings {
            content_dir: Some(PathBuf::from("/elsewhere/content")),
            navigation_file: None,
            base_url: Some("https://b.example.com".to_owned()),
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.site.base_url, "https://b.example.com");
        assert_eq!(config.content.dir, PathBuf::from("/elsewhere/content"));
        assert_eq!(config.navigation.file, dir.path().join("navigation.yaml"));
    }

    #[test]
    fn test_load_validates_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[site]\nbase_url = \"https://a.example.com\"\n");
        let settings = CliSettings {
            base_url: Some("ftp://a.example.com".to_owned()),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/site"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.content.dir, PathBuf::from("/site/src/content"));
        assert_eq!(config.navigation.file, PathBuf::from("/site/navigation.yaml"));
        assert_eq!(config.site.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");
        let nested = dir.path().join("src/content/frontend");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(Config::discover_config(&nested), Some(path));
    }

    #[test]
    fn test_discover_config_prefers_nearest() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "");
        let nested = dir.path().join("nested");
        std::fs::create_dir_all(&nested).unwrap();
        let nearest = write_config(&nested, "");

        assert_eq!(Config::discover_config(&nested), Some(nearest));
    }

    #[test]
    fn test_validate_default_with_literal_url_passes() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.site.base_url = "http://localhost:3000".to_owned();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_base_url_scheme() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.site.base_url = "docs.example.com".to_owned();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("site.base_url"));
    }

    #[test]
    fn test_validate_base_url_empty() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.site.base_url = String::new();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_validate_route_prefix() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.site.base_url = "https://docs.example.com".to_owned();
        config.site.route_prefix = "docs".to_owned();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("site.route_prefix"));
    }

    #[test]
    fn test_validate_extensions() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.site.base_url = "https://docs.example.com".to_owned();
        config.content.extensions = vec![".mdx".to_owned()];

        assert!(config.validate().is_err());

        config.content.extensions.clear();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_toc_levels() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.site.base_url = "https://docs.example.com".to_owned();

        for (min_level, max_level, ok) in [
            (2, 2, true),
            (2, 6, true),
            (3, 5, true),
            (1, 3, false),
            (3, 2, false),
            (2, 7, false),
            (7, 7, false),
        ] {
            config.toc.min_level = min_level;
            config.toc.max_level = max_level;

            assert_eq!(config.validate().is_ok(), ok, "{min_level}..={max_level}");
        }
    }
}
