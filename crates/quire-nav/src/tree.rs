//! Navigation tree model.
//!
//! The tree is authored by hand and loaded once at startup. Top-level entries
//! are sections ([`NavBranch`]); below them, branches group pages and leaves
//! ([`NavLeaf`]) link to them. A leaf may carry one extra level of child
//! leaves. The shape is checked when the tree is loaded, not here.

use quire_outline::slugify;
use serde::{Deserialize, Serialize};

/// Default URL prefix under which every navigation path lives.
pub const DEFAULT_ROUTE_PREFIX: &str = "/docs";

/// Titled link to a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Display title.
    pub title: String,
    /// Canonical page path (e.g., "/docs/frontend/html/cheatsheet").
    pub path: String,
}

impl From<&NavLeaf> for NavLink {
    fn from(leaf: &NavLeaf) -> Self {
        Self {
            title: leaf.title.clone(),
            path: leaf.path.clone(),
        }
    }
}

/// Navigation entry: either a titled group or a page link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Page link, possibly with nested page links.
    Leaf(NavLeaf),
    /// Titled group of entries without a page of its own.
    Branch(NavBranch),
}

impl NavEntry {
    /// Display title of the entry.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.title,
            Self::Branch(branch) => &branch.title,
        }
    }
}

impl From<NavLeaf> for NavEntry {
    fn from(leaf: NavLeaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<NavBranch> for NavEntry {
    fn from(branch: NavBranch) -> Self {
        Self::Branch(branch)
    }
}

/// Titled group of navigation entries (sections and categories).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavBranch {
    /// Display title.
    pub title: String,
    /// Child entries in authored order.
    #[serde(default)]
    pub items: Vec<NavEntry>,
}

impl NavBranch {
    /// Create a branch from a title and child entries.
    #[must_use]
    pub fn new(title: impl Into<String>, items: Vec<NavEntry>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

/// Link to a page, optionally with nested page links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLeaf {
    /// Display title.
    pub title: String,
    /// Canonical page path, unique across the tree.
    pub path: String,
    /// Nested page links.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavLeaf>,
}

impl NavLeaf {
    /// Create a leaf without nested links.
    #[must_use]
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            items: Vec::new(),
        }
    }

    /// Attach nested page links.
    #[must_use]
    pub fn with_items(mut self, items: Vec<NavLeaf>) -> Self {
        self.items = items;
        self
    }
}

/// Site-wide navigation tree.
///
/// Immutable after construction and shared read-only between requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationTree {
    sections: Vec<NavBranch>,
    route_prefix: String,
}

impl NavigationTree {
    /// Create a tree from top-level sections using the `/docs` route prefix.
    #[must_use]
    pub fn new(sections: Vec<NavBranch>) -> Self {
        Self {
            sections,
            route_prefix: DEFAULT_ROUTE_PREFIX.to_owned(),
        }
    }

    /// Use a different route prefix for section lookup.
    #[must_use]
    pub fn with_route_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.route_prefix = prefix.into();
        self
    }

    /// Top-level sections in authored order.
    #[must_use]
    pub fn sections(&self) -> &[NavBranch] {
        &self.sections
    }

    /// URL prefix stripped before matching a path against section titles.
    #[must_use]
    pub fn route_prefix(&self) -> &str {
        &self.route_prefix
    }

    /// Find the section a path belongs to.
    ///
    /// The first path segment after the route prefix is compared with each
    /// section's slugified title, so `/docs/dev-tools/git` belongs to a
    /// section titled "Dev Tools".
    #[must_use]
    pub fn section_for(&self, path: &str) -> Option<&NavBranch> {
        let segment = self.section_segment(path)?;
        self.sections
            .iter()
            .find(|section| slugify(&section.title) == segment)
    }

    /// Every leaf path in depth-first authored order.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        let mut links = Vec::new();
        for section in &self.sections {
            collect_entries(&section.items, &mut links);
        }
        links.into_iter().map(|leaf| leaf.path.as_str()).collect()
    }

    /// First segment of `path` below the route prefix.
    fn section_segment<'a>(&self, path: &'a str) -> Option<&'a str> {
        let prefix = self.route_prefix.trim_end_matches('/');
        let rest = match path.strip_prefix(prefix) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        };
        rest.trim_start_matches('/')
            .split('/')
            .next()
            .filter(|segment| !segment.is_empty())
    }
}

/// Collect leaves depth-first: each leaf before its nested leaves.
pub(crate) fn collect_entries<'a>(entries: &'a [NavEntry], out: &mut Vec<&'a NavLeaf>) {
    for entry in entries {
        match entry {
            NavEntry::Branch(branch) => collect_entries(&branch.items, out),
            NavEntry::Leaf(leaf) => collect_leaf(leaf, out),
        }
    }
}

fn collect_leaf<'a>(leaf: &'a NavLeaf, out: &mut Vec<&'a NavLeaf>) {
    out.push(leaf);
    for child in &leaf.items {
        collect_leaf(child, out);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static_assertions::assert_impl_all!(super::NavigationTree: Send, Sync);

    fn sample_tree() -> NavigationTree {
        NavigationTree::new(vec![
            NavBranch::new(
                "Frontend",
                vec![
                    NavBranch::new(
                        "HTML & CSS",
                        vec![
                            NavLeaf::new("HTML Cheatsheet", "/docs/frontend/html/cheatsheet")
                                .with_items(vec![NavLeaf::new(
                                    "HTML Child",
                                    "/docs/frontend/html/child",
                                )])
                                .into(),
                            NavLeaf::new("CSS Cheatsheet", "/docs/frontend/css/cheatsheet").into(),
                        ],
                    )
                    .into(),
                ],
            ),
            NavBranch::new(
                "Dev Tools",
                vec![
                    NavBranch::new(
                        "Git & GitHub",
                        vec![NavLeaf::new("Basics", "/docs/dev-tools/git-github/basics").into()],
                    )
                    .into(),
                ],
            ),
        ])
    }

    #[test]
    fn test_section_for_matches_slugified_title() {
        let tree = sample_tree();

        let section = tree.section_for("/docs/dev-tools/git-github/basics");

        assert_eq!(section.map(|s| s.title.as_str()), Some("Dev Tools"));
    }

    #[test]
    fn test_section_for_unknown_segment() {
        let tree = sample_tree();

        assert!(tree.section_for("/docs/backend/nodejs/basics").is_none());
        assert!(tree.section_for("/docs").is_none());
        assert!(tree.section_for("").is_none());
    }

    #[test]
    fn test_section_for_without_route_prefix() {
        let tree = sample_tree();

        let section = tree.section_for("/frontend/html/cheatsheet");

        assert_eq!(section.map(|s| s.title.as_str()), Some("Frontend"));
    }

    #[test]
    fn test_section_for_prefix_requires_segment_boundary() {
        let tree = sample_tree().with_route_prefix("/doc");

        assert!(tree.section_for("/docs/frontend/html/cheatsheet").is_none());
    }

    #[test]
    fn test_section_for_custom_route_prefix() {
        let tree = sample_tree().with_route_prefix("/notes/");

        let section = tree.section_for("/notes/frontend/css/cheatsheet");

        assert_eq!(section.map(|s| s.title.as_str()), Some("Frontend"));
        assert_eq!(tree.route_prefix(), "/notes/");
    }

    #[test]
    fn test_paths_depth_first_in_authored_order() {
        let tree = sample_tree();

        assert_eq!(
            tree.paths(),
            vec![
                "/docs/frontend/html/cheatsheet",
                "/docs/frontend/html/child",
                "/docs/frontend/css/cheatsheet",
                "/docs/dev-tools/git-github/basics",
            ]
        );
    }

    #[test]
    fn test_entry_title() {
        let leaf: NavEntry = NavLeaf::new("Page", "/docs/page").into();
        let branch: NavEntry = NavBranch::new("Group", Vec::new()).into();

        assert_eq!(leaf.title(), "Page");
        assert_eq!(branch.title(), "Group");
    }

    #[test]
    fn test_deserialize_yaml_tree() {
        let yaml = r"
- title: Frontend
  items:
    - title: HTML & CSS
      items:
        - title: HTML Cheatsheet
          path: /docs/frontend/html/cheatsheet
          items:
            - title: HTML Child
              path: /docs/frontend/html/child
";
        let sections: Vec<NavBranch> = serde_yaml::from_str(yaml).unwrap();

        let expected = vec![NavBranch::new(
            "Frontend",
            vec![
                NavBranch::new(
                    "HTML & CSS",
                    vec![
                        NavLeaf::new("HTML Cheatsheet", "/docs/frontend/html/cheatsheet")
                            .with_items(vec![NavLeaf::new(
                                "HTML Child",
                                "/docs/frontend/html/child",
                            )])
                            .into(),
                    ],
                )
                .into(),
            ],
        )];
        assert_eq!(sections, expected);
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let yaml = r"
- title: Frontend
  href: /docs/frontend
";
        let result: Result<Vec<NavBranch>, _> = serde_yaml::from_str(yaml);

        assert!(result.is_err());
    }
}
