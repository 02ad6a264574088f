//! Breadcrumb trails for page paths.

use crate::tree::{NavEntry, NavLeaf, NavigationTree};

impl NavigationTree {
    /// Build the breadcrumb trail for a page path.
    ///
    /// Returns titles from the top-level section down to and including the
    /// page whose path equals `path` exactly. Sections are searched depth-first
    /// in authored order and the first match wins. Unknown paths yield an
    /// empty trail.
    ///
    /// # Examples
    ///
    /// ```
    /// use quire_nav::{NavBranch, NavLeaf, NavigationTree};
    ///
    /// let tree = NavigationTree::new(vec![NavBranch::new(
    ///     "Frontend",
    ///     vec![NavBranch::new(
    ///         "HTML&CSS",
    ///         vec![NavLeaf::new("HTML Cheatsheet", "/docs/frontend/html/cheatsheet").into()],
    ///     )
    ///     .into()],
    /// )]);
    ///
    /// assert_eq!(
    ///     tree.breadcrumb("/docs/frontend/html/cheatsheet"),
    ///     vec!["Frontend", "HTML&CSS", "HTML Cheatsheet"],
    /// );
    /// assert!(tree.breadcrumb("/docs/missing").is_empty());
    /// ```
    #[must_use]
    pub fn breadcrumb(&self, path: &str) -> Vec<String> {
        self.sections()
            .iter()
            .find_map(|section| find_in_entries(&section.items, path, vec![section.title.as_str()]))
            .map(|trail| trail.into_iter().map(str::to_owned).collect())
            .unwrap_or_default()
    }
}

/// Search entries, extending a trail owned by this level of the search.
fn find_in_entries<'a>(
    entries: &'a [NavEntry],
    path: &str,
    trail: Vec<&'a str>,
) -> Option<Vec<&'a str>> {
    entries.iter().find_map(|entry| match entry {
        NavEntry::Branch(branch) => {
            let mut next = trail.clone();
            next.push(&branch.title);
            find_in_entries(&branch.items, path, next)
        }
        NavEntry::Leaf(leaf) => find_in_leaf(leaf, path, trail.clone()),
    })
}

fn find_in_leaf<'a>(leaf: &'a NavLeaf, path: &str, mut trail: Vec<&'a str>) -> Option<Vec<&'a str>> {
    trail.push(&leaf.title);
    if leaf.path == path {
        return Some(trail);
    }
    leaf.items
        .iter()
        .find_map(|child| find_in_leaf(child, path, trail.clone()))
}
