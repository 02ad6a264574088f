//! Previous/next page links within a section.

use serde::Serialize;

use crate::tree::{NavBranch, NavLink, NavigationTree, collect_entries};

/// Neighbouring pages of a page within its section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Adjacent {
    /// Page before the current one, absent for the first page.
    pub previous: Option<NavLink>,
    /// Page after the current one, absent for the last page.
    pub next: Option<NavLink>,
}

impl NavBranch {
    /// Flatten this section into reading order.
    ///
    /// Leaves are listed depth-first in authored order, each leaf followed by
    /// its nested leaves. Branches contribute only their descendants.
    #[must_use]
    pub fn pagination_index(&self) -> Vec<NavLink> {
        let mut leaves = Vec::new();
        collect_entries(&self.items, &mut leaves);
        leaves.into_iter().map(NavLink::from).collect()
    }
}

impl NavigationTree {
    /// Find the pages before and after `path` in its section's reading order.
    ///
    /// The section is picked from the path's first segment (see
    /// [`NavigationTree::section_for`]). Pagination never crosses section
    /// boundaries. When the section or the path is unknown both neighbours are
    /// absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use quire_nav::{NavBranch, NavLeaf, NavigationTree};
    ///
    /// let tree = NavigationTree::new(vec![NavBranch::new(
    ///     "Guide",
    ///     vec![
    ///         NavLeaf::new("A", "/docs/guide/a").into(),
    ///         NavLeaf::new("B", "/docs/guide/b").into(),
    ///         NavLeaf::new("C", "/docs/guide/c").into(),
    ///     ],
    /// )]);
    ///
    /// let adjacent = tree.adjacent("/docs/guide/b");
    /// assert_eq!(adjacent.previous.unwrap().title, "A");
    /// assert_eq!(adjacent.next.unwrap().title, "C");
    /// ```
    #[must_use]
    pub fn adjacent(&self, path: &str) -> Adjacent {
        let Some(section) = self.section_for(path) else {
            return Adjacent::default();
        };

        let index = section.pagination_index();
        let Some(position) = index.iter().position(|link| link.path == path) else {
            return Adjacent::default();
        };

        Adjacent {
            previous: position
                .checked_sub(1)
                .and_then(|i| index.get(i))
                .cloned(),
            next: index.get(position + 1).cloned(),
        }
    }
}
