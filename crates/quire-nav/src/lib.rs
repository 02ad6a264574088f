//! Navigation for Quire documentation sites.
//!
//! A [`NavigationTree`] holds the hand-authored site structure: top-level
//! sections, nested categories and page links. It answers two questions for a
//! page path:
//!
//! - [`NavigationTree::breadcrumb`]: titles from the section down to the page
//! - [`NavigationTree::adjacent`]: previous and next pages in reading order
//!
//! Both are pure lookups over the immutable tree and safe to call from many
//! threads at once.
//!
//! # Example
//!
//! ```
//! use quire_nav::{NavBranch, NavLeaf, NavigationTree};
//!
//! let tree = NavigationTree::new(vec![NavBranch::new(
//!     "Dev Tools",
//!     vec![NavBranch::new(
//!         "Git",
//!         vec![
//!             NavLeaf::new("Basics", "/docs/dev-tools/git/basics").into(),
//!             NavLeaf::new("Branching", "/docs/dev-tools/git/branching").into(),
//!         ],
//!     )
//!     .into()],
//! )]);
//!
//! assert_eq!(
//!     tree.breadcrumb("/docs/dev-tools/git/branching"),
//!     vec!["Dev Tools", "Git", "Branching"],
//! );
//! let adjacent = tree.adjacent("/docs/dev-tools/git/branching");
//! assert_eq!(adjacent.previous.unwrap().path, "/docs/dev-tools/git/basics");
//! assert!(adjacent.next.is_none());
//! ```

mod breadcrumb;
mod pagination;
mod tree;

pub use pagination::Adjacent;
pub use tree::{DEFAULT_ROUTE_PREFIX, NavBranch, NavEntry, NavLeaf, NavLink, NavigationTree};
