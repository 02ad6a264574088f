//! Heading extraction and document outlines for Quire.
//!
//! The pipeline is three pure steps:
//! - [`slugify`]: heading text to anchor id, identical to rendered heading ids
//! - [`extract_headings`]: raw document text to a flat, ordered [`Heading`] list
//! - [`build_outline`]: flat headings to a nested [`OutlineNode`] forest
//!
//! # Example
//!
//! ```
//! use quire_outline::{build_outline, extract_headings};
//!
//! let doc = "## Setup\n### Install\n<h2 id=\"usage\">Usage &amp; Tips</h2>";
//! let outline = build_outline(&extract_headings(doc));
//!
//! assert_eq!(outline[0].text, "Setup");
//! assert_eq!(outline[0].children[0].id, "#install");
//! assert_eq!(outline[1].id, "#usage");
//! assert_eq!(outline[1].text, "Usage & Tips");
//! ```

mod heading;
mod markup;
mod outline;
mod slug;

pub use heading::{ExtractOptions, Heading, extract_headings, extract_headings_with};
pub use outline::{OutlineNode, build_outline, duplicate_ids, outline_from_markdown};
pub use slug::slugify;
