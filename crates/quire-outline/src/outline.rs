//! Nested outline construction from a flat heading sequence.

use std::collections::HashMap;

use crate::heading::{Heading, extract_headings};

/// Outline entry with nested sub-headings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutlineNode {
    /// Heading level.
    pub level: u8,
    /// Heading text.
    pub text: String,
    /// In-page anchor including the leading `#`.
    pub id: String,
    /// Headings nested under this one, in document order.
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    fn leaf(heading: &Heading) -> Self {
        Self {
            level: heading.level,
            text: heading.text.clone(),
            id: heading.id.clone(),
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(OutlineNode::node_count)
            .sum::<usize>()
    }
}

/// Build a nested outline forest from headings in document order.
///
/// Each heading is attached to the nearest preceding heading with a strictly
/// smaller level; headings with no such ancestor become top-level entries.
/// A document starting with `###` therefore has a level-3 top-level node.
///
/// Runs in a single pass. The scratch stack holds indices of headings that
/// can still receive children and is dropped once the pass finishes; the
/// returned forest owns its nodes.
///
/// # Examples
///
/// ```
/// use quire_outline::{Heading, build_outline};
///
/// let outline = build_outline(&[
///     Heading::new(2, "A"),
///     Heading::new(3, "B"),
///     Heading::new(2, "C"),
/// ]);
/// assert_eq!(outline.len(), 2);
/// assert_eq!(outline[0].children[0].text, "B");
/// assert!(outline[1].children.is_empty());
/// ```
#[must_use]
pub fn build_outline(headings: &[Heading]) -> Vec<OutlineNode> {
    // Slot 0 is the level-0 sentinel; heading i lives in slot i + 1.
    let level_of = |slot: usize| if slot == 0 { 0 } else { headings[slot - 1].level };
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); headings.len() + 1];
    let mut stack: Vec<usize> = vec![0];

    for (i, heading) in headings.iter().enumerate() {
        let slot = i + 1;
        while stack.len() > 1 && stack.last().is_some_and(|&top| level_of(top) >= heading.level) {
            stack.pop();
        }
        let parent = stack.last().copied().unwrap_or(0);
        children[parent].push(slot);
        stack.push(slot);
    }

    children[0]
        .iter()
        .map(|&slot| materialize(slot, headings, &children))
        .collect()
}

/// Turn arena slot `slot` and its descendants into owned nodes.
fn materialize(slot: usize, headings: &[Heading], children: &[Vec<usize>]) -> OutlineNode {
    let mut node = OutlineNode::leaf(&headings[slot - 1]);
    node.children = children[slot]
        .iter()
        .map(|&child| materialize(child, headings, children))
        .collect();
    node
}

/// Extract headings from document text and build their outline.
#[must_use]
pub fn outline_from_markdown(text: &str) -> Vec<OutlineNode> {
    build_outline(&extract_headings(text))
}

/// Anchor ids that occur more than once, in order of first repetition.
///
/// Duplicate anchors are not an extraction error; this exists so site checks
/// can report them.
#[must_use]
pub fn duplicate_ids(headings: &[Heading]) -> Vec<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = Vec::new();
    for heading in headings {
        let count = counts.entry(heading.id.as_str()).or_default();
        *count += 1;
        if *count == 2 {
            duplicates.push(heading.id.as_str());
        }
    }
    duplicates
}
