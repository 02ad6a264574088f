//! Heading extraction from raw document text.
//!
//! Documents mix two heading notations: markdown prefix headings (`## Title`)
//! and inline markup (`<h2 id="x">Title</h2>`). Each notation has its own
//! scanner producing position-tagged matches; the matches are merged by byte
//! offset so the result follows source order regardless of notation.
//!
//! When both notations start on the same line, the prefix heading wins and
//! the markup match is dropped.

use std::iter::Peekable;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::markup::text_content;
use crate::slug::slugify;

/// Markdown prefix heading: a run of `#` at line start, blanks, then text.
static PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#+)[ \t]+([^\n]*)").expect("invalid prefix regex"));

/// Single-line `<hN ...>...</hN>` element.
static MARKUP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<h([1-6])(\s[^>]*)?>(.*?)</h([1-6])\s*>").expect("invalid markup regex")
});

/// `id` attribute inside a tag's attribute list.
static ID_ATTR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|\s)id\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("invalid id regex")
});

/// A heading found in a document.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    /// Heading level (2 for `##` / `<h2>`).
    pub level: u8,
    /// Plain heading text.
    pub text: String,
    /// In-page anchor including the leading `#`.
    pub id: String,
}

impl Heading {
    /// Create a heading whose anchor is derived from its text.
    #[must_use]
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        let text = text.into();
        let id = format!("#{}", slugify(&text));
        Self { level, text, id }
    }

    /// Create a heading with an explicit anchor id (without `#`).
    #[must_use]
    pub fn with_id(level: u8, text: impl Into<String>, id: &str) -> Self {
        Self {
            level,
            text: text.into(),
            id: format!("#{id}"),
        }
    }
}

/// Heading extraction settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Shallowest level treated as a heading.
    pub min_level: u8,
    /// Deepest level treated as a heading.
    pub max_level: u8,
    /// Ignore `#` prefix headings inside fenced code blocks. Markup headings
    /// are still extracted there.
    pub skip_code_fences: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_level: 2,
            max_level: 3,
            skip_code_fences: false,
        }
    }
}

impl ExtractOptions {
    fn accepts(&self, level: usize) -> bool {
        (usize::from(self.min_level)..=usize::from(self.max_level)).contains(&level)
    }
}

/// Heading together with the byte range it was matched from.
#[derive(Debug)]
struct Located {
    span: Range<usize>,
    heading: Heading,
}

/// Extract level 2 and 3 headings in document order.
///
/// # Examples
///
/// ```
/// use quire_outline::{Heading, extract_headings};
///
/// let headings = extract_headings("## A\n<h3 id=\"b\">B</h3>\n## C");
/// assert_eq!(headings, vec![
///     Heading::new(2, "A"),
///     Heading::with_id(3, "B", "b"),
///     Heading::new(2, "C"),
/// ]);
/// ```
#[must_use]
pub fn extract_headings(text: &str) -> Vec<Heading> {
    extract_headings_with(text, &ExtractOptions::default())
}

/// Extract headings using custom level bounds and fence handling.
#[must_use]
pub fn extract_headings_with(text: &str, options: &ExtractOptions) -> Vec<Heading> {
    let mut prefix = scan_prefix(text, options);
    let markup = scan_markup(text, options);

    if options.skip_code_fences {
        let fences = fenced_ranges(text);
        if !fences.is_empty() {
            prefix.retain(|l| !fences.iter().any(|f| f.contains(&l.span.start)));
        }
    }

    merge(prefix, markup).into_iter().map(|l| l.heading).collect()
}

fn scan_prefix(text: &str, options: &ExtractOptions) -> Vec<Located> {
    PREFIX_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let level = caps[1].len();
            if !options.accepts(level) {
                return None;
            }
            let title = strip_closing_sequence(&caps[2]);
            if title.is_empty() {
                return None;
            }
            let span = caps.get(0)?.range();
            Some(Located {
                span,
                heading: Heading::new(u8::try_from(level).ok()?, title),
            })
        })
        .collect()
}

fn scan_markup(text: &str, options: &ExtractOptions) -> Vec<Located> {
    MARKUP_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let open = &caps[1];
            if !open.eq_ignore_ascii_case(&caps[4]) {
                return None;
            }
            let level: u8 = open.parse().ok()?;
            if !options.accepts(usize::from(level)) {
                return None;
            }

            let title = text_content(&caps[3]).trim().to_owned();
            let explicit_id = caps
                .get(2)
                .and_then(|attrs| explicit_id(attrs.as_str()))
                .filter(|id| !id.is_empty());
            let heading = match explicit_id {
                Some(id) => Heading::with_id(level, title, id),
                None => Heading::new(level, title),
            };

            Some(Located {
                span: caps.get(0)?.range(),
                heading,
            })
        })
        .collect()
}

fn explicit_id(attrs: &str) -> Option<&str> {
    let caps = ID_ATTR_PATTERN.captures(attrs)?;
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
}

/// Trim the heading text and drop an optional closing `#` sequence.
fn strip_closing_sequence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without = trimmed.trim_end_matches('#');
    if without.len() == trimmed.len() {
        return trimmed;
    }
    if without.is_empty() || without.ends_with([' ', '\t']) {
        without.trim_end()
    } else {
        trimmed
    }
}

/// Merge two offset-sorted match lists into one offset-sorted list.
fn merge(prefix: Vec<Located>, markup: Vec<Located>) -> Vec<Located> {
    let mut merged = Vec::with_capacity(prefix.len() + markup.len());
    let mut markup: Peekable<_> = markup.into_iter().peekable();

    for p in prefix {
        while let Some(m) = markup.next_if(|m| m.span.start < p.span.start) {
            merged.push(m);
        }
        while markup.next_if(|m| p.span.contains(&m.span.start)).is_some() {}
        merged.push(p);
    }
    merged.extend(markup);

    merged
}

/// Byte ranges covered by fenced code blocks (``` or ~~~).
fn fenced_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut open: Option<(usize, char, usize)> = None;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let indent = line.len() - line.trim_start_matches(' ').len();
        if indent > 3 {
            continue;
        }
        let body = &line[indent..];
        let Some(marker) = body.chars().next().filter(|c| *c == '`' || *c == '~') else {
            continue;
        };
        let run = body.len() - body.trim_start_matches(marker).len();
        if run < 3 {
            continue;
        }

        if let Some((start, open_marker, open_run)) = open {
            if marker == open_marker && run >= open_run && body[run..].trim().is_empty() {
                ranges.push(start..offset);
                open = None;
            }
        } else {
            open = Some((line_start, marker, run));
        }
    }

    if let Some((start, _, _)) = open {
        ranges.push(start..text.len());
    }

    ranges
}
