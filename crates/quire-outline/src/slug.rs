//! Heading anchor slugs.

/// Convert heading text to the anchor id used by rendered headings.
///
/// Lowercases and trims the text, turns whitespace runs into `-`, spells `&`
/// as `-and-`, drops everything except ASCII word characters and `-`, then
/// collapses repeated dashes and removes a single trailing dash.
///
/// The output must stay byte-identical to the ids the page renderer assigns to
/// heading elements, so the steps are applied in exactly this order. Distinct
/// inputs may produce the same slug; callers that need unique anchors must
/// deduplicate themselves.
///
/// # Examples
///
/// ```
/// use quire_outline::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("HTML & CSS"), "html-and-css");
/// assert_eq!(slugify("What's New?"), "whats-new");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();

    let mut spaced = String::with_capacity(lower.len());
    let mut in_whitespace = false;
    for c in lower.trim_matches(is_js_whitespace).chars() {
        if is_js_whitespace(c) {
            if !in_whitespace {
                spaced.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c == '&' {
            spaced.push_str("-and-");
        } else {
            spaced.push(c);
        }
    }

    let mut slug = String::with_capacity(spaced.len());
    for c in spaced.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
        } else if c == '-' && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Whitespace as the renderer's `\s` and `trim` see it: ECMAScript
/// `WhiteSpace` plus `LineTerminator`. Unlike `char::is_whitespace` this
/// includes U+FEFF and excludes U+0085.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t'
            | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Basics"), "basics");
        assert_eq!(slugify("  Spaces  "), "spaces");
        assert_eq!(slugify("Multiple   Spaces"), "multiple-spaces");
    }

    #[test]
    fn test_slugify_ampersand() {
        assert_eq!(slugify("HTML & CSS"), "html-and-css");
        assert_eq!(slugify("HTML&CSS"), "html-and-css");
        assert_eq!(slugify("Hi & Bye"), "hi-and-bye");
        assert_eq!(slugify("Git &"), "git-and");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("What's New?"), "whats-new");
        assert_eq!(slugify("Arrays (part 1)"), "arrays-part-1");
        assert_eq!(slugify("a.b.c"), "abc");
    }

    #[test]
    fn test_slugify_keeps_underscores_and_hyphens() {
        assert_eq!(slugify("snake_case"), "snake_case");
        assert_eq!(slugify("kebab-case"), "kebab-case");
        assert_eq!(slugify("a -- b"), "a-b");
    }

    #[test]
    fn test_slugify_removes_single_trailing_hyphen() {
        assert_eq!(slugify("Trailing -"), "trailing");
        assert_eq!(slugify("Question ?"), "question");
    }

    #[test]
    fn test_slugify_drops_non_ascii_letters() {
        assert_eq!(slugify("Café Menu"), "caf-menu");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn test_slugify_mixed_whitespace() {
        assert_eq!(slugify("Tabs\tand\nnewlines"), "tabs-and-newlines");
    }

    #[test]
    fn test_slugify_matches_js_whitespace_class() {
        assert_eq!(slugify("a\u{85}b"), "ab");
        assert_eq!(slugify("a\u{feff}b"), "a-b");
        assert_eq!(slugify("a\u{a0}\u{3000}b"), "a-b");
        assert_eq!(slugify("a\u{0B}\u{0C}b"), "a-b");
        assert_eq!(slugify("\u{feff}Intro\u{feff}"), "intro");
    }

    #[test]
    fn test_slugify_leading_ampersand_keeps_leading_hyphen() {
        // Renderer ids keep the leading dash, so this must too.
        assert_eq!(slugify("& more"), "-and-more");
    }

    #[test]
    fn test_slugify_is_deterministic() {
        let input = "Object-Oriented Programming & Classes";

        assert_eq!(slugify(input), slugify(input));
        assert_eq!(slugify(input), "object-oriented-programming-and-classes");
    }

    #[test]
    fn test_slugify_output_has_no_whitespace_or_ampersand() {
        for input in ["A & B", " x  y ", "&&&", "\t&\t", "-&-"] {
            let slug = slugify(input);

            assert!(!slug.contains(char::is_whitespace), "{slug:?}");
            assert!(!slug.contains('&'), "{slug:?}");
            assert!(!slug.ends_with('-'), "{slug:?}");
        }
    }
}
