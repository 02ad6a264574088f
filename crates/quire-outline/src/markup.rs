//! Inline markup flattening for `<hN>` heading content.

use std::sync::LazyLock;

use regex::Regex;

/// Any opening, closing or self-closing tag.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("invalid tag regex"));

/// Named and numeric character references.
static ENTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").expect("invalid entity regex")
});

/// Flatten inline markup to its text content.
///
/// Nested elements contribute their text in document order; tags themselves
/// (and void elements like `<br/>`) contribute nothing. Character references
/// are decoded afterwards so escaped angle brackets survive as text.
pub(crate) fn text_content(html: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(html, "");
    decode_entities(&stripped)
}

/// Decode character references, leaving unknown ones untouched.
pub(crate) fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_owned();
    }

    ENTITY_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            decode_reference(&caps[1]).unwrap_or_else(|| caps[0].to_owned())
        })
        .into_owned()
}

fn decode_reference(reference: &str) -> Option<String> {
    if let Some(hex) = reference
        .strip_prefix("#x")
        .or_else(|| reference.strip_prefix("#X"))
    {
        return u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from);
    }
    if let Some(dec) = reference.strip_prefix('#') {
        return dec.parse().ok().and_then(char::from_u32).map(String::from);
    }
    entity_to_unicode(reference).map(str::to_owned)
}

fn entity_to_unicode(name: &str) -> Option<&'static str> {
    Some(match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{00a0}",
        "mdash" => "\u{2014}",
        "ndash" => "\u{2013}",
        "hellip" => "\u{2026}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "rarr" => "\u{2192}",
        "larr" => "\u{2190}",
        "copy" => "\u{00a9}",
        "reg" => "\u{00ae}",
        "trade" => "\u{2122}",
        _ => return None,
    })
}
