//! XML sitemap rendering.

use std::io;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const CHANGE_FREQUENCY: &str = "monthly";

/// Render a sitemap listing the site root followed by every path.
///
/// Paths are joined to `base_url` with exactly one `/` between them.
///
/// # Errors
///
/// Returns an error only if the XML writer fails, which an in-memory buffer
/// does not.
///
/// # Examples
///
/// ```
/// let xml = quire_site::sitemap::render("https://example.com/", ["/docs/a"]).unwrap();
///
/// assert!(xml.contains("<loc>https://example.com/</loc>"));
/// assert!(xml.contains("<loc>https://example.com/docs/a</loc>"));
/// ```
pub fn render<'a>(base_url: &str, paths: impl IntoIterator<Item = &'a str>) -> io::Result<String> {
    let base = base_url.trim_end_matches('/');
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NAMESPACE)]),
    ))?;

    write_url(&mut writer, &format!("{base}/"))?;
    for path in paths {
        write_url(&mut writer, &join_url(base, path))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn write_url(writer: &mut Writer<Vec<u8>>, loc: &str) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("url")))?;
    write_text_element(writer, "loc", loc)?;
    write_text_element(writer, "changefreq", CHANGE_FREQUENCY)?;
    writer.write_event(Event::End(BytesEnd::new("url")))
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))
}

/// Join a base URL without trailing slash and a path with one `/`.
fn join_url(base: &str, path: &str) -> String {
    format!("{base}/{}", path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_sitemap() {
        let xml = render(
            "https://docs.example.com",
            ["/docs/frontend/html/cheatsheet", "/docs/dev-tools/git"],
        )
        .unwrap();

        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://docs.example.com/</loc>
    <changefreq>monthly</changefreq>
  </url>
  <url>
    <loc>https://docs.example.com/docs/frontend/html/cheatsheet</loc>
    <changefreq>monthly</changefreq>
  </url>
  <url>
    <loc>https://docs.example.com/docs/dev-tools/git</loc>
    <changefreq>monthly</changefreq>
  </url>
</urlset>"#;
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_render_joins_with_single_slash() {
        let xml = render("https://docs.example.com//", ["docs/a", "/docs/b"]).unwrap();

        assert!(xml.contains("<loc>https://docs.example.com/</loc>"));
        assert!(xml.contains("<loc>https://docs.example.com/docs/a</loc>"));
        assert!(xml.contains("<loc>https://docs.example.com/docs/b</loc>"));
        assert!(!xml.contains("com//"));
    }

    #[test]
    fn test_render_escapes_text() {
        let xml = render("https://docs.example.com", ["/docs/search?q=a&b"]).unwrap();

        assert!(xml.contains("<loc>https://docs.example.com/docs/search?q=a&amp;b</loc>"));
    }

    #[test]
    fn test_render_without_paths_lists_root() {
        let xml = render("http://localhost:3000", std::iter::empty()).unwrap();

        assert_eq!(xml.matches("<url>").count(), 1);
        assert!(xml.contains("<loc>http://localhost:3000/</loc>"));
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://a.example", "/docs/x"), "https://a.example/docs/x");
        assert_eq!(join_url("https://a.example", "docs/x"), "https://a.example/docs/x");
    }
}
