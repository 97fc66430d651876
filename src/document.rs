//! Queryable-document abstraction over the HTML parser.
//!
//! Checks read the page only through [`QueryableDocument`], so the parsing
//! backend is swappable. The shipped backend wraps `scraper`.

use scraper::{ElementRef, Html, Selector};

/// One selected element: attribute access plus collected text.
pub trait DocumentElement {
    fn attr(&self, name: &str) -> Option<&str>;
    fn text(&self) -> String;
}

/// Selector-based read access to a parsed document.
///
/// An unparseable selector matches nothing rather than failing; the
/// selectors used by the check catalogs are fixed strings.
pub trait QueryableDocument {
    type Element<'a>: DocumentElement
    where
        Self: 'a;

    fn select_first(&self, selector: &str) -> Option<Self::Element<'_>>;
    fn select_all(&self, selector: &str) -> Vec<Self::Element<'_>>;
}

/// `scraper`-backed document.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }
}

impl QueryableDocument for HtmlDocument {
    type Element<'a> = ElementRef<'a>;

    fn select_first(&self, selector: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(selector).ok()?;
        self.html.select(&selector).next()
    }

    fn select_all(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(selector) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl<'a> DocumentElement for ElementRef<'a> {
    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_first_returns_first_match() {
        let doc = HtmlDocument::parse("<html><body><p>one</p><p>two</p></body></html>");
        let first = doc.select_first("p").unwrap();
        assert_eq!(DocumentElement::text(&first), "one");
    }

    #[test]
    fn select_all_collects_in_document_order() {
        let doc = HtmlDocument::parse("<html><body><h2>A</h2><h3>B</h3></body></html>");
        let headings = doc.select_all("h2, h3");
        assert_eq!(headings.len(), 2);
        assert_eq!(DocumentElement::text(&headings[0]), "A");
    }

    #[test]
    fn attribute_access() {
        let doc = HtmlDocument::parse(r#"<html><head><meta name="robots" content="noindex"></head></html>"#);
        let meta = doc.select_first("meta[name='robots']").unwrap();
        assert_eq!(DocumentElement::attr(&meta, "content"), Some("noindex"));
        assert_eq!(DocumentElement::attr(&meta, "missing"), None);
    }

    #[test]
    fn bad_selector_matches_nothing() {
        let doc = HtmlDocument::parse("<html></html>");
        assert!(doc.select_first("!!not-a-selector").is_none());
        assert!(doc.select_all("!!not-a-selector").is_empty());
    }
}
