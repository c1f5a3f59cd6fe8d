// src/core/html.rs
//
// Read-only document tree handed from the fetcher to the extraction engine.
// Element lookups walk the tree in document order; tag names are matched
// ASCII case-insensitively, so arbitrary user-typed tag names never need
// to go through a CSS selector parser.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::trim_text;

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(source: &str) -> Self {
        Self { html: Html::parse_document(source) }
    }

    /// All elements with this tag name, in document order.
    pub fn elements_named<'a>(&'a self, tag: &str) -> impl Iterator<Item = ElementRef<'a>> + use<'a> {
        let tag = tag.trim().to_ascii_lowercase();
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(move |el| el.value().name() == tag)
    }

    /// Attribute values of every `tag` element that carries `attr`, in document order.
    /// Present-but-empty attributes are kept.
    pub fn attr_values<'a>(&'a self, tag: &str, attr: &'a str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.elements_named(tag).filter_map(move |el| el.value().attr(attr))
    }

    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> scraper::html::Select<'a, 'b> {
        self.html.select(selector)
    }

    pub fn title(&self) -> Option<String> {
        self.select(sel!("title"))
            .next()
            .map(|el| element_text(&el))
            .filter(|t| !t.is_empty())
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document").field("title", &self.title()).finish()
    }
}

/// Full descendant text of an element, trimmed at both ends.
pub fn element_text(el: &ElementRef<'_>) -> String {
    trim_text(&el.text().collect::<String>())
}

pub fn has_class(el: &ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_named_is_case_insensitive_and_ordered() {
        let doc = Document::parse("<div>a</div><p>b</p><DIV>c</DIV>");
        let texts: Vec<String> = doc.elements_named("Div").map(|e| element_text(&e)).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn unknown_or_odd_tag_names_match_nothing() {
        let doc = Document::parse("<p>x</p>");
        assert_eq!(doc.elements_named("no such>tag").count(), 0);
        assert_eq!(doc.elements_named("").count(), 0);
    }

    #[test]
    fn title_is_trimmed() {
        let doc = Document::parse("<html><head><title>  Page  </title></head></html>");
        assert_eq!(doc.title().as_deref(), Some("Page"));
    }
}
