// src/extract/text.rs
use tracing::debug;

use crate::config::options::ExtractionConfig;
use crate::core::{Document, html::element_text};
use super::types::{HeadlineResult, LinkResult, ParagraphResult, TagTextResult};

/// Texts of every element named `tag`, trimmed, in document order.
fn texts_of(doc: &Document, tag: &str) -> Vec<String> {
    doc.elements_named(tag).map(|el| element_text(&el)).collect()
}

/// Headline texts grouped by requested tag order; document order within a tag.
pub fn extract_headlines(doc: &Document, config: &ExtractionConfig) -> HeadlineResult {
    if !config.scrape_headlines {
        return Vec::new();
    }
    let mut out = Vec::new();
    for tag in &config.headline_tags {
        out.extend(texts_of(doc, tag));
    }
    debug!(tags = ?config.headline_tags, count = out.len(), "headlines extracted");
    out
}

/// `href` of every anchor whose value starts with `http`. Relative links are dropped, not resolved.
pub fn extract_links(doc: &Document, config: &ExtractionConfig) -> LinkResult {
    if !config.scrape_links {
        return Vec::new();
    }
    let links: LinkResult = doc
        .attr_values("a", "href")
        .filter(|href| href.starts_with("http"))
        .map(|href| s!(href))
        .collect();
    debug!(count = links.len(), "links extracted");
    links
}

/// One entry per requested tag, even when it matched nothing.
pub fn extract_tag_text(doc: &Document, config: &ExtractionConfig) -> TagTextResult {
    let mut out = TagTextResult::new();
    for tag in &config.tag_selectors {
        let texts = texts_of(doc, tag);
        debug!(tag = %tag, count = texts.len(), "tag texts extracted");
        out.insert(tag.clone(), texts);
    }
    out
}

pub fn extract_paragraphs(doc: &Document, config: &ExtractionConfig) -> ParagraphResult {
    if !config.scrape_paragraphs {
        return Vec::new();
    }
    let paragraphs = texts_of(doc, "p");
    debug!(count = paragraphs.len(), "paragraphs extracted");
    paragraphs
}
