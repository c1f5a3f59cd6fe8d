// src/extract/mod.rs
//! # Extraction engine
//!
//! Pure functions from a parsed [`Document`] plus an [`ExtractionConfig`] to
//! typed results. Nothing here does I/O, keeps state between calls, or fails:
//! a category that is switched off, or that matches nothing, yields an empty
//! collection.
//!
//! ## Ordering contracts
//! - Tables, links, media, paragraphs: document order.
//! - Headlines: grouped by the order of `headline_tags`, document order inside a group.
//! - Tag texts: one key per requested tag, in request order; document order per key.
//!
//! ## Typical call chain
//! ```text
//! runner::scrape → fetch::Fetch::fetch → Document
//!               ↘ extract::extract_all(&doc, &config) → Extraction
//!                    aggregate::aggregate(&Extraction) → export
//! ```

mod media;
mod tables;
mod text;
mod types;

pub use media::extract_media;
pub use tables::{extract_tables, extract_tables_with_class};
pub use text::{extract_headlines, extract_links, extract_paragraphs, extract_tag_text};
pub use types::*;

use crate::config::options::ExtractionConfig;
use crate::core::Document;
use crate::progress::{NullProgress, Progress};

/// Run every category against one document.
pub fn extract_all(doc: &Document, config: &ExtractionConfig) -> Extraction {
    extract_with_progress(doc, config, &mut NullProgress)
}

/// Same as [`extract_all`], reporting each finished category.
pub fn extract_with_progress(
    doc: &Document,
    config: &ExtractionConfig,
    progress: &mut dyn Progress,
) -> Extraction {
    let mut done = |category: Category, count: usize| progress.category_done(category, count);

    let tables = extract_tables_with_class(doc, &config.table_class);
    done(Category::Tables, tables.len());

    let headlines = extract_headlines(doc, config);
    done(Category::Headlines, headlines.len());

    let links = extract_links(doc, config);
    done(Category::Links, links.len());

    let media = extract_media(doc, config);
    done(Category::Media, media.images.len() + media.videos.len() + media.audios.len());

    let tags = extract_tag_text(doc, config);
    done(Category::Tags, tags.values().map(Vec::len).sum());

    let paragraphs = extract_paragraphs(doc, config);
    done(Category::Paragraphs, paragraphs.len());

    Extraction { tables, headlines, links, media, tags, paragraphs }
}
