// src/runner.rs
//
// One scrape request: fetch once, extract every category, collect notices.
// A failed fetch ends the request; no partial extraction is attempted.

use tracing::{error, info};

use crate::{
    config::options::{AppOptions, ExtractionConfig},
    extract::{self, Category, Extraction},
    fetch::{Fetch, FetchError},
    progress::{NullProgress, Progress},
};

/// Informational, never a failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    NoTables,
    /// An enabled category found nothing.
    Empty(Category),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::NoTables => s!("No tables found on this page."),
            Notice::Empty(c) => format!("No {} found on this page.", c.label()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScrapeReport {
    pub url: String,
    pub title: Option<String>,
    pub results: Extraction,
    pub notices: Vec<Notice>,
}

/// The single message a front end shows for a failed request.
pub fn failure_message(e: &FetchError) -> String {
    format!("Error occurred: {e}")
}

/// Number of progress steps per request: fetch + every category.
pub const STEPS: usize = 1 + Category::ALL.len();

pub fn scrape(
    url: &str,
    options: &AppOptions,
    fetcher: &mut dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<ScrapeReport, FetchError> {
    let mut null = NullProgress;
    let p: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let url = url.trim();
    p.begin(STEPS);
    p.log("Scraping in progress…");

    let doc = match fetcher.fetch(url) {
        Ok(doc) => doc,
        Err(e) => {
            error!(url, "fetch failed: {e}");
            p.finish();
            return Err(e);
        }
    };
    p.fetched(url);

    let config = &options.extract;
    let results = extract::extract_with_progress(&doc, config, p);
    let notices = notices_for(&results, config);

    info!(
        url,
        tables = results.tables.len(),
        headlines = results.headlines.len(),
        links = results.links.len(),
        media = results.count(Category::Media),
        tags = results.count(Category::Tags),
        paragraphs = results.paragraphs.len(),
        notices = notices.len(),
        "scrape finished"
    );

    p.finish();

    Ok(ScrapeReport {
        url: s!(url),
        title: doc.title(),
        results,
        notices,
    })
}

/// Tables are always looked for; other categories only report when enabled.
pub fn notices_for(results: &Extraction, config: &ExtractionConfig) -> Vec<Notice> {
    let mut out = Vec::new();
    if results.tables.is_empty() {
        out.push(Notice::NoTables);
    }

    let enabled = [
        (Category::Headlines, config.scrape_headlines && !config.headline_tags.is_empty()),
        (Category::Links, config.scrape_links),
        (Category::Media, config.scrape_media),
        (Category::Tags, !config.tag_selectors.is_empty()),
        (Category::Paragraphs, config.scrape_paragraphs),
    ];
    for (category, on) in enabled {
        if on && results.count(category) == 0 {
            out.push(Notice::Empty(category));
        }
    }
    out
}
