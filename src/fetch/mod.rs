// src/fetch/mod.rs
//! Document fetchers: turn a URL into a parsed [`Document`].
//!
//! Fetch failures stop here. The runner turns a [`FetchError`] into one message
//! and does not attempt extraction.

mod http;
#[cfg(feature = "browser")]
mod browser;

pub use http::HttpFetcher;
#[cfg(feature = "browser")]
pub use browser::BrowserSession;

use thiserror::Error;
use tracing::info;

use crate::config::options::{FetchBackend, FetchOptions};
use crate::core::Document;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no URL given")]
    EmptyUrl,

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("browser error: {0}")]
    Browser(String),

    #[error("could not start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

pub trait Fetch {
    /// Raw HTML of the page at `url`.
    fn fetch_html(&mut self, url: &str) -> Result<String, FetchError>;

    /// Fetch and parse.
    fn fetch(&mut self, url: &str) -> Result<Document, FetchError> {
        let url = checked_url(url)?;
        let html = self.fetch_html(url)?;
        info!(url, bytes = html.len(), "document fetched");
        Ok(Document::parse(&html))
    }
}

/// URLs are only checked for being non-empty; everything else is the backend's call.
pub fn checked_url(url: &str) -> Result<&str, FetchError> {
    let url = url.trim();
    if url.is_empty() { Err(FetchError::EmptyUrl) } else { Ok(url) }
}

/// Open the configured backend. A browser session lives until the box is dropped.
pub fn open_fetcher(options: &FetchOptions) -> Result<Box<dyn Fetch>, FetchError> {
    match options.backend {
        FetchBackend::Http => Ok(Box::new(HttpFetcher::new(options)?)),
        #[cfg(feature = "browser")]
        FetchBackend::Browser => Ok(Box::new(BrowserSession::launch(options)?)),
        #[cfg(not(feature = "browser"))]
        FetchBackend::Browser => Err(FetchError::Browser(s!(
            "this build has no browser support (enable the `browser` feature)"
        ))),
    }
}
