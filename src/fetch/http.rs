// src/fetch/http.rs
// Plain HTTP GET. Sees the server's HTML only; no scripts run.

use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use tracing::debug;

use crate::config::consts::{MAX_REDIRECTS, USER_AGENT};
use crate::config::options::FetchOptions;
use super::{Fetch, FetchError};

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(options: &FetchOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(options.timeout())
            .user_agent(USER_AGENT)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch_html(&mut self, url: &str) -> Result<String, FetchError> {
        debug!(url, "GET");
        let resp = self.client.get(url).send().map_err(|e| map_err(e, url))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
        }
        resp.text().map_err(|e| map_err(e, url))
    }
}

fn map_err(e: reqwest::Error, url: &str) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout { url: s!(url) }
    } else {
        FetchError::Http(e)
    }
}
