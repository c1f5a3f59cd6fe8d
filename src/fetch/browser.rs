// src/fetch/browser.rs
//
// Headless Chromium session. One session owns one browser process and a
// private single-threaded tokio runtime that drives it; callers stay
// synchronous. The process is torn down on every exit path: `close()`
// does it explicitly, `Drop` does it otherwise.

use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::consts::USER_AGENT;
use crate::config::options::FetchOptions;
use super::{Fetch, FetchError};

pub struct BrowserSession {
    runtime: Runtime,
    browser: Option<Browser>,
    handler: Option<JoinHandle<()>>,
    timeout: Duration,
    settle: Duration,
}

impl BrowserSession {
    pub fn launch(options: &FetchOptions) -> Result<Self, FetchError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;

        let config = BrowserConfig::builder()
            .no_sandbox()
            .request_timeout(options.timeout())
            .arg("--disable-gpu")
            .arg(format!("--user-agent={USER_AGENT}"))
            .build()
            .map_err(FetchError::Browser)?;

        let (browser, handler) = runtime.block_on(async {
            let (browser, mut handler) = Browser::launch(config)
                .await
                .map_err(|e| FetchError::Browser(format!("launch failed: {e}")))?;

            // The CDP handler must be polled for the browser to make progress.
            let task = tokio::spawn(async move {
                while let Some(event) = handler.next().await {
                    if let Err(e) = event {
                        debug!("browser handler: {e}");
                    }
                }
            });
            Ok::<_, FetchError>((browser, task))
        })?;

        info!("browser session started");
        Ok(Self {
            runtime,
            browser: Some(browser),
            handler: Some(handler),
            timeout: options.timeout(),
            settle: options.settle(),
        })
    }

    /// Shut the browser down now instead of at drop.
    pub fn close(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(mut browser) = self.browser.take() {
            self.runtime.block_on(async {
                if let Err(e) = browser.close().await {
                    warn!("browser close: {e}");
                }
                if let Err(e) = browser.wait().await {
                    warn!("browser wait: {e}");
                }
            });
            info!("browser session closed");
        }
        if let Some(handler) = self.handler.take() {
            handler.abort();
        }
    }
}

impl Fetch for BrowserSession {
    fn fetch_html(&mut self, url: &str) -> Result<String, FetchError> {
        let browser = self
            .browser
            .as_ref()
            .ok_or_else(|| FetchError::Browser(s!("session already closed")))?;
        let (timeout, settle) = (self.timeout, self.settle);

        self.runtime.block_on(async {
            let render = async {
                let page = browser.new_page(url).await?;
                page.wait_for_navigation().await?;
                tokio::time::sleep(settle).await;
                let html = page.content().await;
                let _ = page.close().await;
                html
            };

            match tokio::time::timeout(timeout + settle, render).await {
                Ok(Ok(html)) => {
                    debug!(url, bytes = html.len(), "page rendered");
                    Ok(html)
                }
                Ok(Err(e)) => Err(FetchError::Browser(format!("render failed: {e}"))),
                Err(_) => Err(FetchError::Timeout { url: s!(url) }),
            }
        })
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.teardown();
    }
}
