// src/gui/actions/scrape.rs
use tracing::{error, info};

use crate::{
    aggregate,
    fetch,
    gui::{app::App, progress::GuiProgress},
    runner,
};

/// Run one request with the current options. Replaces the previous results
/// on success; on failure clears them and shows the error instead.
pub fn scrape(app: &mut App) {
    let url = app.state.gui.url.trim().to_string();
    let options = &app.state.options;

    info!(url = %url, backend = ?options.fetch.backend, "Scrape: Begin");
    app.status("Scraping in progress…");

    let mut prog = GuiProgress::new(app.status.clone());
    let res = fetch::open_fetcher(&options.fetch)
        .and_then(|mut fetcher| runner::scrape(&url, options, fetcher.as_mut(), Some(&mut prog)));

    match res {
        Ok(report) => {
            info!(url = %url, notices = report.notices.len(), "Scrape: OK");
            app.export = Some(aggregate::aggregate(&report.results));
            app.report = Some(report);
            app.error = None;
        }
        Err(e) => {
            error!(url = %url, "Scrape: Error: {e}");
            let msg = runner::failure_message(&e);
            app.report = None;
            app.export = None;
            app.status(msg.clone());
            app.error = Some(msg);
        }
    }
}
