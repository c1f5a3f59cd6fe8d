// src/log.rs
//
// tracing subscriber setup. The CLI logs to stderr; the GUI has no console
// and appends to `.store/debug.log` instead.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// stderr, `warn` by default, `debug` with `verbose`. `RUST_LOG` wins over both.
pub fn init_cli(verbose: bool) {
    let default = if verbose { "web_scrape=debug,info" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Append to the debug log file; falls back to stderr if it cannot be opened.
pub fn init_gui() {
    let path = log_path();
    let file = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter("web_scrape=debug,warn"))
        .with_ansi(false);

    let _ = match file {
        Ok(f) => builder.with_writer(Mutex::new(f)).try_init(),
        Err(_) => builder.with_writer(std::io::stderr).try_init(),
    };
}
