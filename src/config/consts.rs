// src/config/consts.rs

// Extraction
pub const DEFAULT_TABLE_CLASS: &str = "wikitable";
pub const HEADLINE_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];
pub const TAG_CHOICES: [&str; 7] = ["p", "span", "div", "li", "ul", "ol", "a"];

// Fetch
pub const USER_AGENT: &str = concat!("web_scrape/", env!("CARGO_PKG_VERSION"));
pub const FETCH_TIMEOUT_SECS: u64 = 30;
pub const RENDER_SETTLE_MS: u64 = 2_000; // let client-side scripts finish
pub const MAX_REDIRECTS: usize = 5;

// Export
pub const DEFAULT_FILE: &str = "scraped_data";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
