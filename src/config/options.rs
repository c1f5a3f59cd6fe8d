// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::core::sanitize::sanitize_file_stem;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub extract: ExtractionConfig,
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

/* ---------------- Extraction ---------------- */

/// Which content categories one scrape collects.
///
/// Tag lists keep the order the caller selected them in and never hold
/// duplicates; headline output is grouped by that order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractionConfig {
    pub scrape_headlines: bool,
    pub headline_tags: Vec<String>,
    pub scrape_links: bool,
    pub scrape_media: bool,
    pub tag_selectors: Vec<String>,
    pub scrape_paragraphs: bool,
    /// Marker class a `<table>` must carry to be extracted.
    pub table_class: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            scrape_headlines: false,
            headline_tags: Vec::new(),
            scrape_links: false,
            scrape_media: false,
            tag_selectors: Vec::new(),
            scrape_paragraphs: false,
            table_class: s!(DEFAULT_TABLE_CLASS),
        }
    }
}

impl ExtractionConfig {
    /// Every category on, all headline levels, no extra tags.
    pub fn everything() -> Self {
        Self {
            scrape_headlines: true,
            headline_tags: HEADLINE_TAGS.iter().map(|t| s!(*t)).collect(),
            scrape_links: true,
            scrape_media: true,
            scrape_paragraphs: true,
            ..Self::default()
        }
    }

    pub fn select_headline_tag(&mut self, tag: &str, selected: bool) {
        toggle_in(&mut self.headline_tags, tag, selected);
    }

    pub fn select_tag(&mut self, tag: &str, selected: bool) {
        toggle_in(&mut self.tag_selectors, tag, selected);
    }
}

fn toggle_in(list: &mut Vec<String>, tag: &str, selected: bool) {
    let tag = tag.trim().to_ascii_lowercase();
    if tag.is_empty() {
        return;
    }
    let pos = list.iter().position(|t| *t == tag);
    match (selected, pos) {
        (true, None) => list.push(tag),
        (false, Some(i)) => {
            list.remove(i);
        }
        _ => {}
    }
}

/* ---------------- Fetch ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchBackend {
    /// Plain HTTP GET; no script execution.
    Http,
    /// Headless Chromium; sees the DOM after scripts ran.
    Browser,
}

impl FetchBackend {
    pub fn label(self) -> &'static str {
        match self {
            FetchBackend::Http => "HTTP",
            FetchBackend::Browser => "Headless browser",
        }
    }
}

impl Default for FetchBackend {
    fn default() -> Self {
        if cfg!(feature = "browser") { FetchBackend::Browser } else { FetchBackend::Http }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub backend: FetchBackend,
    pub timeout_secs: u64,
    pub settle_ms: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            backend: FetchBackend::default(),
            timeout_secs: FETCH_TIMEOUT_SECS,
            settle_ms: RENDER_SETTLE_MS,
        }
    }
}

impl FetchOptions {
    pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }
    pub fn settle(&self) -> Duration { Duration::from_millis(self.settle_ms) }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    pub fn content_type(&self) -> &'static str {
        match self { ExportFormat::Csv => "text/csv", ExportFormat::Tsv => "text/tab-separated-values" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension always follows the format.
    pub fn out_path(&self) -> PathBuf {
        self.out_path.dir.join(self.file_name())
    }

    pub fn file_name(&self) -> String {
        let stem = self.out_path.file_stem.to_string_lossy();
        join!(stem.as_ref(), ".", self.format.ext())
    }

    /// Parse user text into dir + stem. Ignores a pasted extension; format controls it.
    /// A trailing separator means "directory, keep the current file name".
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = OutputPath::default();
            return;
        }
        if s.ends_with('/') || s.ends_with('\\') {
            self.out_path.dir = PathBuf::from(s);
            return;
        }

        let p = Path::new(s);
        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            let clean = sanitize_file_stem(&stem.to_string_lossy());
            self.out_path.file_stem = OsString::from(clean);
        }
    }

    pub fn delim(&self) -> char { self.format.delim() }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::new(),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_export_is_scraped_data_csv() {
        let export = ExportOptions::default();
        assert_eq!(export.out_path(), PathBuf::from("scraped_data.csv"));
        assert_eq!(export.format.content_type(), "text/csv");
    }

    #[test]
    fn extension_follows_format() {
        let mut export = ExportOptions::default();
        export.set_path("out/report.txt");
        assert_eq!(export.out_path(), Path::new("out").join("report.csv"));

        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), Path::new("out").join("report.tsv"));
    }

    #[test]
    fn trailing_separator_keeps_file_name() {
        let mut export = ExportOptions::default();
        export.set_path("exports/");
        assert!(export.out_path().ends_with("scraped_data.csv"));
        assert!(export.out_path().starts_with("exports"));
    }

    #[test]
    fn tag_toggles_keep_order_and_dedup() {
        let mut cfg = ExtractionConfig::default();
        cfg.select_headline_tag("h2", true);
        cfg.select_headline_tag("H1", true);
        cfg.select_headline_tag("h2", true);
        assert_eq!(cfg.headline_tags, vec!["h2", "h1"]);

        cfg.select_headline_tag("h2", false);
        assert_eq!(cfg.headline_tags, vec!["h1"]);
    }
}
