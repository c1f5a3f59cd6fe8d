// tests/runner.rs
use web_scrape::config::options::AppOptions;
use web_scrape::extract::Category;
use web_scrape::fetch::{Fetch, FetchError};
use web_scrape::progress::Progress;
use web_scrape::runner::{self, Notice};

/// Serves one canned page and counts calls.
struct Canned {
    html: &'static str,
    calls: usize,
}

impl Fetch for Canned {
    fn fetch_html(&mut self, _url: &str) -> Result<String, FetchError> {
        self.calls += 1;
        Ok(self.html.to_string())
    }
}

struct Failing;

impl Fetch for Failing {
    fn fetch_html(&mut self, url: &str) -> Result<String, FetchError> {
        Err(FetchError::Timeout { url: url.to_string() })
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    fetched: Vec<String>,
    categories: Vec<(Category, usize)>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn fetched(&mut self, url: &str) { self.fetched.push(url.to_string()); }
    fn category_done(&mut self, category: Category, count: usize) {
        self.categories.push((category, count));
    }
    fn finish(&mut self) { self.finished = true; }
}

const PAGE: &str = r#"<title>T</title>
<table class="wikitable"><tr><th>A</th></tr><tr><td>1</td></tr></table>
<h1>Head</h1><a href="https://x.test">x</a>"#;

#[test]
fn successful_request_reports_every_category() {
    let mut opts = AppOptions::default();
    opts.extract.scrape_links = true;
    opts.extract.scrape_paragraphs = true;

    let mut fetcher = Canned { html: PAGE, calls: 0 };
    let mut rec = Recorder::default();
    let report = runner::scrape(" https://x.test ", &opts, &mut fetcher, Some(&mut rec)).unwrap();

    assert_eq!(fetcher.calls, 1);
    assert_eq!(report.url, "https://x.test");
    assert_eq!(report.title.as_deref(), Some("T"));
    assert_eq!(report.results.tables.len(), 1);
    assert_eq!(report.results.links, vec!["https://x.test"]);
    assert!(report.results.headlines.is_empty());

    // Paragraphs were asked for and found nothing; headlines were not asked for.
    assert_eq!(report.notices, vec![Notice::Empty(Category::Paragraphs)]);

    assert_eq!(rec.total, runner::STEPS);
    assert_eq!(rec.fetched, vec!["https://x.test"]);
    let order: Vec<Category> = rec.categories.iter().map(|(c, _)| *c).collect();
    assert_eq!(order, Category::ALL);
    assert!(rec.finished);
}

#[test]
fn missing_tables_is_a_notice_not_a_failure() {
    let mut fetcher = Canned { html: "<p>nothing tabular</p>", calls: 0 };
    let report = runner::scrape("https://x.test", &AppOptions::default(), &mut fetcher, None).unwrap();
    assert_eq!(report.notices, vec![Notice::NoTables]);
    assert_eq!(report.notices[0].message(), "No tables found on this page.");
}

#[test]
fn failed_fetch_skips_extraction() {
    let mut rec = Recorder::default();
    let err = runner::scrape("https://slow.test", &AppOptions::default(), &mut Failing, Some(&mut rec))
        .unwrap_err();

    assert!(matches!(err, FetchError::Timeout { .. }));
    assert_eq!(runner::failure_message(&err), "Error occurred: request to https://slow.test timed out");
    assert!(rec.fetched.is_empty());
    assert!(rec.categories.is_empty());
    assert!(rec.finished);
}

#[test]
fn blank_url_never_reaches_the_backend() {
    let mut fetcher = Canned { html: PAGE, calls: 0 };
    let err = runner::scrape("   ", &AppOptions::default(), &mut fetcher, None).unwrap_err();
    assert!(matches!(err, FetchError::EmptyUrl));
    assert_eq!(fetcher.calls, 0);
}
