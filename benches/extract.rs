// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use web_scrape::aggregate::aggregate;
use web_scrape::config::options::ExtractionConfig;
use web_scrape::core::Document;
use web_scrape::extract::extract_all;

/// A wiki-like page: a few marked tables plus lots of prose and links.
fn synthetic_page() -> String {
    let mut html = String::from("<html><head><title>Bench</title></head><body>");
    for s in 0..40 {
        html.push_str(&format!("<h2>Section {s}</h2><h3>Sub {s}</h3>"));
        for p in 0..10 {
            html.push_str(&format!(
                "<p>Paragraph {p} of {s} with <a href=\"https://example.com/{s}/{p}\">a link</a> \
                 and <a href=\"/wiki/{p}\">a relative one</a>.</p>"
            ));
        }
        html.push_str(&format!("<img src=\"/img/{s}.png\"><div>box {s}</div>"));
        if s % 10 == 0 {
            html.push_str("<table class=\"wikitable\"><tr><th>Key</th><th>Value</th><th>Note</th></tr>");
            for r in 0..50 {
                html.push_str(&format!("<tr><td>k{r}</td><td>{r}</td><td>n</td></tr>"));
            }
            html.push_str("</table>");
        }
    }
    html.push_str("</body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let page = synthetic_page();
    let mut config = ExtractionConfig::everything();
    config.select_tag("div", true);
    config.select_tag("a", true);

    c.bench_function("parse", |b| {
        b.iter(|| Document::parse(black_box(&page)))
    });

    let doc = Document::parse(&page);
    c.bench_function("extract_all", |b| {
        b.iter(|| {
            let ex = extract_all(black_box(&doc), &config);
            black_box(ex.links.len())
        })
    });

    let ex = extract_all(&doc, &config);
    c.bench_function("aggregate", |b| {
        b.iter(|| black_box(aggregate(black_box(&ex)).row_count()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
