// tests/export_e2e.rs
use std::fs;

mod common;

use common::parse_rows;
use web_scrape::aggregate::aggregate;
use web_scrape::config::options::{ExportFormat, ExportOptions};
use web_scrape::extract::Extraction;
use web_scrape::file::{self, ExportError};

fn sample() -> Extraction {
    let mut ex = Extraction::default();
    ex.headlines = vec!["Title".into(), "Sub, with comma".into()];
    ex.links = vec!["https://a.test".into()];
    ex
}

#[test]
fn writes_csv_and_creates_missing_dirs() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::default();
    opts.set_path(tmp.path().join("nested/dir/page.txt").to_str().unwrap());

    let written = file::write_export(&opts, &aggregate(&sample())).unwrap();
    assert_eq!(written, tmp.path().join("nested/dir/page.csv"));

    let text = fs::read_to_string(&written).unwrap();
    let rows = parse_rows(&text, ',');
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][1], "Headlines");
    assert_eq!(rows[2][1], "Sub, with comma");
    assert_eq!(rows[2][2], "");
}

#[test]
fn tsv_switches_extension_and_delimiter() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::default();
    opts.set_path(&format!("{}/", tmp.path().display()));
    opts.format = ExportFormat::Tsv;

    let written = file::write_export(&opts, &aggregate(&sample())).unwrap();
    assert!(written.ends_with("scraped_data.tsv"));
    let text = fs::read_to_string(&written).unwrap();
    assert!(text.starts_with("Tables\tHeadlines\tLinks\t"));
}

#[test]
fn nothing_found_still_writes_header_line() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::default();
    opts.set_path(tmp.path().join("empty").to_str().unwrap());

    let written = file::write_export(&opts, &aggregate(&Extraction::default())).unwrap();
    assert_eq!(
        fs::read_to_string(written).unwrap(),
        "Tables,Headlines,Links,Images,Videos,Audios,Tags,P_Tags\n"
    );

    opts.include_headers = false;
    let err = file::write_export(&opts, &aggregate(&Extraction::default())).unwrap_err();
    assert!(matches!(err, ExportError::Empty));
}

#[test]
fn file_in_place_of_directory_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let mut opts = ExportOptions::default();
    opts.set_path(blocker.join("out").to_str().unwrap());
    let err = file::write_export(&opts, &aggregate(&sample())).unwrap_err();
    assert!(matches!(err, ExportError::NotADirectory(_)));
}
