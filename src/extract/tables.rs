// src/extract/tables.rs
//
// Qualifying tables → TableResult.
//
// Shape rules:
// - the first <tr> is the header row; only its <th> cells become headers
// - every later <tr> is a data row of <th>/<td> cells
// - data rows are padded with "" or truncated to the header count
// - no <th> in the first row → headers "Column 1..N", N = widest row, and the
//   first row stays in the data
// - a table without any <tr> → empty TableResult

use scraper::ElementRef;
use tracing::debug;

use crate::config::consts::DEFAULT_TABLE_CLASS;
use crate::core::{Document, html::{element_text, has_class}};
use super::types::TableResult;

/// Tables carrying the default marker class.
pub fn extract_tables(doc: &Document) -> Vec<TableResult> {
    extract_tables_with_class(doc, DEFAULT_TABLE_CLASS)
}

pub fn extract_tables_with_class(doc: &Document, class: &str) -> Vec<TableResult> {
    let tables: Vec<TableResult> = doc
        .elements_named("table")
        .filter(|t| has_class(t, class))
        .map(|t| table_result(&t))
        .collect();
    debug!(class, count = tables.len(), "tables extracted");
    tables
}

fn table_result(table: &ElementRef<'_>) -> TableResult {
    let mut rows = table.select(sel!("tr"));
    let Some(head) = rows.next() else {
        return TableResult::default();
    };

    let cells = |row: ElementRef<'_>| -> Vec<String> {
        row.select(sel!("th, td")).map(|c| element_text(&c)).collect()
    };

    let headers: Vec<String> = head.select(sel!("th")).map(|c| element_text(&c)).collect();
    let mut body: Vec<Vec<String>> = Vec::new();
    if headers.is_empty() {
        // No header cells: the first row is data like the rest.
        let first = cells(head);
        if !first.is_empty() {
            body.push(first);
        }
    }
    body.extend(rows.map(cells));

    normalize(headers, body)
}

pub(crate) fn normalize(mut headers: Vec<String>, mut rows: Vec<Vec<String>>) -> TableResult {
    if headers.is_empty() {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        headers = (1..=width).map(|i| format!("Column {i}")).collect();
    }

    let width = headers.len();
    for row in &mut rows {
        if row.len() != width {
            debug!(expected = width, found = row.len(), "ragged table row");
            row.resize(width, s!());
        }
    }
    TableResult { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(xs: &[&str]) -> Vec<String> { xs.iter().map(|x| s!(*x)).collect() }

    #[test]
    fn short_rows_padded_long_rows_truncated() {
        let t = normalize(v(&["A", "B"]), vec![v(&["1"]), v(&["1", "2", "3"])]);
        assert_eq!(t.rows, vec![v(&["1", ""]), v(&["1", "2"])]);
    }

    #[test]
    fn missing_headers_are_synthesized() {
        let t = normalize(Vec::new(), vec![v(&["x"]), v(&["x", "y", "z"])]);
        assert_eq!(t.headers, v(&["Column 1", "Column 2", "Column 3"]));
        assert!(t.rows.iter().all(|r| r.len() == 3));
    }

    #[test]
    fn empty_table_stays_empty() {
        let t = normalize(Vec::new(), Vec::new());
        assert!(t.is_empty());
    }
}
