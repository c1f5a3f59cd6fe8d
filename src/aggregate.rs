// src/aggregate.rs
//
// Flatten one Extraction into a single rectangular record set for export.
// Columns are fixed and ordered; each column is a list of its own entries,
// and shorter columns are padded with `None` up to the longest one.
// Rows are NOT related across columns: row N is just "entry N of each list".

use crate::config::options::ExportOptions;
use crate::csv;
use crate::extract::Extraction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportColumn {
    Tables,
    Headlines,
    Links,
    Images,
    Videos,
    Audios,
    Tags,
    PTags,
}

impl ExportColumn {
    pub const ALL: [ExportColumn; 8] = [
        ExportColumn::Tables,
        ExportColumn::Headlines,
        ExportColumn::Links,
        ExportColumn::Images,
        ExportColumn::Videos,
        ExportColumn::Audios,
        ExportColumn::Tags,
        ExportColumn::PTags,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExportColumn::Tables => "Tables",
            ExportColumn::Headlines => "Headlines",
            ExportColumn::Links => "Links",
            ExportColumn::Images => "Images",
            ExportColumn::Videos => "Videos",
            ExportColumn::Audios => "Audios",
            ExportColumn::Tags => "Tags",
            ExportColumn::PTags => "P_Tags",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// This column's entries, unpadded.
    fn entries(self, ex: &Extraction) -> Vec<String> {
        match self {
            ExportColumn::Tables => ex.tables.iter().map(|t| t.to_cell_text()).collect(),
            ExportColumn::Headlines => ex.headlines.clone(),
            ExportColumn::Links => ex.links.clone(),
            ExportColumn::Images => ex.media.images.clone(),
            ExportColumn::Videos => ex.media.videos.clone(),
            ExportColumn::Audios => ex.media.audios.clone(),
            ExportColumn::Tags => ex
                .tags
                .iter()
                .flat_map(|(tag, texts)| texts.iter().map(move |t| format!("{tag}: {t}")))
                .collect(),
            ExportColumn::PTags => ex.paragraphs.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregatedExport {
    rows: Vec<Vec<Option<String>>>,
}

/// Combine all result collections into one padded record set.
pub fn aggregate(ex: &Extraction) -> AggregatedExport {
    let columns: Vec<Vec<String>> = ExportColumn::ALL.iter().map(|c| c.entries(ex)).collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    let mut iters: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();
    let rows = (0..height)
        .map(|_| iters.iter_mut().map(|it| it.next()).collect())
        .collect();

    AggregatedExport { rows }
}

impl AggregatedExport {
    pub fn headers(&self) -> Vec<&'static str> {
        ExportColumn::ALL.iter().map(|c| c.label()).collect()
    }

    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn column_count(&self) -> usize { ExportColumn::ALL.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// One column top to bottom, padding included.
    pub fn column(&self, col: ExportColumn) -> Vec<Option<&str>> {
        let i = col.index();
        self.rows.iter().map(|r| r[i].as_deref()).collect()
    }

    /// Serialize per export options; padding becomes an empty field.
    pub fn to_delimited(&self, export: &ExportOptions) -> String {
        let sep = export.delim();
        let mut buf: Vec<u8> = Vec::new();

        // Writing into a Vec<u8> cannot fail.
        if export.include_headers {
            let _ = csv::write_row(&mut buf, self.headers(), sep);
        }
        for row in &self.rows {
            let cells = row.iter().map(|c| c.as_deref().unwrap_or(""));
            let _ = csv::write_row(&mut buf, cells, sep);
        }

        csv::bytes_to_string(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_in_fixed_order() {
        let labels: Vec<&str> = ExportColumn::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Tables", "Headlines", "Links", "Images", "Videos", "Audios", "Tags", "P_Tags"]);
        assert!(ExportColumn::ALL.iter().enumerate().all(|(i, c)| c.index() == i));
    }

    #[test]
    fn empty_extraction_gives_header_only() {
        let agg = aggregate(&Extraction::default());
        assert!(agg.is_empty());
        let text = agg.to_delimited(&ExportOptions::default());
        assert_eq!(text, "Tables,Headlines,Links,Images,Videos,Audios,Tags,P_Tags\n");
    }
}
