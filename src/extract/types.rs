// src/extract/types.rs
use indexmap::IndexMap;

/// One qualifying table: header labels plus rows aligned to them.
/// Every row has exactly `headers.len()` cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableResult {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableResult {
    pub fn width(&self) -> usize { self.headers.len() }
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.headers.is_empty() && self.rows.is_empty() }

    /// Header line then one line per row, comma-separated, no trailing newline.
    /// This is how a whole table fits into one export cell.
    pub fn to_cell_text(&self) -> String {
        let headers = (!self.headers.is_empty()).then_some(self.headers.as_slice());
        let text = crate::csv::rows_to_string(headers, &self.rows, ',');
        text.trim_end_matches('\n').to_string()
    }
}

pub type HeadlineResult = Vec<String>;
pub type LinkResult = Vec<String>;
pub type ParagraphResult = Vec<String>;

/// Requested tag name → texts, in the order the tags were requested.
/// A requested tag with no matches maps to an empty list.
pub type TagTextResult = IndexMap<String, Vec<String>>;

/// `src` attributes of media elements, by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaResult {
    pub images: Vec<String>,
    pub videos: Vec<String>,
    pub audios: Vec<String>,
}

impl MediaResult {
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.videos.is_empty() && self.audios.is_empty()
    }
}

/// Everything one extraction request produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub tables: Vec<TableResult>,
    pub headlines: HeadlineResult,
    pub links: LinkResult,
    pub media: MediaResult,
    pub tags: TagTextResult,
    pub paragraphs: ParagraphResult,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
            && self.headlines.is_empty()
            && self.links.is_empty()
            && self.media.is_empty()
            && self.tags.values().all(Vec::is_empty)
            && self.paragraphs.is_empty()
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Tables => self.tables.len(),
            Category::Headlines => self.headlines.len(),
            Category::Links => self.links.len(),
            Category::Media => self.media.images.len() + self.media.videos.len() + self.media.audios.len(),
            Category::Tags => self.tags.values().map(Vec::len).sum(),
            Category::Paragraphs => self.paragraphs.len(),
        }
    }
}

/// Content categories, in extraction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Tables,
    Headlines,
    Links,
    Media,
    Tags,
    Paragraphs,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Tables,
        Category::Headlines,
        Category::Links,
        Category::Media,
        Category::Tags,
        Category::Paragraphs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Tables => "tables",
            Category::Headlines => "headlines",
            Category::Links => "links",
            Category::Media => "media",
            Category::Tags => "tags",
            Category::Paragraphs => "paragraphs",
        }
    }
}
