// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{eyre, Result};
use tracing::info;

use crate::{
    aggregate,
    config::{
        consts::{DEFAULT_TABLE_CLASS, HEADLINE_TAGS},
        options::{AppOptions, ExportFormat, ExportOptions, FetchBackend},
    },
    core::sanitize::normalize_ws,
    extract::Extraction,
    fetch,
    file::{self, ExportError},
    log,
    progress::Progress,
    runner::{self, ScrapeReport},
};

/// Scrape tables, headlines, links, media, tags and paragraphs from one page.
#[derive(Debug, Parser)]
#[command(name = "web_scrape", version, about)]
pub struct Args {
    /// Page to scrape
    pub url: String,

    /// Collect headline texts
    #[arg(long)]
    pub headlines: bool,

    /// Headline levels, in output order (implies --headlines)
    #[arg(long, value_delimiter = ',', value_parser = HEADLINE_TAGS)]
    pub headline_tags: Vec<String>,

    /// Collect absolute http(s) links
    #[arg(long)]
    pub links: bool,

    /// Collect image/video/audio sources
    #[arg(long)]
    pub media: bool,

    /// Collect the text of these tags, e.g. `p,div,li`
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Collect paragraph texts
    #[arg(long)]
    pub paragraphs: bool,

    /// Everything above, all headline levels
    #[arg(short, long)]
    pub all: bool,

    /// Marker class of tables to extract
    #[arg(long, default_value = DEFAULT_TABLE_CLASS)]
    pub table_class: String,

    #[arg(long, value_enum)]
    pub backend: Option<Backend>,

    /// Fetch timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Output file; extension follows --format
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Leave out the column header line
    #[arg(long)]
    pub no_headers: bool,

    /// Print the results to stdout as well
    #[arg(long)]
    pub print: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Backend { Http, Browser }

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format { Csv, Tsv }

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();

        let ex = &mut opts.extract;
        if self.all {
            *ex = crate::config::options::ExtractionConfig::everything();
        }
        for tag in &self.headline_tags {
            ex.select_headline_tag(tag, true);
        }
        ex.scrape_headlines |= self.headlines || !self.headline_tags.is_empty();
        if ex.scrape_headlines && ex.headline_tags.is_empty() {
            // --headlines alone: every level
            for tag in HEADLINE_TAGS {
                ex.select_headline_tag(tag, true);
            }
        }
        ex.scrape_links |= self.links;
        ex.scrape_media |= self.media;
        ex.scrape_paragraphs |= self.paragraphs;
        for tag in &self.tags {
            ex.select_tag(tag, true);
        }
        ex.table_class = self.table_class.clone();

        if let Some(b) = self.backend {
            opts.fetch.backend = match b {
                Backend::Http => FetchBackend::Http,
                Backend::Browser => FetchBackend::Browser,
            };
        }
        if let Some(t) = self.timeout {
            opts.fetch.timeout_secs = t;
        }

        opts.export.format = match self.format {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        };
        opts.export.include_headers = !self.no_headers;
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts
    }
}

/// Stage lines on stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn fetched(&mut self, url: &str) { eprintln!("Fetched {url}"); }
    fn category_done(&mut self, category: crate::extract::Category, count: usize) {
        tracing::debug!(category = category.label(), count, "category done");
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    log::init_cli(args.verbose);

    let options = args.to_options();
    let mut fetcher = fetch::open_fetcher(&options.fetch)
        .map_err(|e| eyre!(runner::failure_message(&e)))?;

    let report = runner::scrape(&args.url, &options, fetcher.as_mut(), Some(&mut CliProgress))
        .map_err(|e| eyre!(runner::failure_message(&e)))?;
    // Release the browser before writing files.
    drop(fetcher);

    eprintln!("Data scraped successfully!");

    if args.print {
        let stdout = io::stdout();
        print_report(&mut stdout.lock(), &report)?;
    }
    for notice in &report.notices {
        eprintln!("Note: {}", notice.message());
    }

    match export(&options.export, &report.results)? {
        Some(path) => println!("Wrote {} ({})", path.display(), options.export.format.content_type()),
        None => eprintln!("Note: nothing to export"),
    }
    Ok(())
}

/// Aggregate and write the export file. Having nothing to write is not a
/// failure: it gives `Ok(None)`.
pub fn export(export: &ExportOptions, results: &Extraction) -> Result<Option<PathBuf>, ExportError> {
    let agg = aggregate::aggregate(results);
    match file::write_export(export, &agg) {
        Ok(path) => Ok(Some(path)),
        Err(ExportError::Empty) => {
            info!("export skipped: nothing to write");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Human-readable listing, section by section.
pub fn print_report<W: Write>(w: &mut W, report: &ScrapeReport) -> io::Result<()> {
    if let Some(title) = &report.title {
        writeln!(w, "# {title}")?;
    }
    let ex: &Extraction = &report.results;

    for (i, table) in ex.tables.iter().enumerate() {
        writeln!(w, "Table {}:", i + 1)?;
        writeln!(w, "{}", table.to_cell_text())?;
    }

    let list = |w: &mut W, title: &str, items: &[String]| -> io::Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        writeln!(w, "{title}")?;
        for item in items {
            writeln!(w, "- {}", normalize_ws(item))?;
        }
        Ok(())
    };

    list(w, "Headlines Found:", &ex.headlines)?;
    list(w, "Links Found:", &ex.links)?;
    list(w, "Images Found:", &ex.media.images)?;
    list(w, "Videos Found:", &ex.media.videos)?;
    list(w, "Audios Found:", &ex.media.audios)?;

    if !ex.tags.is_empty() {
        writeln!(w, "Tags Found:")?;
        for (tag, texts) in &ex.tags {
            writeln!(w, "{tag}:")?;
            for text in texts {
                writeln!(w, "- {}", normalize_ws(text))?;
            }
        }
    }

    list(w, "P Tags Found:", &ex.paragraphs)?;
    Ok(())
}
