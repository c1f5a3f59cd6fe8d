// src/gui/components/about.rs
use eframe::egui;

pub fn draw(ui: &mut egui::Ui) {
    ui.label(egui::RichText::new("About").strong());
    ui.label(
        "This tool scrapes tables, headlines, links, media, tags and paragraphs \
         from a web page. Enter the URL, pick what to collect, then press Start Scraping.",
    );
    ui.label(
        "Export writes every category side by side into one CSV or TSV file; \
         shorter columns are left blank.",
    );
    ui.small(format!("v{}", env!("CARGO_PKG_VERSION")));
}
