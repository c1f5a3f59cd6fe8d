// src/gui/components/results.rs
//
// Read-only view of the last scrape: error or notices, then one section per
// category. Purely a view; never mutates results.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    extract::{Extraction, TableResult},
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.state.gui.show_about {
        super::about::draw(ui);
        ui.separator();
    }

    if let Some(err) = &app.error {
        ui.colored_label(ui.visuals().error_fg_color, err);
        return;
    }

    let Some(report) = &app.report else {
        ui.label("Enter a URL, pick what to scrape, then press Start Scraping.");
        return;
    };

    ui.horizontal(|ui| {
        ui.label(RichText::new(&report.url).monospace());
        if let Some(title) = &report.title {
            ui.label(format!("- {title}"));
        }
    });
    for notice in &report.notices {
        ui.colored_label(ui.visuals().warn_fg_color, notice.message());
    }

    ui.separator();

    egui::ScrollArea::both()
        .id_salt("results_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            sections(ui, &report.results);
        });
}

fn sections(ui: &mut egui::Ui, ex: &Extraction) {
    for (i, table) in ex.tables.iter().enumerate() {
        ui.label(RichText::new(format!("Table {}:", i + 1)).strong());
        table_view(ui, i, table);
        ui.add_space(8.0);
    }

    list(ui, "Headlines Found:", &ex.headlines, false);
    list(ui, "Links Found:", &ex.links, true);
    list(ui, "Images Found:", &ex.media.images, false);
    list(ui, "Videos Found:", &ex.media.videos, false);
    list(ui, "Audios Found:", &ex.media.audios, false);

    if !ex.tags.is_empty() {
        ui.label(RichText::new("Tags Found:").strong());
        for (tag, texts) in &ex.tags {
            egui::CollapsingHeader::new(format!("{tag}: ({})", texts.len()))
                .id_salt(("tag_section", tag))
                .show(ui, |ui| {
                    for text in texts {
                        ui.label(format!("- {text}"));
                    }
                });
        }
    }

    list(ui, "P Tags Found:", &ex.paragraphs, false);
}

fn list(ui: &mut egui::Ui, title: &str, items: &[String], links: bool) {
    if items.is_empty() {
        return;
    }
    egui::CollapsingHeader::new(RichText::new(format!("{title} ({})", items.len())).strong())
        .id_salt(title)
        .default_open(true)
        .show(ui, |ui| {
            for item in items {
                if links {
                    ui.hyperlink(item);
                } else {
                    ui.label(format!("- {item}"));
                }
            }
        });
}

fn table_view(ui: &mut egui::Ui, index: usize, table: &TableResult) {
    let cols = table.width();
    if cols == 0 {
        ui.label("(empty table)");
        return;
    }

    ui.push_id(("table_view", index), |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(false)
            .columns(Column::initial(120.0).at_least(30.0).clip(true), cols)
            .header(22.0, |mut header| {
                for h in &table.headers {
                    header.col(|ui| {
                        ui.strong(h);
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, table.row_count(), |mut row| {
                    let Some(cells) = table.rows.get(row.index()) else { return };
                    for cell in cells {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            });
    });
}
