// src/gui/components/sidebar.rs
//
// URL, extraction toggles and the Start button. Edits go straight into
// `app.state.options`; the scrape reads them once when started.

use eframe::egui;
use tracing::debug;

use crate::{
    config::{
        consts::{HEADLINE_TAGS, TAG_CHOICES},
        options::FetchBackend,
    },
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Web Scraper - Tools");
    ui.separator();

    ui.label("Enter the URL:");
    let url_resp = ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.url)
            .hint_text("https://en.wikipedia.org/wiki/…")
            .desired_width(f32::INFINITY),
    );
    let enter_pressed = url_resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(6.0);

    egui::ScrollArea::vertical()
        .id_salt("sidebar_scroll")
        .max_height(ui.available_height() - 80.0)
        .show(ui, |ui| {
            extraction_toggles(ui, app);
            ui.separator();
            fetch_settings(ui, app);
        });

    ui.separator();

    let can_start = !app.state.gui.url.trim().is_empty();
    let start = ui
        .add_enabled(
            can_start,
            egui::Button::new(egui::RichText::new("Start Scraping").strong()),
        )
        .clicked();
    if start || (enter_pressed && can_start) {
        actions::scrape(app);
    }

    ui.checkbox(&mut app.state.gui.show_about, "About");
}

fn extraction_toggles(ui: &mut egui::Ui, app: &mut App) {
    let ex = &mut app.state.options.extract;

    ui.checkbox(&mut ex.scrape_headlines, "Scrape Headlines");
    ui.add_enabled_ui(ex.scrape_headlines, |ui| {
        ui.label("Select headlines to scrape:");
        ui.horizontal_wrapped(|ui| {
            for tag in HEADLINE_TAGS {
                let mut on = ex.headline_tags.iter().any(|t| t == tag);
                if ui.checkbox(&mut on, tag).changed() {
                    ex.select_headline_tag(tag, on);
                    debug!(tags = ?ex.headline_tags, "UI: headline tags");
                }
            }
        });
        if ex.headline_tags.len() > 1 {
            ui.small(format!("Order: {}", ex.headline_tags.join(", ")));
        }
    });

    ui.checkbox(&mut ex.scrape_links, "Scrape Links");
    ui.checkbox(&mut ex.scrape_media, "Scrape Media (Images, Videos, Audios)");

    ui.label("Select tags to scrape:");
    ui.horizontal_wrapped(|ui| {
        for tag in TAG_CHOICES {
            let mut on = ex.tag_selectors.iter().any(|t| t == tag);
            if ui.checkbox(&mut on, tag).changed() {
                ex.select_tag(tag, on);
                debug!(tags = ?ex.tag_selectors, "UI: tag selectors");
            }
        }
    });

    ui.checkbox(&mut ex.scrape_paragraphs, "Scrape paragraph");

    ui.horizontal(|ui| {
        ui.label("Table class:");
        ui.add(egui::TextEdit::singleline(&mut ex.table_class).desired_width(100.0));
    });
}

fn fetch_settings(ui: &mut egui::Ui, app: &mut App) {
    let fetch = &mut app.state.options.fetch;

    ui.label("Fetch with:");
    ui.horizontal(|ui| {
        for backend in [FetchBackend::Browser, FetchBackend::Http] {
            ui.selectable_value(&mut fetch.backend, backend, backend.label());
        }
    });
    if !cfg!(feature = "browser") && fetch.backend == FetchBackend::Browser {
        ui.colored_label(ui.visuals().warn_fg_color, "Built without browser support");
    }

    ui.horizontal(|ui| {
        ui.label("Timeout (s):");
        ui.add(egui::DragValue::new(&mut fetch.timeout_secs).range(1..=300));
    });
}
