// src/gui/components/export_bar.rs

use eframe::egui;
use tracing::{debug, info};

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                info!(include_headers = export.include_headers, "UI: include headers");
            }
        });

        if export.format != prev_fmt {
            info!(format = ?export.format, "UI: export format");
        }
    }
    app.refresh_out_path_text();

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.state.gui.out_path_dirty = true;
            debug!(text = %app.state.gui.out_path_text, "UI: out_path_text changed (dirty=true)");
        }
    });

    // --- Actions (Copy / Export) + status ---
    ui.horizontal(|ui| {
        let has_data = app.export.is_some();

        if ui.add_enabled(has_data, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.add_enabled(has_data, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }

        if let Some(agg) = &app.export {
            ui.label(format!("{} rows × {} columns", agg.row_count(), agg.column_count()));
        }

        ui.separator();
        ui.label(format!("Status: {}", app.status_text()));
    });
}
