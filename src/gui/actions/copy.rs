// src/gui/actions/copy.rs
use eframe::egui;
use tracing::debug;

use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(agg) = &app.export else {
        app.status("Nothing to copy");
        debug!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let txt = agg.to_delimited(&app.state.options.export);
    debug!(rows = agg.row_count(), bytes = txt.len(), "Copy");

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
