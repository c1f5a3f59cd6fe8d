// src/gui/actions/export.rs
use tracing::{debug, error, info};

use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.sync_out_path();

    let status_msg = match &app.export {
        None => {
            debug!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Some(agg) => {
            let export = &app.state.options.export;
            info!(
                path = %export.out_path().display(),
                rows = agg.row_count(),
                format = ?export.format,
                "Export: Begin"
            );
            match file::write_export(export, agg) {
                Ok(path) => {
                    info!(path = %path.display(), "Export: OK");
                    format!("Exported to {}", path.display())
                }
                Err(e) => {
                    error!("Export: Error: {e}");
                    format!("Export error: {e}")
                }
            }
        }
    };

    // mutate app only after the export borrow is gone
    app.status(status_msg);
}
