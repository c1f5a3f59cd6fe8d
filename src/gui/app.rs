// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;
use tracing::info;

use crate::{
    aggregate::AggregatedExport,
    config::{options::AppOptions, state::AppState},
    runner::ScrapeReport,
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Web Scraper - Tools",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::new(AppOptions::default()))))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last successful request; replaced wholesale by the next one
    pub report: Option<ScrapeReport>,
    pub export: Option<AggregatedExport>,

    // last failed request, shown instead of results
    pub error: Option<String>,

    // status/progress (progress sink writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        info!(backend = ?state.options.fetch.backend, "GUI start");
        Self {
            state,
            report: None,
            export: None,
            error: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Apply the output text box to ExportOptions if the user edited it.
    pub fn sync_out_path(&mut self) {
        let gui = &mut self.state.gui;
        if gui.out_path_dirty {
            self.state.options.export.set_path(&gui.out_path_text);
            gui.out_path_text = self.state.options.export.out_path().to_string_lossy().into_owned();
            gui.out_path_dirty = false;
        }
    }

    /// Re-render the output text box from ExportOptions unless the user is editing it.
    pub fn refresh_out_path_text(&mut self) {
        if !self.state.gui.out_path_dirty {
            self.state.gui.out_path_text =
                self.state.options.export.out_path().to_string_lossy().into_owned();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                components::sidebar::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Web Scraper - Tools");
            ui.label("Table, Headline, Link, Media, and Tag Scraper");

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::results::draw(ui, self);
        });
    }
}
