// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// URL text box in the sidebar
    pub url: String,

    /// Output path text box; mapped into ExportOptions on Export
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub show_about: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            url: s!(),
            out_path_text: s!(),
            out_path_dirty: false,
            show_about: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let out_path_text = options.export.out_path().to_string_lossy().into_owned();
        Self {
            options,
            gui: GuiState { out_path_text, ..GuiState::default() },
        }
    }
}
