use eframe::egui;

use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SentiPandaApp {
    pub state: AppState,
}

impl SentiPandaApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Files dropped onto the window count as an upload.  Only the first
    /// file of a multi-file drop is used.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.first().cloned());
        let Some(file) = dropped else {
            return;
        };
        if let Some(path) = &file.path {
            self.state.open_path(path);
        } else if let Some(bytes) = &file.bytes {
            self.state.open_bytes(&file.name, bytes);
        }
    }
}

impl eframe::App for SentiPandaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // ---- Top panel: menu bar + status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: column choice + analyze ----
        egui::SidePanel::left("analysis_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: previews, filter, chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::central_panel(ui, &mut self.state);
        });
    }
}
