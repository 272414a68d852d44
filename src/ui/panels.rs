use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::{ANALYZED_PREVIEW_ROWS, FILTER_COLUMN, PREVIEW_ROWS};
use crate::state::{AppState, Phase, StatusKind};
use crate::ui::{plot, tables};

// ---------------------------------------------------------------------------
// Left side panel – text column and analysis trigger
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Analysis");
    ui.separator();

    let columns = match &state.dataset {
        Some(ds) => ds.column_names.clone(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ui.strong("Text column to analyze");
    let current = state.text_column.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("text_column")
        .selected_text(&current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for col in &columns {
                if ui.selectable_label(current == *col, col).clicked() {
                    state.choose_column(col);
                }
            }
        });
    ui.add_space(8.0);

    let can_analyze = state.phase() != Phase::FileLoaded;
    if ui
        .add_enabled(can_analyze, egui::Button::new("Analyze Sentiment"))
        .clicked()
    {
        match state.analyze() {
            Ok(()) => ui.ctx().request_repaint(),
            // The status bar already carries the message.
            Err(e) => log::debug!("Analyze clicked without a result: {e}"),
        }
    }

    ui.add_space(4.0);
    ui.label(
        RichText::new(format!("Model: {}", state.classifier.model_name()))
            .small()
            .weak(),
    );

    if !state.notices.is_empty() {
        ui.separator();
        egui::CollapsingHeader::new(
            RichText::new(format!("{} model errors", state.notices.len())).color(Color32::YELLOW),
        )
        .id_salt("model_notices")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ScrollArea::vertical()
                .max_height(200.0)
                .show(ui, |ui: &mut Ui| {
                    for notice in &state.notices {
                        ui.label(notice);
                    }
                });
        });
    }
}

// ---------------------------------------------------------------------------
// Central panel – previews, filter and chart
// ---------------------------------------------------------------------------

/// Render the main content for the current phase.
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Local Sentiment Analysis Dashboard");
    ui.label("Upload a dataset and analyze sentiments locally (no API quota needed).");
    ui.separator();

    if state.phase() == Phase::NoFile {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Upload a CSV to begin.  (File → Open… or drop a file here)");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            if let Some(ds) = &state.dataset {
                ui.strong("Preview:");
                if ds.is_empty() {
                    ui.label("The file has a header but no data rows.");
                }
                let head: Vec<usize> = (0..ds.len().min(PREVIEW_ROWS)).collect();
                tables::data_table(ui, "preview", ds, &head, false);
            }

            if state.phase() == Phase::Analyzed {
                ui.separator();
                breakdown(ui, state);
            }
        });
}

fn breakdown(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Sentiment Breakdown");

    if let Some(options) = state.filter_options() {
        let current = state.filter.clone();
        ui.horizontal(|ui: &mut Ui| {
            ui.label(format!("Filter by {FILTER_COLUMN} (optional)"));
            egui::ComboBox::from_id_salt("product_filter")
                .selected_text(current.to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    for opt in &options {
                        if ui.selectable_label(current == *opt, opt.to_string()).clicked() {
                            state.set_filter(opt.clone());
                        }
                    }
                });
        });
    }

    if let Some(ds) = &state.dataset {
        let head: Vec<usize> = state
            .visible_indices
            .iter()
            .copied()
            .take(ANALYZED_PREVIEW_ROWS)
            .collect();
        tables::data_table(ui, "analyzed", ds, &head, true);
    }

    ui.add_space(8.0);
    if let Some(table) = state.count_table() {
        plot::sentiment_chart(ui, &table);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(name)) = (&state.dataset, &state.source_name) {
            ui.label(format!(
                "{name}: {} rows loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
            ui.separator();
        }

        if let Some(status) = &state.status {
            let color = match status.kind {
                StatusKind::Success => Color32::from_rgb(0, 160, 0),
                StatusKind::Error => Color32::RED,
            };
            ui.label(RichText::new(&status.text).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Upload a dataset")
        .add_filter("CSV", &["csv"])
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}
