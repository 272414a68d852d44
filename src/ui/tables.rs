use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::label_color;
use crate::data::model::{Dataset, SENTIMENT_COLUMN};

// ---------------------------------------------------------------------------
// Dataset preview tables
// ---------------------------------------------------------------------------

/// Render the given rows of `dataset` as a scrollable table.
///
/// `id` must be unique per table on screen.  With `with_sentiment` the
/// label column is appended, coloured like the chart.
pub fn data_table(ui: &mut Ui, id: &str, dataset: &Dataset, rows: &[usize], with_sentiment: bool) {
    let n_data_cols = dataset.column_names.len();
    let n_cols = n_data_cols + usize::from(with_sentiment);
    if n_cols == 0 {
        ui.label("The file has no columns.");
        return;
    }

    egui::ScrollArea::horizontal()
        .id_salt(id)
        .show(ui, |ui: &mut Ui| {
            ui.push_id(id, |ui: &mut Ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .resizable(true)
                    .vscroll(true)
                    .max_scroll_height(280.0)
                    .columns(Column::auto().at_least(60.0).at_most(420.0).clip(true), n_cols)
                    .header(20.0, |mut header| {
                        for name in &dataset.column_names {
                            header.col(|ui: &mut Ui| {
                                ui.strong(name);
                            });
                        }
                        if with_sentiment {
                            header.col(|ui: &mut Ui| {
                                ui.strong(SENTIMENT_COLUMN);
                            });
                        }
                    })
                    .body(|body| {
                        body.rows(18.0, rows.len(), |mut row| {
                            let idx = rows[row.index()];
                            for col in 0..n_data_cols {
                                row.col(|ui: &mut Ui| {
                                    ui.label(dataset.cell(idx, col).to_string());
                                });
                            }
                            if with_sentiment {
                                row.col(|ui: &mut Ui| {
                                    if let Some(label) = dataset.sentiment_at(idx) {
                                        ui.label(
                                            RichText::new(label.as_str()).color(label_color(label)),
                                        );
                                    }
                                });
                            }
                        });
                    });
            });
        });
}
