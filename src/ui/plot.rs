use eframe::egui::{self, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::chart::{self, CHART_TITLE, X_AXIS_TITLE, Y_AXIS_TITLE};
use crate::color::label_color;
use crate::data::aggregate::CountTable;

// ---------------------------------------------------------------------------
// Sentiment bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render the count table as a small grid followed by the bar chart.
pub fn sentiment_chart(ui: &mut Ui, table: &CountTable) {
    egui::Grid::new("sentiment_counts")
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            ui.strong("Sentiment");
            ui.strong("Count");
            ui.end_row();
            for (label, count) in table.entries() {
                ui.colored_label(label_color(label), label.as_str());
                ui.label(count.to_string());
                ui.end_row();
            }
            ui.strong("Total");
            ui.strong(table.total().to_string());
            ui.end_row();
        });
    ui.add_space(8.0);

    ui.strong(CHART_TITLE);

    let bars: Vec<Bar> = chart::bars(table)
        .into_iter()
        .map(|b| {
            Bar::new(b.x, b.count as f64)
                .name(b.label.as_str())
                .fill(b.color)
                .width(0.6)
        })
        .collect();

    // No legend: colours are already explained by the x-axis ticks.
    Plot::new("sentiment_chart")
        .height(360.0)
        .x_axis_label(X_AXIS_TITLE)
        .y_axis_label(Y_AXIS_TITLE)
        .x_axis_formatter(|mark, _range| chart::x_tick_label(mark.value))
        .include_x(-0.5)
        .include_x(2.5)
        .include_y(0.0)
        .include_y(table.max() as f64 * 1.1 + 1.0)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
