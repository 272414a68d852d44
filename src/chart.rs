//! Chart model: what the bar chart shows, independent of egui_plot.

use eframe::egui::Color32;

use crate::color::label_color;
use crate::data::aggregate::CountTable;
use crate::sentiment::Label;

pub const CHART_TITLE: &str = "Distribution of Sentiment Classifications";
pub const X_AXIS_TITLE: &str = "Sentiment Category";
pub const Y_AXIS_TITLE: &str = "Number of Reviews";

/// One bar of the sentiment chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: Label,
    /// Category position on the x-axis (0, 1, 2).
    pub x: f64,
    pub count: usize,
    pub color: Color32,
}

/// Bars in fixed display order, one per label, zero-height when absent.
pub fn bars(table: &CountTable) -> Vec<ChartBar> {
    table
        .entries()
        .iter()
        .map(|&(label, count)| ChartBar {
            label,
            x: label.display_index() as f64,
            count,
            color: label_color(label),
        })
        .collect()
}

/// Tick text for an x-axis position: the label name at integer positions.
pub fn x_tick_label(x: f64) -> String {
    if (x - x.round()).abs() > 1e-6 || x < 0.0 {
        return String::new();
    }
    Label::DISPLAY_ORDER
        .get(x.round() as usize)
        .map(|l| l.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_follow_display_order() {
        let table = CountTable::from_labels([Label::Positive, Label::Neutral, Label::Positive]);
        let b = bars(&table);
        assert_eq!(b.len(), 3);
        assert_eq!(b[0].label, Label::Negative);
        assert_eq!(b[0].count, 0);
        assert_eq!(b[2].count, 2);
        assert_eq!(b[1].color, label_color(Label::Neutral));
        assert_eq!(b.iter().map(|b| b.x).collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn tick_labels() {
        assert_eq!(x_tick_label(0.0), "Negative");
        assert_eq!(x_tick_label(2.0), "Positive");
        assert_eq!(x_tick_label(0.5), "");
        assert_eq!(x_tick_label(3.0), "");
        assert_eq!(x_tick_label(-1.0), "");
    }
}
