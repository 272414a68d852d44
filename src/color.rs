use eframe::egui::Color32;
use palette::Srgb;
use palette::named;

use crate::sentiment::Label;

// ---------------------------------------------------------------------------
// Fixed colour mapping: label → Color32
// ---------------------------------------------------------------------------

fn to_color32(c: Srgb<u8>) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

/// Bar colour for a label: CSS red / lightgray / green.
pub fn label_color(label: Label) -> Color32 {
    match label {
        Label::Negative => to_color32(named::RED),
        Label::Neutral => to_color32(named::LIGHTGRAY),
        Label::Positive => to_color32(named::GREEN),
    }
}
