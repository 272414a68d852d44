//! Dashboard tunables.  There are no CLI flags; logging is controlled by
//! `RUST_LOG` through `env_logger`.

/// Rows shown in the raw-upload preview.
pub const PREVIEW_ROWS: usize = 50;

/// Rows shown in the analysed (filtered) preview.
pub const ANALYZED_PREVIEW_ROWS: usize = 100;

/// Texts are cut to this many characters before inference.
pub const MAX_INPUT_CHARS: usize = 512;

/// Optional categorical column offered as a filter after analysis.
pub const FILTER_COLUMN: &str = "PRODUCT";

/// Label of the "no filter" choice in the filter selector.
pub const ALL_FILTER_LABEL: &str = "All Products";

pub const WINDOW_TITLE: &str = "Senti Panda – Local Sentiment Analysis Dashboard";
pub const WINDOW_SIZE: [f32; 2] = [1200.0, 800.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [600.0, 400.0];
