use std::fmt;

use super::model::{CellValue, Dataset};
use crate::config::ALL_FILTER_LABEL;

// ---------------------------------------------------------------------------
// Filter choice on the categorical column
// ---------------------------------------------------------------------------

/// One entry of the filter selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterChoice {
    /// Sentinel: no filtering, use every row.
    #[default]
    All,
    /// Keep rows whose cell equals this value.
    Value(CellValue),
}

impl fmt::Display for FilterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterChoice::All => f.write_str(ALL_FILTER_LABEL),
            FilterChoice::Value(v) => write!(f, "{v}"),
        }
    }
}

/// Selector entries for `column`: `All` followed by the sorted distinct
/// non-missing values.  `None` when the column does not exist.
pub fn filter_options(dataset: &Dataset, column: &str) -> Option<Vec<FilterChoice>> {
    let values = dataset.unique_values(column)?;
    let mut options = Vec::with_capacity(values.len() + 1);
    options.push(FilterChoice::All);
    options.extend(values.into_iter().map(FilterChoice::Value));
    Some(options)
}

/// Return indices of rows that pass the filter.
///
/// * `All` → every row
/// * `Value(v)` → rows whose `column` cell equals `v`; if the column is
///   absent nothing matches
pub fn filtered_indices(dataset: &Dataset, column: &str, choice: &FilterChoice) -> Vec<usize> {
    match choice {
        FilterChoice::All => (0..dataset.len()).collect(),
        FilterChoice::Value(wanted) => match dataset.column_index(column) {
            Some(col) => (0..dataset.len())
                .filter(|&row| dataset.cell(row, col) == wanted)
                .collect(),
            None => Vec::new(),
        },
    }
}
