use std::collections::BTreeSet;
use std::fmt;

use crate::sentiment::Label;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the uploaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value, normalised once at ingestion.
/// Using `BTreeSet` downstream so `CellValue` must be `Ord`; equality
/// follows the same total order, so NaN equals itself and `-0.0 != 0.0`.
#[derive(Debug, Clone)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Missing,
}

// -- Manual Eq/Ord so we can put CellValue in BTreeSet --

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Missing => 0,
                Integer(_) => 1,
                Float(_) => 2,
                Text(_) => 3,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Missing => write!(f, "<NA>"),
        }
    }
}

impl CellValue {
    /// The text payload, if this cell holds a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// Column name under which classification results are shown.
pub const SENTIMENT_COLUMN: &str = "Sentiment";

/// An uploaded table. Every row has exactly `column_names.len()` cells.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Ordered column names, trimmed of surrounding whitespace.
    pub column_names: Vec<String>,
    /// Row-major cells.
    pub rows: Vec<Vec<CellValue>>,
    /// One label per row once analysis has run.
    pub sentiment: Option<Vec<Label>>,
}

impl Dataset {
    /// Build a dataset, trimming the header names.
    pub fn new(column_names: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Dataset {
            column_names: column_names
                .into_iter()
                .map(|c| c.trim().to_string())
                .collect(),
            rows,
            sentiment: None,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at `row` in column `col`; out-of-range reads as missing.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&CellValue::Missing)
    }

    /// Iterate over every cell of a named column, in row order.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &CellValue> + '_> {
        let idx = self.column_index(name)?;
        Some((0..self.rows.len()).map(move |r| self.cell(r, idx)))
    }

    /// Sorted set of distinct non-missing values in a column.
    pub fn unique_values(&self, name: &str) -> Option<BTreeSet<CellValue>> {
        Some(
            self.column(name)?
                .filter(|v| !v.is_missing())
                .cloned()
                .collect(),
        )
    }

    /// Store (or overwrite) the sentiment column.
    pub fn set_sentiment(&mut self, labels: Vec<Label>) {
        debug_assert_eq!(labels.len(), self.rows.len());
        self.sentiment = Some(labels);
    }

    pub fn has_sentiment(&self) -> bool {
        self.sentiment.is_some()
    }

    /// Label of a single row, if analysis has run.
    pub fn sentiment_at(&self, row: usize) -> Option<Label> {
        self.sentiment.as_ref()?.get(row).copied()
    }
}
