use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use super::label::Label;
use super::model::SentimentModel;
use crate::config::MAX_INPUT_CHARS;
use crate::data::model::{CellValue, Dataset};

/// Failure of a whole analysis run (as opposed to a single row).
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no dataset loaded")]
    NoDataset,
    #[error("no text column selected")]
    NoColumn,
    #[error("column '{0}' not found in dataset")]
    UnknownColumn(String),
}

// ---------------------------------------------------------------------------
// Classifier: model + memo cache + user-facing notices
// ---------------------------------------------------------------------------

/// Maps cell text to a [`Label`] through a shared model.
///
/// Never fails: empty or non-text cells are `Neutral` without touching the
/// model, and model errors downgrade to `Neutral` and are kept as notices.
/// Successful results are memoised by exact (truncated) input text.
pub struct Classifier {
    model: Rc<dyn SentimentModel>,
    cache: RefCell<HashMap<String, Label>>,
    notices: RefCell<Vec<String>>,
}

impl Classifier {
    pub fn new(model: Rc<dyn SentimentModel>) -> Self {
        Classifier {
            model,
            cache: RefCell::new(HashMap::new()),
            notices: RefCell::new(Vec::new()),
        }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Classify one cell.  Only `Text` cells reach the model.
    pub fn classify(&self, cell: &CellValue) -> Label {
        self.classify_text(cell.as_text())
    }

    /// Classify optional text.
    pub fn classify_text(&self, text: Option<&str>) -> Label {
        let text = match text {
            Some(t) if !t.is_empty() => truncate_chars(t, MAX_INPUT_CHARS),
            _ => return Label::Neutral,
        };

        if let Some(label) = self.cache.borrow().get(text) {
            return *label;
        }

        match self.model.infer(text) {
            Ok(prediction) => {
                let label = Label::from_raw(&prediction.label);
                self.cache.borrow_mut().insert(text.to_string(), label);
                label
            }
            Err(e) => {
                log::warn!("Model error on {:?}: {e}", preview(text));
                self.notices.borrow_mut().push(format!("Model error: {e}"));
                Label::Neutral
            }
        }
    }

    /// Classify every row of `column`.
    pub fn classify_column(
        &self,
        dataset: &Dataset,
        column: &str,
    ) -> Result<Vec<Label>, AnalysisError> {
        let cells = dataset
            .column(column)
            .ok_or_else(|| AnalysisError::UnknownColumn(column.to_string()))?;
        Ok(cells.map(|cell| self.classify(cell)).collect())
    }

    /// Drain the per-row error notices collected since the last call.
    pub fn take_notices(&self) -> Vec<String> {
        std::mem::take(&mut *self.notices.borrow_mut())
    }

    /// Number of distinct texts with a memoised label.
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

/// First `max` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

fn preview(text: &str) -> &str {
    truncate_chars(text, 40)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::testing::ScriptedModel;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn empty_and_non_text_skip_the_model() {
        let model = ScriptedModel::new(&[]);
        let clf = Classifier::new(model.clone());

        assert_eq!(clf.classify_text(None), Label::Neutral);
        assert_eq!(clf.classify(&text("")), Label::Neutral);
        assert_eq!(clf.classify(&CellValue::Missing), Label::Neutral);
        assert_eq!(clf.classify(&CellValue::Float(f64::NAN)), Label::Neutral);
        assert_eq!(clf.classify(&CellValue::Integer(5)), Label::Neutral);

        assert!(model.calls().is_empty());
        assert!(clf.take_notices().is_empty());
    }

    #[test]
    fn raw_labels_are_normalised() {
        let model = ScriptedModel::new(&[
            ("great product", "POSITIVE"),
            ("terrible", "negative"),
            ("meh", "LABEL_2"),
        ]);
        let clf = Classifier::new(model);

        assert_eq!(clf.classify(&text("great product")), Label::Positive);
        assert_eq!(clf.classify(&text("terrible")), Label::Negative);
        assert_eq!(clf.classify(&text("meh")), Label::Neutral);
    }

    #[test]
    fn repeated_text_hits_the_cache() {
        let model = ScriptedModel::new(&[("good", "POSITIVE")]);
        let clf = Classifier::new(model.clone());

        let first = clf.classify(&text("good"));
        let second = clf.classify(&text("good"));

        assert_eq!(first, second);
        assert_eq!(model.calls().len(), 1);
        assert_eq!(clf.cached_len(), 1);
    }

    #[test]
    fn model_errors_become_neutral_notices() {
        let model = ScriptedModel::new(&[]);
        let clf = Classifier::new(model.clone());

        assert_eq!(clf.classify(&text("boom")), Label::Neutral);
        assert_eq!(clf.classify(&text("boom")), Label::Neutral);

        // Failures are not memoised.
        assert_eq!(model.calls().len(), 2);
        let notices = clf.take_notices();
        assert_eq!(notices.len(), 2);
        assert!(notices[0].starts_with("Model error: inference failed"));
        assert!(clf.take_notices().is_empty());
    }

    #[test]
    fn long_text_is_truncated_by_chars() {
        let model = ScriptedModel::new(&[]);
        let clf = Classifier::new(model.clone());

        let long: String = "é".repeat(MAX_INPUT_CHARS + 100);
        clf.classify(&text(&long));

        let sent = &model.calls()[0];
        assert_eq!(sent.chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn truncate_chars_edges() {
        assert_eq!(truncate_chars("abc", 5), "abc");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abcdef", 2), "ab");
        assert_eq!(truncate_chars("日本語", 1), "日");
        assert_eq!(truncate_chars("", 0), "");
    }

    #[test]
    fn column_classification() {
        let model = ScriptedModel::new(&[("great product", "POSITIVE"), ("terrible", "NEGATIVE")]);
        let clf = Classifier::new(model);
        let ds = Dataset::new(
            vec!["review".into()],
            vec![vec![text("great product")], vec![text("terrible")], vec![CellValue::Missing]],
        );

        let labels = clf.classify_column(&ds, "review").unwrap();
        assert_eq!(labels, vec![Label::Positive, Label::Negative, Label::Neutral]);

        let err = clf.classify_column(&ds, "body").unwrap_err();
        assert!(matches!(err, AnalysisError::UnknownColumn(c) if c == "body"));
    }
}
