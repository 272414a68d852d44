use std::path::Path;

use anyhow::Result;

use crate::config::FILTER_COLUMN;
use crate::data::aggregate::{CountTable, count_labels};
use crate::data::filter::{FilterChoice, filter_options, filtered_indices};
use crate::data::loader;
use crate::data::model::Dataset;
use crate::sentiment::{AnalysisError, Classifier};

// ---------------------------------------------------------------------------
// Dashboard phase
// ---------------------------------------------------------------------------

/// Where the user is in the upload → analyse flow.  Derived from the state,
/// never stored, so it cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoFile,
    FileLoaded,
    ColumnChosen,
    Analyzed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Message shown in the top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    fn success(text: impl Into<String>) -> Self {
        Status { kind: StatusKind::Success, text: text.into() }
    }

    fn error(text: impl Into<String>) -> Self {
        Status { kind: StatusKind::Error, text: text.into() }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Shared classifier; built once in `main`.
    pub classifier: Classifier,

    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<Dataset>,

    /// File name of the current dataset, for display.
    pub source_name: Option<String>,

    /// Column holding the free text to classify.
    pub text_column: Option<String>,

    /// Current selection of the PRODUCT filter.
    pub filter: FilterChoice,

    /// Indices of rows passing the current filter (cached).
    pub visible_indices: Vec<usize>,

    /// Status / error message shown in the UI.
    pub status: Option<Status>,

    /// Per-row model errors from the last analysis.
    pub notices: Vec<String>,
}

impl AppState {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            dataset: None,
            source_name: None,
            text_column: None,
            filter: FilterChoice::All,
            visible_indices: Vec::new(),
            status: None,
            notices: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        match &self.dataset {
            None => Phase::NoFile,
            Some(ds) if ds.has_sentiment() => Phase::Analyzed,
            Some(_) if self.text_column.is_some() => Phase::ColumnChosen,
            Some(_) => Phase::FileLoaded,
        }
    }

    /// Ingest a newly loaded dataset, discarding any previous analysis.
    ///
    /// The text column defaults to the first column, like a select box.
    pub fn set_dataset(&mut self, dataset: Dataset, source_name: impl Into<String>) {
        self.text_column = dataset.column_names.first().cloned();
        self.filter = FilterChoice::All;
        self.visible_indices = (0..dataset.len()).collect();
        self.notices.clear();
        self.source_name = Some(source_name.into());
        self.dataset = Some(dataset);
        self.status = Some(Status::success("Dataset uploaded."));
    }

    /// Load a file from disk.  On failure the current dataset is kept.
    pub fn open_path(&mut self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let result = loader::load_file(path);
        self.finish_load(result, name);
    }

    /// Load in-memory file contents (e.g. a dropped file without a path).
    pub fn open_bytes(&mut self, name: &str, bytes: &[u8]) {
        let result = loader::load_bytes(name, bytes);
        self.finish_load(result, name.to_string());
    }

    fn finish_load(&mut self, result: Result<Dataset>, name: String) {
        match result {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows from {name} with columns {:?}",
                    dataset.len(),
                    dataset.column_names
                );
                self.set_dataset(dataset, name);
            }
            Err(e) => {
                log::error!("Failed to load {name}: {e:#}");
                self.status = Some(Status::error(format!("Error: {e:#}")));
            }
        }
    }

    /// Pick the column to analyse.  Unknown names are ignored.
    pub fn choose_column(&mut self, column: &str) {
        if let Some(ds) = &self.dataset {
            if ds.has_column(column) {
                self.text_column = Some(column.to_string());
            }
        }
    }

    /// Classify every row of the chosen column and store the labels.
    ///
    /// On error nothing changes except the status message.
    pub fn analyze(&mut self) -> Result<(), AnalysisError> {
        let result = self.run_analysis();
        match &result {
            Ok(()) => {
                self.status = Some(Status::success("Sentiment analysis completed!"));
            }
            Err(e) => {
                log::error!("Analysis failed: {e}");
                self.status = Some(Status::error(format!("Something went wrong: {e}")));
            }
        }
        result
    }

    fn run_analysis(&mut self) -> Result<(), AnalysisError> {
        let dataset = self.dataset.as_mut().ok_or(AnalysisError::NoDataset)?;
        let column = self.text_column.as_deref().ok_or(AnalysisError::NoColumn)?;

        let labels = self.classifier.classify_column(dataset, column)?;
        log::info!(
            "Classified {} rows of '{column}' with the {} model ({} distinct texts cached)",
            labels.len(),
            self.classifier.model_name(),
            self.classifier.cached_len()
        );
        dataset.set_sentiment(labels);

        self.notices = self.classifier.take_notices();
        if !self.notices.is_empty() {
            log::warn!("{} rows fell back to Neutral after model errors", self.notices.len());
        }
        self.refilter();
        Ok(())
    }

    /// Selector entries for the PRODUCT filter, once analysed.
    pub fn filter_options(&self) -> Option<Vec<FilterChoice>> {
        let ds = self.dataset.as_ref().filter(|ds| ds.has_sentiment())?;
        filter_options(ds, FILTER_COLUMN)
    }

    pub fn set_filter(&mut self, choice: FilterChoice) {
        self.filter = choice;
        self.refilter();
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, FILTER_COLUMN, &self.filter);
        }
    }

    /// Label counts over the visible rows, once analysed.
    pub fn count_table(&self) -> Option<CountTable> {
        let labels = self.dataset.as_ref()?.sentiment.as_ref()?;
        Some(count_labels(labels, &self.visible_indices))
    }
}
