use thiserror::Error;

/// What a text-classification model returns for one input.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPrediction {
    /// Model-specific label, e.g. `POSITIVE` or `LABEL_1`.
    pub label: String,
    /// Confidence in `[0, 1]`.  Carried for display, not used for mapping.
    pub score: f32,
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("loading model failed: {0}")]
    Load(String),
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("model returned no prediction")]
    Empty,
}

/// A pretrained, locally executing text classifier.
///
/// Implementations are expensive to construct and cheap to call: build one
/// per process and share it behind an `Rc`.  Calls happen on the UI thread
/// only, so no `Send`/`Sync` bound is required.
pub trait SentimentModel {
    /// Short human-readable name, shown in the side panel.
    fn name(&self) -> &str;

    /// Classify a single text.
    fn infer(&self, text: &str) -> Result<RawPrediction, ModelError>;
}
