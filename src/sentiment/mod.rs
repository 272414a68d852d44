/// Sentiment layer: model seam, pretrained model, and the label classifier.
///
/// ```text
///   cell text ──► Classifier ──► SentimentModel::infer ──► raw label
///                    │                                        │
///                    └──── memo cache ◄──── Label ◄───────────┘
/// ```

pub mod classifier;
pub mod label;
pub mod model;
pub mod pretrained;
#[cfg(test)]
pub mod testing;

pub use classifier::{AnalysisError, Classifier};
pub use label::Label;
pub use model::SentimentModel;
pub use pretrained::PretrainedModel;
