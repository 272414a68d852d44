use std::panic::{self, AssertUnwindSafe};

use rust_bert::pipelines::sentiment::{
    SentimentConfig, SentimentModel as BertSentimentModel, SentimentPolarity,
};

use super::model::{ModelError, RawPrediction, SentimentModel};

// ---------------------------------------------------------------------------
// rust-bert backed sentiment model
// ---------------------------------------------------------------------------

/// DistilBERT fine-tuned on SST-2, run locally through libtorch.
///
/// Weights are fetched into the rust-bert cache on first use and read from
/// disk afterwards; inference itself needs no network.
pub struct PretrainedModel {
    inner: BertSentimentModel,
}

impl PretrainedModel {
    /// Load the default English sentiment model.  Slow: call once.
    pub fn load() -> Result<Self, ModelError> {
        let inner = BertSentimentModel::new(SentimentConfig::default())
            .map_err(|e| ModelError::Load(e.to_string()))?;
        Ok(PretrainedModel { inner })
    }
}

impl SentimentModel for PretrainedModel {
    fn name(&self) -> &str {
        "distilbert-base-uncased-finetuned-sst-2-english"
    }

    fn infer(&self, text: &str) -> Result<RawPrediction, ModelError> {
        let input = [text];
        // libtorch failures surface as panics inside the pipeline.
        let output = panic::catch_unwind(AssertUnwindSafe(|| self.inner.predict(&input)))
            .map_err(|payload| ModelError::Inference(panic_message(payload.as_ref())))?;

        let sentiment = output.into_iter().next().ok_or(ModelError::Empty)?;
        Ok(RawPrediction {
            label: polarity_label(&sentiment.polarity).to_string(),
            score: sentiment.score as f32,
        })
    }
}

/// Label text in the style of the SST-2 model card.
fn polarity_label(polarity: &SentimentPolarity) -> &'static str {
    match polarity {
        SentimentPolarity::Positive => "POSITIVE",
        SentimentPolarity::Negative => "NEGATIVE",
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "model panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::Label;

    #[test]
    fn polarity_maps_onto_canonical_labels() {
        assert_eq!(
            Label::from_raw(polarity_label(&SentimentPolarity::Positive)),
            Label::Positive
        );
        assert_eq!(
            Label::from_raw(polarity_label(&SentimentPolarity::Negative)),
            Label::Negative
        );
    }

    #[test]
    fn panic_payloads_become_messages() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("tensor shape mismatch");
        assert_eq!(panic_message(payload.as_ref()), "tensor shape mismatch");
        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("oom"));
        assert_eq!(panic_message(payload.as_ref()), "oom");
        let payload: Box<dyn std::any::Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(payload.as_ref()), "model panicked");
    }

    // Downloads DistilBERT weights on first run: `cargo test -- --ignored`.
    #[test]
    #[ignore]
    fn pretrained_model_reads_clear_reviews() {
        let model = PretrainedModel::load().unwrap();
        let good = model.infer("great product, I love it").unwrap();
        let bad = model.infer("terrible, broke after a day").unwrap();
        assert_eq!(Label::from_raw(&good.label), Label::Positive);
        assert_eq!(Label::from_raw(&bad.label), Label::Negative);
        assert!((0.0..=1.0).contains(&good.score));
    }
}
