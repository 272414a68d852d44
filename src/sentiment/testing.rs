//! Test double for [`SentimentModel`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::model::{ModelError, RawPrediction, SentimentModel};

/// Fake model: fixed answers, records every input it is asked about.
/// Texts without an answer fail with an inference error.
pub struct ScriptedModel {
    answers: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(answers: &[(&str, &str)]) -> Rc<Self> {
        Rc::new(ScriptedModel {
            answers: answers
                .iter()
                .map(|(text, label)| (text.to_string(), label.to_string()))
                .collect(),
            calls: RefCell::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl SentimentModel for ScriptedModel {
    fn name(&self) -> &str {
        "scripted"
    }

    fn infer(&self, text: &str) -> Result<RawPrediction, ModelError> {
        self.calls.borrow_mut().push(text.to_string());
        match self.answers.get(text) {
            Some(label) => Ok(RawPrediction {
                label: label.clone(),
                score: 0.99,
            }),
            None => Err(ModelError::Inference(format!("unknown text {text:?}"))),
        }
    }
}
