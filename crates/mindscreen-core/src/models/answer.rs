use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single self-rating: how confident the user is that a symptom applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub symptom_code: String,
    /// User certainty factor in `[0, 1]`. Zero means "not present".
    pub confidence: f64,
}

/// The answers of one screening submission, keyed by symptom code.
///
/// Symptoms absent from the set are equivalent to a confidence of zero.
/// Serializes as a plain JSON object (`{"G01": 0.6}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, f64>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confidence for a symptom, replacing any earlier answer.
    pub fn insert(&mut self, symptom_code: impl Into<String>, confidence: f64) {
        self.0.insert(symptom_code.into(), confidence);
    }

    /// The recorded confidence, or zero if the symptom was not answered.
    pub fn confidence(&self, symptom_code: &str) -> f64 {
        self.0.get(symptom_code).copied().unwrap_or(0.0)
    }

    /// Every answer as submitted, zeros included, by symptom code.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(code, cf)| (code.as_str(), *cf))
    }

    /// Answers that can contribute to inference: confidence strictly above
    /// zero, ascending by symptom code.
    pub fn contributing(&self) -> impl Iterator<Item = (&str, f64)> {
        self.iter().filter(|(_, cf)| *cf > 0.0)
    }

    /// The contributing answers as owned values, for audit and history.
    pub fn to_answers(&self) -> Vec<Answer> {
        self.contributing()
            .map(|(code, cf)| Answer {
                symptom_code: code.to_string(),
                confidence: cf,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<Vec<Answer>> for AnswerSet {
    fn from(answers: Vec<Answer>) -> Self {
        answers
            .into_iter()
            .map(|a| (a.symptom_code, a.confidence))
            .collect()
    }
}
