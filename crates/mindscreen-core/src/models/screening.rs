use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::confidence::round_confidence;

/// Combined confidence for one disease that received at least one
/// contributing rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiseaseScore {
    pub disease_code: String,
    pub confidence: f64,
}

/// Output of one inference run: the selected disease and every score it was
/// selected from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningResult {
    pub disease_code: String,
    /// Unrounded combined confidence of the selected disease.
    pub confidence: f64,
    /// All scored diseases, ascending by disease code.
    pub scores: Vec<DiseaseScore>,
}

impl ScreeningResult {
    /// Confidence rounded to two decimals for display.
    pub fn display_confidence(&self) -> f64 {
        round_confidence(self.confidence)
    }

    /// Score of a particular disease, if it received any contribution.
    pub fn score(&self, disease_code: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.disease_code == disease_code)
            .map(|s| s.confidence)
    }

    /// Scores by descending confidence; equal confidences keep ascending
    /// disease-code order, so the first entry is always the selected disease.
    pub fn ranked(&self) -> Vec<DiseaseScore> {
        let mut ranked = self.scores.clone();
        ranked.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.disease_code.cmp(&b.disease_code))
        });
        ranked
    }
}
