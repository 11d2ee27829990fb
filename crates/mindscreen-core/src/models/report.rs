use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::disease::Treatment;
use super::screening::DiseaseScore;

/// A screening record enriched with disease reference data for presentation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningReport {
    pub id: Uuid,
    pub session_id: Option<String>,
    pub screened_at: jiff::Timestamp,
    pub disease_code: String,
    pub disease_name: String,
    pub disease_description: Option<String>,
    /// Selected disease confidence, rounded to two decimals.
    pub confidence: f64,
    /// All scored diseases, highest first.
    pub ranked_scores: Vec<DiseaseScore>,
    pub treatments: Vec<Treatment>,
    pub answers: Vec<ReportedAnswer>,
}

/// An answer with the scale label the user picked, when it matches one.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportedAnswer {
    pub symptom_code: String,
    pub confidence: f64,
    pub symptom_name: Option<String>,
    pub scale_label: Option<String>,
}
