use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::Answer;
use super::screening::DiseaseScore;

/// A completed screening as kept in history: the outcome plus the answers
/// that contributed to it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningRecord {
    pub id: Uuid,
    pub session_id: Option<String>,
    pub screened_at: jiff::Timestamp,
    pub disease_code: String,
    pub confidence: f64,
    pub scores: Vec<DiseaseScore>,
    pub answers: Vec<Answer>,
}
