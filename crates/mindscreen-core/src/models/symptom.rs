use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A catalog symptom the user is asked to self-rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    /// Stable code, e.g. "G01".
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}
