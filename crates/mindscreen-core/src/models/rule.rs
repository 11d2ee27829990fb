use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One expert rule: how strongly a symptom supports a disease.
///
/// A symptom may carry one rule per disease and a disease may collect rules
/// from many symptoms. At most one active rule exists per
/// (symptom, disease) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CfRule {
    pub symptom_code: String,
    pub disease_code: String,
    /// Expert certainty factor in `[0, 1]`.
    pub cf_expert: f64,
}

impl CfRule {
    pub fn new(symptom_code: impl Into<String>, disease_code: impl Into<String>, cf_expert: f64) -> Self {
        Self {
            symptom_code: symptom_code.into(),
            disease_code: disease_code.into(),
            cf_expert,
        }
    }
}
