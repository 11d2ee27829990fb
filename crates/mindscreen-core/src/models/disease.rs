use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Reference data for a diagnosable condition (e.g. "P02" moderate depression).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Disease {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// A suggested treatment for a disease, listed by `priority_order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Treatment {
    pub disease_code: String,
    pub treatment_name: String,
    pub description: Option<String>,
    pub priority_order: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
