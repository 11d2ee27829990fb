use thiserror::Error;

use mindscreen_core::error::CoreError;

#[derive(Debug, Error)]
pub enum RuleStoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("symptom not found or inactive: {0}")]
    SymptomNotFound(String),

    #[error("symptom code already exists: {0}")]
    DuplicateSymptom(String),

    #[error("cf rule not found: {0}")]
    RuleNotFound(String),

    #[error("duplicate active rule for symptom {symptom_code} and disease {disease_code}")]
    DuplicateRule {
        symptom_code: String,
        disease_code: String,
    },

    #[error("rule base document_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("failed to read rule base at {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
