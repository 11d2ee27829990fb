//! On-disk rule base format.
//!
//! A rule base is a single JSON document holding the symptom catalog,
//! disease and treatment reference data, and the expert rules. Documents
//! carry a `document_version`; a missing version is read as the current one.

use std::path::Path;

use serde::{Deserialize, Serialize};

use mindscreen_core::models::disease::{Disease, Treatment};
use mindscreen_core::models::symptom::Symptom;

use crate::error::RuleStoreError;

/// Current document version. Bump when the shape changes.
pub const CURRENT_VERSION: u32 = 1;

const BUILTIN: &str = include_str!("../data/rule_base.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleBaseDocument {
    #[serde(default = "current_version")]
    pub document_version: u32,
    pub symptoms: Vec<SymptomEntry>,
    pub diseases: Vec<Disease>,
    #[serde(default)]
    pub treatments: Vec<Treatment>,
    pub rules: Vec<RuleEntry>,
}

/// A catalog symptom with its activation flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomEntry {
    #[serde(flatten)]
    pub symptom: Symptom,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleEntry {
    pub symptom_code: String,
    pub disease_code: String,
    pub cf_expert: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

fn default_active() -> bool {
    true
}

/// Parse a rule base document from JSON text.
pub fn parse_document(contents: &str) -> Result<RuleBaseDocument, RuleStoreError> {
    let document: RuleBaseDocument = serde_json::from_str(contents)?;
    if document.document_version > CURRENT_VERSION {
        return Err(RuleStoreError::UnsupportedVersion {
            found: document.document_version,
            supported: CURRENT_VERSION,
        });
    }
    Ok(document)
}

/// Read and parse a rule base document from disk.
pub fn load_document(path: &Path) -> Result<RuleBaseDocument, RuleStoreError> {
    let contents = std::fs::read_to_string(path).map_err(|source| RuleStoreError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let document = parse_document(&contents)?;
    tracing::info!(
        path = %path.display(),
        rules = document.rules.len(),
        symptoms = document.symptoms.len(),
        "loaded rule base document"
    );
    Ok(document)
}

/// The sample rule base bundled with the crate.
pub fn builtin_document() -> Result<RuleBaseDocument, RuleStoreError> {
    parse_document(BUILTIN)
}
