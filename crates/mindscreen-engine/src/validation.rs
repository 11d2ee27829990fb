use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use mindscreen_core::confidence::is_valid_confidence;
use mindscreen_core::models::answer::AnswerSet;
use mindscreen_core::models::rule::CfRule;

use crate::error::{InferenceError, RuleBaseViolation};

/// One rejected answer, reported back to the user.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct AnswerValidationError {
    pub symptom_code: String,
    /// The rejected confidence, or `None` when the answer was not a number.
    pub value: Option<f64>,
    pub message: String,
}

/// Check every answer's confidence against `[0, 1]`.
///
/// Returns all failures rather than the first, so a client can flag every
/// bad field at once. An empty vector means the set is valid.
pub fn validate_answers(answers: &AnswerSet) -> Vec<AnswerValidationError> {
    answers
        .iter()
        .filter(|(_, value)| !is_valid_confidence(*value))
        .map(|(code, value)| AnswerValidationError {
            symptom_code: code.to_string(),
            value: Some(value),
            message: format!("{code}: confidence {value} is outside range [0, 1]"),
        })
        .collect()
}

/// Reject a rule snapshot with an out-of-range expert confidence or more
/// than one rule for the same (symptom, disease) pair.
///
/// Rules are checked in (symptom, disease) order so the reported violation
/// does not depend on snapshot order.
pub fn validate_rules(rules: &[CfRule]) -> Result<(), InferenceError> {
    let mut ordered: Vec<&CfRule> = rules.iter().collect();
    ordered.sort_by(|a, b| {
        (&a.symptom_code, &a.disease_code).cmp(&(&b.symptom_code, &b.disease_code))
    });

    let mut seen = BTreeSet::new();
    for rule in ordered {
        if !is_valid_confidence(rule.cf_expert) {
            return Err(RuleBaseViolation::ConfidenceOutOfRange {
                symptom_code: rule.symptom_code.clone(),
                disease_code: rule.disease_code.clone(),
                value: rule.cf_expert,
            }
            .into());
        }
        if !seen.insert((rule.symptom_code.as_str(), rule.disease_code.as_str())) {
            return Err(RuleBaseViolation::DuplicateRule {
                symptom_code: rule.symptom_code.clone(),
                disease_code: rule.disease_code.clone(),
            }
            .into());
        }
    }
    Ok(())
}
