use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    /// The rule snapshot breaks a rule-base invariant. Configuration error;
    /// retrying the same submission cannot succeed.
    #[error("invalid rule base: {0}")]
    InvalidRuleBase(#[from] RuleBaseViolation),

    /// Nothing to infer from: every answer was zero or matched no rule.
    #[error("no symptoms detected, select at least one symptom")]
    NoSymptomsDetected,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleBaseViolation {
    #[error("duplicate active rule for symptom {symptom_code} and disease {disease_code}")]
    DuplicateRule {
        symptom_code: String,
        disease_code: String,
    },

    #[error(
        "expert confidence {value} for symptom {symptom_code} and disease {disease_code} is outside [0, 1]"
    )]
    ConfidenceOutOfRange {
        symptom_code: String,
        disease_code: String,
        value: f64,
    },
}
