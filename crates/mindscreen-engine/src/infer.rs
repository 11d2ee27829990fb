use std::collections::BTreeMap;

use mindscreen_core::models::answer::AnswerSet;
use mindscreen_core::models::rule::CfRule;
use mindscreen_core::models::screening::{DiseaseScore, ScreeningResult};

use crate::cf::combine_all;
use crate::error::InferenceError;
use crate::validation::{validate_answers, validate_rules};

/// A single rule firing: `cf_user * cf_expert` for one (symptom, disease).
#[derive(Debug, Clone, Copy)]
struct Contribution<'a> {
    disease_code: &'a str,
    symptom_code: &'a str,
    cf: f64,
}

/// Rank candidate diagnoses for one submission.
///
/// Answers at zero are dropped before anything else, so a disease whose only
/// evidence is a zero answer gets no score at all. Each remaining answer
/// fires every rule on its symptom; contributions are combined per disease
/// with [`crate::cf::combine`] in (disease code, symptom code) order, which
/// makes the scores independent of rule snapshot order. The highest score
/// wins; on an exact tie the smallest disease code wins.
///
/// Answer confidences are expected to be validated by the caller with
/// [`validate_answers`].
pub fn infer(rules: &[CfRule], answers: &AnswerSet) -> Result<ScreeningResult, InferenceError> {
    validate_rules(rules)?;
    debug_assert!(
        validate_answers(answers).is_empty(),
        "answers must be validated before inference"
    );

    let present: BTreeMap<&str, f64> = answers.contributing().collect();
    if present.is_empty() {
        return Err(InferenceError::NoSymptomsDetected);
    }

    let mut contributions: Vec<Contribution<'_>> = rules
        .iter()
        .filter_map(|rule| {
            let cf_user = *present.get(rule.symptom_code.as_str())?;
            Some(Contribution {
                disease_code: &rule.disease_code,
                symptom_code: &rule.symptom_code,
                cf: cf_user * rule.cf_expert,
            })
        })
        .collect();
    contributions.sort_by(|a, b| {
        (a.disease_code, a.symptom_code).cmp(&(b.disease_code, b.symptom_code))
    });

    let scores: Vec<DiseaseScore> = contributions
        .chunk_by(|a, b| a.disease_code == b.disease_code)
        .filter_map(|group| {
            for c in group {
                tracing::debug!(
                    disease = c.disease_code,
                    symptom = c.symptom_code,
                    cf = c.cf,
                    "rule contribution"
                );
            }
            let confidence = combine_all(group.iter().map(|c| c.cf))?;
            Some(DiseaseScore {
                disease_code: group[0].disease_code.to_string(),
                confidence,
            })
        })
        .collect();

    let best = select(&scores).ok_or(InferenceError::NoSymptomsDetected)?;
    let (disease_code, confidence) = (best.disease_code.clone(), best.confidence);

    tracing::info!(
        disease = %disease_code,
        confidence,
        scored_diseases = scores.len(),
        "screening inferred"
    );

    Ok(ScreeningResult {
        disease_code,
        confidence,
        scores,
    })
}

/// Argmax over scores already in ascending disease-code order. Only a
/// strictly higher score displaces the current best.
fn select(scores: &[DiseaseScore]) -> Option<&DiseaseScore> {
    scores.iter().fold(None, |best, score| match best {
        Some(current) if current.confidence >= score.confidence => Some(current),
        _ => Some(score),
    })
}
