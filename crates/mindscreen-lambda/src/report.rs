use mindscreen_core::confidence::round_confidence;
use mindscreen_core::models::record::ScreeningRecord;
use mindscreen_core::models::report::{ReportedAnswer, ScreeningReport};
use mindscreen_core::models::screening::ScreeningResult;
use mindscreen_engine::scale::label_for;
use mindscreen_rules::RuleStore;

/// Enrich a stored screening with disease, treatment, and symptom reference
/// data from the rule store.
pub fn build_report(store: &RuleStore, record: &ScreeningRecord) -> ScreeningReport {
    let disease = store.disease(&record.disease_code);
    let ranked_scores = ScreeningResult {
        disease_code: record.disease_code.clone(),
        confidence: record.confidence,
        scores: record.scores.clone(),
    }
    .ranked();

    let answers = record
        .answers
        .iter()
        .map(|answer| ReportedAnswer {
            symptom_code: answer.symptom_code.clone(),
            confidence: answer.confidence,
            symptom_name: store.symptom(&answer.symptom_code).map(|s| s.name.clone()),
            scale_label: label_for(answer.confidence).map(str::to_string),
        })
        .collect();

    ScreeningReport {
        id: record.id,
        session_id: record.session_id.clone(),
        screened_at: record.screened_at,
        disease_code: record.disease_code.clone(),
        disease_name: store.disease_name(&record.disease_code),
        disease_description: disease.and_then(|d| d.description.clone()),
        confidence: round_confidence(record.confidence),
        ranked_scores,
        treatments: store.treatments_for(&record.disease_code),
        answers,
    }
}
