use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use mindscreen_core::confidence::parse_confidence;
use mindscreen_core::models::answer::AnswerSet;
use mindscreen_core::models::record::ScreeningRecord;
use mindscreen_core::models::report::ScreeningReport;
use mindscreen_engine::infer;
use mindscreen_engine::validation::{validate_answers, AnswerValidationError};

use crate::error::ApiError;
use crate::report::build_report;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubmitScreening {
    answers: BTreeMap<String, RawConfidence>,
    #[serde(default)]
    session_id: Option<String>,
}

/// Questionnaire clients post confidences either as numbers or as the
/// option value string (`"0.6"`).
#[derive(Deserialize)]
#[serde(untagged)]
enum RawConfidence {
    Number(f64),
    Text(String),
}

fn parse_answers(raw: BTreeMap<String, RawConfidence>) -> Result<AnswerSet, ApiError> {
    let mut answers = AnswerSet::new();
    let mut errors = Vec::new();

    for (code, value) in raw {
        match value {
            RawConfidence::Number(cf) => answers.insert(code, cf),
            RawConfidence::Text(text) => match parse_confidence(&code, &text) {
                Ok(cf) => answers.insert(code, cf),
                Err(e) => errors.push(AnswerValidationError {
                    symptom_code: code,
                    value: None,
                    message: e.to_string(),
                }),
            },
        }
    }

    errors.extend(validate_answers(&answers));
    if errors.is_empty() {
        Ok(answers)
    } else {
        Err(ApiError::InvalidAnswers(errors))
    }
}

pub async fn submit_screening(
    State(state): State<AppState>,
    Json(req): Json<SubmitScreening>,
) -> Result<Json<ScreeningReport>, ApiError> {
    if req.answers.is_empty() {
        return Err(ApiError::BadRequest(
            "screening answers are required".to_string(),
        ));
    }
    let answers = parse_answers(req.answers)?;

    let rules = state.rules.read().await.snapshot();
    let result = infer(&rules, &answers)?;

    let record = ScreeningRecord {
        id: Uuid::new_v4(),
        session_id: req.session_id,
        screened_at: jiff::Timestamp::now(),
        disease_code: result.disease_code,
        confidence: result.confidence,
        scores: result.scores,
        answers: answers.to_answers(),
    };
    let report = build_report(&*state.rules.read().await, &record);
    state.history.lock().await.record(record);

    Ok(Json(report))
}

pub async fn list_history(State(state): State<AppState>) -> Json<Vec<ScreeningRecord>> {
    Json(state.history.lock().await.list())
}

pub async fn get_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScreeningReport>, ApiError> {
    let record = state
        .history
        .lock()
        .await
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("screening result not found: {id}")))?;

    let report = build_report(&*state.rules.read().await, &record);
    Ok(Json(report))
}
