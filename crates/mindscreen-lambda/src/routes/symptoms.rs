use axum::extract::State;
use axum::Json;

use mindscreen_core::models::symptom::Symptom;
use mindscreen_engine::scale::{answer_scale, ScaleOption};

use crate::state::AppState;

pub async fn list_symptoms(State(state): State<AppState>) -> Json<Vec<Symptom>> {
    Json(state.rules.read().await.active_symptoms())
}

pub async fn list_scale() -> Json<Vec<ScaleOption>> {
    Json(answer_scale().to_vec())
}
