use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use mindscreen_rules::store::{RuleListing, RuleSelector, RuleUpsert};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateRule {
    symptom_code: String,
    disease_code: String,
    cf_expert: f64,
}

/// Either `id`, or both `symptom_code` and `disease_code`, must be present.
#[derive(Deserialize)]
pub struct UpdateRule {
    id: Option<u64>,
    symptom_code: Option<String>,
    disease_code: Option<String>,
    cf_expert: f64,
}

#[derive(Serialize)]
pub struct RuleUpdated {
    id: u64,
}

pub async fn list_rules(State(state): State<AppState>) -> Json<Vec<RuleListing>> {
    Json(state.rules.read().await.active_rules())
}

pub async fn create_rule(
    State(state): State<AppState>,
    Json(req): Json<CreateRule>,
) -> Result<Json<RuleUpsert>, ApiError> {
    if req.symptom_code.is_empty() || req.disease_code.is_empty() {
        return Err(ApiError::BadRequest(
            "symptom_code and disease_code are required".to_string(),
        ));
    }
    let upsert = state
        .rules
        .write()
        .await
        .add_rule(&req.symptom_code, &req.disease_code, req.cf_expert)?;
    Ok(Json(upsert))
}

pub async fn update_rule(
    State(state): State<AppState>,
    Json(req): Json<UpdateRule>,
) -> Result<Json<RuleUpdated>, ApiError> {
    let selector = match (req.id, req.symptom_code, req.disease_code) {
        (Some(id), _, _) => RuleSelector::Id(id),
        (None, Some(symptom_code), Some(disease_code)) => RuleSelector::Pair {
            symptom_code,
            disease_code,
        },
        _ => {
            return Err(ApiError::BadRequest(
                "id or symptom_code and disease_code are required".to_string(),
            ));
        }
    };

    let id = state.rules.write().await.update_rule(&selector, req.cf_expert)?;
    Ok(Json(RuleUpdated { id }))
}

pub async fn delete_rule(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<()>, ApiError> {
    state.rules.write().await.deactivate_rule(id)?;
    Ok(Json(()))
}
