//! mindscreen-lambda
//!
//! HTTP surface for depression screening: questionnaire reference data,
//! CF rule maintenance, and screening submission with in-memory history.

pub mod error;
pub mod history;
pub mod middleware;
pub mod report;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Questionnaire reference data
        .route("/symptoms", get(routes::symptoms::list_symptoms))
        .route("/scale", get(routes::symptoms::list_scale))
        // Rule base maintenance
        .route(
            "/cf-rules",
            get(routes::cf_rules::list_rules)
                .post(routes::cf_rules::create_rule)
                .put(routes::cf_rules::update_rule),
        )
        .route("/cf-rules/{id}", delete(routes::cf_rules::delete_rule))
        // Screening
        .route(
            "/screening/submit",
            post(routes::screening::submit_screening),
        )
        .route(
            "/screening/history",
            get(routes::screening::list_history),
        )
        .route(
            "/screening/result/{id}",
            get(routes::screening::get_result),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
