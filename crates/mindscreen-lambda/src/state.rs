use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use mindscreen_rules::RuleStore;

use crate::history::ScreeningHistory;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub rules: Arc<RwLock<RuleStore>>,
    pub history: Arc<Mutex<ScreeningHistory>>,
}

impl AppState {
    pub fn new(rules: RuleStore) -> Self {
        Self {
            rules: Arc::new(RwLock::new(rules)),
            history: Arc::new(Mutex::new(ScreeningHistory::default())),
        }
    }
}
