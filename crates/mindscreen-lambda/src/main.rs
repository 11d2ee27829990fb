use std::env;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use mindscreen_lambda::app;
use mindscreen_lambda::state::AppState;
use mindscreen_rules::document::load_document;
use mindscreen_rules::RuleStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let rules = match env::var("MINDSCREEN_RULE_BASE") {
        Ok(path) => RuleStore::from_document(load_document(Path::new(&path))?)?,
        Err(_) => {
            tracing::info!("MINDSCREEN_RULE_BASE not set, using bundled sample rule base");
            RuleStore::builtin()?
        }
    };

    let router = app(AppState::new(rules));

    lambda_http::run(router).await.map_err(|e| eyre::eyre!(e))
}
