use std::sync::Arc;

use crate::config::Config;
use crate::plan::engine::PlanEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Derivation engine. Stateless apart from its optimized-score source.
    pub engine: Arc<PlanEngine>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let engine = Arc::new(PlanEngine::from_config(&config));
        Self { config, engine }
    }
}
