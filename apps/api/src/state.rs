use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::insights::InsightFetcher;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Validated at startup, read-only afterwards.
    pub catalog: Arc<Catalog>,
    pub sessions: SessionStore,
    /// Pluggable insight transport. Default: GeminiClient.
    pub insights: Arc<dyn InsightFetcher>,
    pub config: Config,
}
