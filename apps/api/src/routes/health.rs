use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and live session count.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "hub-insights-api",
        "sessions": state.sessions.len().await,
        "insights": if state.config.gemini_api_key.is_some() { "live" } else { "fallback" },
    }))
}
