//! Axum route handlers for the read-only catalog API and hub profile actions.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::models::{Candidate, Program, Review, TechHub};
use crate::catalog::search::{filter_candidates, filter_hubs};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ApplicationRequest {
    pub program_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApplicationAck {
    pub hub_id: String,
    pub program: Program,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CurriculumResponse {
    pub hub_id: String,
    pub programs: Vec<Program>,
    pub message: String,
}

fn find_hub<'a>(state: &'a AppState, id: &str) -> Result<&'a TechHub, AppError> {
    state
        .catalog
        .hub(id)
        .ok_or_else(|| AppError::NotFound(format!("Hub {id} not found")))
}

/// GET /api/v1/hubs?q=
pub async fn handle_list_hubs(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<TechHub>> {
    Json(
        filter_hubs(state.catalog.hubs(), &params.q)
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// GET /api/v1/hubs/:id
pub async fn handle_get_hub(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TechHub>, AppError> {
    Ok(Json(find_hub(&state, &id)?.clone()))
}

/// GET /api/v1/hubs/:id/reviews
pub async fn handle_hub_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Review>>, AppError> {
    let hub = find_hub(&state, &id)?;
    Ok(Json(
        state
            .catalog
            .reviews_for(&hub.id)
            .into_iter()
            .cloned()
            .collect(),
    ))
}

/// POST /api/v1/hubs/:id/applications
///
/// Applies to a program; without a program id the hub's first program is used.
pub async fn handle_apply(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ApplicationRequest>,
) -> Result<Json<ApplicationAck>, AppError> {
    let hub = find_hub(&state, &id)?;

    let program = match &request.program_id {
        Some(program_id) => hub.program(program_id).ok_or_else(|| {
            AppError::NotFound(format!("Program {program_id} not found at hub {id}"))
        })?,
        None => hub.programs.first().ok_or_else(|| {
            AppError::Validation(format!("{} has no open programs", hub.name))
        })?,
    };

    info!(hub_id = %hub.id, program_id = %program.id, "program application received");
    Ok(Json(ApplicationAck {
        hub_id: hub.id.clone(),
        program: program.clone(),
        message: format!("Application to {} at {} received.", program.name, hub.name),
    }))
}

/// GET /api/v1/hubs/:id/curriculum
pub async fn handle_curriculum(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CurriculumResponse>, AppError> {
    let hub = find_hub(&state, &id)?;
    Ok(Json(CurriculumResponse {
        hub_id: hub.id.clone(),
        programs: hub.programs.clone(),
        message: format!("{} curriculum downloaded successfully!", hub.name),
    }))
}

/// GET /api/v1/candidates?q=
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<Candidate>> {
    Json(
        filter_candidates(state.catalog.candidates(), &params.q)
            .into_iter()
            .cloned()
            .collect(),
    )
}
