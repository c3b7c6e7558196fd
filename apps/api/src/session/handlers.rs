//! Axum route handlers for session navigation, screens and screen-local actions.

use anyhow::anyhow;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::catalog::models::Review;
use crate::catalog::Catalog;
use crate::dashboard::DashboardAction;
use crate::errors::AppError;
use crate::insights::{hub_review_summary, regional_top_hubs};
use crate::navigation::View;
use crate::render::screens::Screen;
use crate::render::{render_screen, render_tag};
use crate::session::{InsightJob, InsightRequest, Session};
use crate::state::AppState;
use crate::wizard::review::{ReviewAction, ReviewOutcome, ReviewSubmission};
use crate::wizard::signup::{HubApplication, SignupAction, SignupOutcome};
use crate::wizard::WizardError;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionScreenResponse {
    pub session_id: Uuid,
    pub view: View,
    pub fragment: String,
    pub selected_hub: Option<String>,
    pub screen: Screen,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub view: View,
    pub hub_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FragmentRequest {
    pub fragment: String,
}

#[derive(Debug, Serialize)]
pub struct FragmentResponse {
    /// False when the fragment was unknown or named the current view.
    pub changed: bool,
    #[serde(flatten)]
    pub state: SessionScreenResponse,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    #[default]
    Hubs,
    Candidates,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub scope: SearchScope,
}

#[derive(Debug, Deserialize)]
pub struct RegionRequest {
    pub region: String,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub submission: Option<ReviewSubmission>,
    #[serde(flatten)]
    pub state: SessionScreenResponse,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub application: Option<HubApplication>,
    #[serde(flatten)]
    pub state: SessionScreenResponse,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

fn snapshot(id: Uuid, session: &Session, catalog: &Catalog) -> SessionScreenResponse {
    SessionScreenResponse {
        session_id: id,
        view: session.navigator.current_view(),
        fragment: session.navigator.fragment().to_string(),
        selected_hub: session.navigator.selected_hub().map(str::to_string),
        screen: render_screen(session, catalog),
    }
}

/// Plans any insight fetch the current screen needs, renders it, and starts the fetch.
async fn current_screen(state: &AppState, id: Uuid) -> Result<SessionScreenResponse, AppError> {
    let (response, job) = state
        .sessions
        .with_session(id, |session| {
            let job = session.plan_insight(&state.catalog);
            (snapshot(id, session, &state.catalog), job)
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    if let Some(job) = job {
        spawn_insight(state.clone(), id, job);
    }
    Ok(response)
}

/// Runs the remote call off the session lock. The result is written back only
/// if the screen still wants it.
fn spawn_insight(state: AppState, session_id: Uuid, job: InsightJob) {
    tokio::spawn(async move {
        let text = match &job.request {
            InsightRequest::HubSummary { hub_name, reviews } => {
                let reviews: Vec<&Review> = reviews.iter().collect();
                hub_review_summary(state.insights.as_ref(), hub_name, &reviews).await
            }
            InsightRequest::Region(region) => {
                regional_top_hubs(state.insights.as_ref(), region).await
            }
        };

        let kept = state
            .sessions
            .with_session(session_id, |s| s.complete_insight(job.target, &job.ticket, text))
            .await;
        debug!(session_id = %session_id, key = job.ticket.key(), ?kept, "insight resolved");
    });
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionScreenResponse>), AppError> {
    let id = state.sessions.create().await;
    let response = match current_screen(&state, id).await {
        Err(AppError::NotFound(_)) => {
            return Err(anyhow!("session {id} disappeared right after creation").into())
        }
        other => other?,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}

/// GET /api/v1/sessions/:id/screen
pub async fn handle_get_screen(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionScreenResponse>, AppError> {
    Ok(Json(current_screen(&state, id).await?))
}

/// GET /api/v1/sessions/:id/screens/:tag
///
/// Renders the named view against the session without navigating to it.
pub async fn handle_preview_screen(
    State(state): State<AppState>,
    Path((id, tag)): Path<(Uuid, String)>,
) -> Result<Json<Screen>, AppError> {
    let screen = state
        .sessions
        .with_session(id, |session| render_tag(&tag, session, &state.catalog))
        .await
        .ok_or_else(|| session_not_found(id))?;
    debug!(session_id = %id, requested = %tag, rendered = ?screen.view(), "screen preview");
    Ok(Json(screen))
}

/// POST /api/v1/sessions/:id/navigate
pub async fn handle_navigate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<NavigateRequest>,
) -> Result<Json<SessionScreenResponse>, AppError> {
    if let Some(hub_id) = &request.hub_id {
        if state.catalog.hub(hub_id).is_none() {
            return Err(AppError::NotFound(format!("Hub {hub_id} not found")));
        }
    }

    state
        .sessions
        .with_session(id, |session| session.navigate(request.view, request.hub_id))
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(current_screen(&state, id).await?))
}

/// PUT /api/v1/sessions/:id/fragment
///
/// Reports a fragment change seen by the client. Unknown fragments are ignored.
pub async fn handle_fragment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FragmentRequest>,
) -> Result<Json<FragmentResponse>, AppError> {
    let changed = state
        .sessions
        .with_session(id, |session| session.on_fragment_change(&request.fragment))
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(FragmentResponse {
        changed,
        state: current_screen(&state, id).await?,
    }))
}

/// PUT /api/v1/sessions/:id/search
pub async fn handle_search(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SessionScreenResponse>, AppError> {
    state
        .sessions
        .with_session(id, |session| match request.scope {
            SearchScope::Hubs => session.search_query = request.query,
            SearchScope::Candidates => session.employer_search = request.query,
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(current_screen(&state, id).await?))
}

/// PUT /api/v1/sessions/:id/insights/region
pub async fn handle_select_region(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RegionRequest>,
) -> Result<Json<SessionScreenResponse>, AppError> {
    let accepted = state
        .sessions
        .with_session(id, |session| session.select_region(&request.region))
        .await
        .ok_or_else(|| session_not_found(id))?;

    if !accepted {
        return Err(AppError::Validation(format!(
            "Unknown region: {}",
            request.region
        )));
    }

    Ok(Json(current_screen(&state, id).await?))
}

/// POST /api/v1/sessions/:id/review
///
/// Applies one review wizard action. Submitting returns to the hub directory.
pub async fn handle_review_action(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(action): Json<ReviewAction>,
) -> Result<Json<ReviewResponse>, AppError> {
    let submission = state
        .sessions
        .with_session(
            id,
            |session| -> Result<Option<ReviewSubmission>, WizardError> {
                match session.review.apply(action, &state.catalog)? {
                    ReviewOutcome::Updated => Ok(None),
                    ReviewOutcome::Submitted(submission) => {
                        session.navigate(View::HubDirectory, None);
                        Ok(Some(submission))
                    }
                }
            },
        )
        .await
        .ok_or_else(|| session_not_found(id))??;

    Ok(Json(ReviewResponse {
        submission,
        state: current_screen(&state, id).await?,
    }))
}

/// POST /api/v1/sessions/:id/signup
///
/// Applies one signup wizard action. Completing opens the hub dashboard.
pub async fn handle_signup_action(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(action): Json<SignupAction>,
) -> Result<Json<SignupResponse>, AppError> {
    let application = state
        .sessions
        .with_session(
            id,
            |session| -> Result<Option<HubApplication>, WizardError> {
                match session.signup.apply(action)? {
                    SignupOutcome::Updated => Ok(None),
                    SignupOutcome::Completed(application) => {
                        session.navigate(View::HubDashboard, None);
                        Ok(Some(application))
                    }
                }
            },
        )
        .await
        .ok_or_else(|| session_not_found(id))??;

    Ok(Json(SignupResponse {
        application,
        state: current_screen(&state, id).await?,
    }))
}

/// POST /api/v1/sessions/:id/dashboard
pub async fn handle_dashboard_action(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(action): Json<DashboardAction>,
) -> Result<Json<SessionScreenResponse>, AppError> {
    state
        .sessions
        .with_session(id, |session| session.dashboard.apply(action))
        .await
        .ok_or_else(|| session_not_found(id))??;

    Ok(Json(current_screen(&state, id).await?))
}
