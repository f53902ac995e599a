//! REST surface over the indexed event store.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::db;
use crate::errors::IndexerError;
use crate::events::EventRecord;

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

/// Build the router: health probe plus the two event queries, with
/// permissive CORS (the API is read-only) and request tracing.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/events", get(all_events))
        .route("/projects/:owner/events", get(project_events))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────
// Error mapping
// ─────────────────────────────────────────────────────────

/// Newtype so handlers can use `?` on database calls.
pub struct ApiError(IndexerError);

impl From<IndexerError> for ApiError {
    fn from(err: IndexerError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProjectEventsResponse {
    pub project: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct EventListResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /projects/:owner/events` — the project's full history, oldest
/// first: creation, every contribution, close, withdrawal.
async fn project_events(
    State(state): State<Arc<ApiState>>,
    Path(project): Path<String>,
) -> Result<Json<ProjectEventsResponse>, ApiError> {
    let events = db::events_for_project(&state.pool, &project).await?;
    Ok(Json(ProjectEventsResponse {
        count: events.len(),
        project,
        events,
    }))
}

/// `GET /events` — everything the indexer has seen, across all projects.
async fn all_events(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<EventListResponse>, ApiError> {
    let events = db::all_events(&state.pool).await?;
    Ok(Json(EventListResponse {
        count: events.len(),
        events,
    }))
}
