//! HTTP routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use pokeroster_rust_core::{CatalogError, Creature, RosterService};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<RosterService>> {
    Router::new()
        .route("/health", get(health))
        .route("/api/pokemon", get(list_pokemon))
        .route("/api/teams/{user_id}", get(get_team).delete(clear_team))
        .route("/api/teams/{user_id}/toggle", post(toggle_team_member))
}

/// Routes bound to a service, with request tracing.
pub fn router(service: Arc<RosterService>) -> Router {
    routes()
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}

/// Body returned by the toggle endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleResponse {
    /// `false` when the team was full and the creature not on it
    pub success: bool,
    pub team: Vec<Creature>,
}

async fn health() -> &'static str {
    "OK"
}

async fn list_pokemon(
    State(service): State<Arc<RosterService>>,
) -> Result<Json<Vec<Creature>>, ApiError> {
    let creatures = service.list_catalog().await?;
    Ok(Json(creatures))
}

async fn get_team(
    State(service): State<Arc<RosterService>>,
    Path(user_id): Path<String>,
) -> Json<Vec<Creature>> {
    Json(service.get_roster(&user_id))
}

async fn clear_team(
    State(service): State<Arc<RosterService>>,
    Path(user_id): Path<String>,
) -> StatusCode {
    service.clear_roster(&user_id);
    StatusCode::NO_CONTENT
}

async fn toggle_team_member(
    State(service): State<Arc<RosterService>>,
    Path(user_id): Path<String>,
    Json(creature): Json<Creature>,
) -> Json<ToggleResponse> {
    let (success, team) = service.toggle_membership_with_roster(&user_id, creature);
    Json(ToggleResponse { success, team })
}

#[derive(Debug)]
pub enum ApiError {
    CatalogUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::CatalogUnavailable(msg) => (StatusCode::BAD_GATEWAY, msg).into_response(),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        warn!("Catalog request failed: {}", e);
        ApiError::CatalogUnavailable(e.to_string())
    }
}
