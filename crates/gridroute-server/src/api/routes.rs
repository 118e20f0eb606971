//! REST API routes.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;
use gridroute_core::{find_path, Cell, Grid, GridError, Mode, Scenario, ENTRY, EXIT, GRID_SIZE};

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/grid", get(get_grid))
        .route("/v1/grid/toggle", post(toggle_obstacle))
        .route("/v1/grid/scenario", post(apply_scenario))
        .route("/v1/route", post(plan_route))
}

// === Request/Response types ===

#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Traversal mode; defaults to "shortest".
    pub mode: Option<String>,
    /// Start cell for mid-route replanning; defaults to the entry corner.
    #[serde(default, alias = "currentPosition")]
    pub current: Option<Position>,
}

/// Raw wire coordinates, validated before they become a [`Cell`].
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    Success,
    Failed,
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub status: RouteStatus,
    pub grid: Grid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Vec<Cell>>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Deserialize)]
pub struct ScenarioRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct GridResponse {
    pub grid: Grid,
}

type ApiError = (StatusCode, Json<serde_json::Value>);

fn bad_request(message: &str, field: Option<&str>) -> ApiError {
    let mut payload = serde_json::json!({ "error": message });
    if let Some(field) = field {
        payload["field"] = serde_json::Value::String(field.to_string());
    }
    (StatusCode::BAD_REQUEST, Json(payload))
}

fn in_bounds_cell(position: Position) -> Option<Cell> {
    let x = usize::try_from(position.x).ok()?;
    let y = usize::try_from(position.y).ok()?;
    (x < GRID_SIZE && y < GRID_SIZE).then_some(Cell::new(x, y))
}

// === Handlers ===

async fn plan_route(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let mode = match req.mode.as_deref() {
        None => Mode::default(),
        Some(raw) => raw
            .parse::<Mode>()
            .map_err(|err: GridError| bad_request(&err.to_string(), Some("mode")))?,
    };

    let start = match req.current {
        None => ENTRY,
        Some(position) => in_bounds_cell(position)
            .ok_or_else(|| bad_request("Start position is out of bounds", Some("current")))?,
    };

    let grid = state.snapshot();
    match find_path(&grid, start, EXIT, mode) {
        Ok(Some(route)) => {
            tracing::debug!("Planned {} route of {} cells from {:?}", mode, route.len(), start);
            Ok(Json(RouteResponse {
                status: RouteStatus::Success,
                grid,
                route: Some(route),
            }))
        }
        Ok(None) => {
            tracing::debug!("No {} route from {:?}", mode, start);
            Ok(Json(RouteResponse {
                status: RouteStatus::Failed,
                grid,
                route: None,
            }))
        }
        Err(err) => Err(bad_request(&err.to_string(), Some("current"))),
    }
}

async fn toggle_obstacle(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<GridResponse>, ApiError> {
    let (Ok(x), Ok(y)) = (usize::try_from(req.x), usize::try_from(req.y)) else {
        return Err(bad_request("Coordinates are out of bounds", None));
    };

    let grid = state
        .toggle(x, y)
        .map_err(|err| bad_request(&err.to_string(), None))?;
    tracing::debug!("Toggled cell ({}, {})", x, y);
    Ok(Json(GridResponse { grid }))
}

async fn apply_scenario(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScenarioRequest>,
) -> Result<Json<GridResponse>, ApiError> {
    let scenario = req
        .name
        .parse::<Scenario>()
        .map_err(|err: GridError| bad_request(&err.to_string(), Some("name")))?;

    let grid = state.apply_scenario(scenario);
    tracing::info!("Applied scenario '{}'", scenario);
    Ok(Json(GridResponse { grid }))
}

async fn get_grid(State(state): State<Arc<AppState>>) -> Json<GridResponse> {
    Json(GridResponse {
        grid: state.snapshot(),
    })
}
