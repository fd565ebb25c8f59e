//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::planner::PlanError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes", post(plan_route))
        .route("/routes/:id", get(get_route))
        .route("/routes/:id/summary", get(get_summary))
        .route("/routes/:id/alternatives", post(get_alternative))
        .route("/routes/:id/constraints", post(update_constraints))
        .route("/trailheads/nearest", get(nearest_trailhead))
        .route("/trailheads/:id/routes", get(routes_for_trailhead))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan a new route.
async fn plan_route(
    State(state): State<AppState>,
    Json(req): Json<PlanRouteRequest>,
) -> Result<(StatusCode, Json<PlannedRouteIdResponse>), AppError> {
    let id = state.planner.plan_route(&req.into())?;
    Ok((
        StatusCode::CREATED,
        Json(PlannedRouteIdResponse {
            planned_route_id: Some(id),
        }),
    ))
}

async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RouteView>, AppError> {
    let route = state.planner.get_planned_route(&id)?;
    Ok(Json(RouteView::from_route(&route)))
}

async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.planner.get_planned_route_summary(&id)?))
}

/// Generate an alternative under a different criterion.
async fn get_alternative(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<AlternativeRequest>,
) -> Result<Json<PlannedRouteIdResponse>, AppError> {
    let planned_route_id = state.planner.get_alternative_routes(&id, &req.criterion)?;
    Ok(Json(PlannedRouteIdResponse { planned_route_id }))
}

/// Re-plan under new constraints.
async fn update_constraints(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateConstraintsRequest>,
) -> Result<Json<PlannedRouteIdResponse>, AppError> {
    let planned_route_id = state.planner.update_route_constraints(&id, &req.into())?;
    Ok(Json(PlannedRouteIdResponse { planned_route_id }))
}

async fn nearest_trailhead(
    State(state): State<AppState>,
    Query(query): Query<NearestQuery>,
) -> Result<Json<TrailheadView>, AppError> {
    let trailhead = state.planner.nearest_trailhead(query.lat, query.lon)?;
    Ok(Json(TrailheadView::from_trailhead(trailhead)))
}

/// List routes planned to a trailhead under a criterion.
async fn routes_for_trailhead(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<RoutesQuery>,
) -> Result<Json<RouteListResponse>, AppError> {
    let criterion = query.criterion.unwrap_or_else(|| "default".to_string());
    let planned_route_ids = state.planner.routes_for(&id, &criterion)?;
    Ok(Json(RouteListResponse {
        trailhead_id: id,
        criterion,
        planned_route_ids,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        let message = e.to_string();
        match e {
            PlanError::Validation(_) => AppError::BadRequest { message },
            PlanError::NotFound(_) => AppError::NotFound { message },
            PlanError::Conflict(_) => AppError::Conflict { message },
            PlanError::Integrity(_) => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
