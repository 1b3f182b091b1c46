//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::QueryError;
use crate::fare::FareQuote;
use crate::planner::SearchResult;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations/transfers", get(transfer_stations))
        .route("/stations/nearby", get(nearby_stations))
        .route("/stations/nearby-km", get(nearby_stations_km))
        .route("/routes/shortest", get(shortest_route))
        .route("/routes/all", get(all_routes))
        .route("/routes/alternatives", get(alternative_routes))
        .route("/fares", get(fare))
        .route("/fares/day-pass", get(day_pass))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station served by two or more lines.
async fn transfer_stations(State(state): State<AppState>) -> Json<TransfersResponse> {
    let network = &state.network;
    let stations = network
        .transfer_stations()
        .iter()
        .map(|t| TransferStationResult::from_transfer(t, network))
        .collect();

    Json(TransfersResponse { stations })
}

/// Stations within a number of stops without changing line.
async fn nearby_stations(
    State(state): State<AppState>,
    Query(req): Query<NearbyRequest>,
) -> Result<Json<NearbyResponse>, AppError> {
    if req.hops > state.config.max_hops {
        return Err(AppError::BadRequest {
            message: format!(
                "hops must be at most {}, got {}",
                state.config.max_hops, req.hops
            ),
        });
    }

    let found = state.planner().within_hops(&req.station, req.hops)?;
    let stations = found
        .iter()
        .map(|r| ReachResult::from_reach(r, &state.network))
        .collect();

    Ok(Json(NearbyResponse {
        origin: req.station,
        max_hops: req.hops,
        stations,
    }))
}

/// Stations strictly closer than a distance, changing lines freely.
async fn nearby_stations_km(
    State(state): State<AppState>,
    Query(req): Query<NearbyKmRequest>,
) -> Result<Json<NearbyKmResponse>, AppError> {
    if !req.km.is_finite() || req.km < 0.0 || req.km > state.config.max_radius_km {
        return Err(AppError::BadRequest {
            message: format!(
                "km must be between 0 and {}, got {}",
                state.config.max_radius_km, req.km
            ),
        });
    }

    let found = state.planner().within_distance(&req.station, req.km)?;
    let stations = found
        .iter()
        .map(|r| DistanceReachResult::from_reach(r, &state.network))
        .collect();

    Ok(Json(NearbyKmResponse {
        origin: req.station,
        max_km: req.km,
        stations,
    }))
}

/// Shortest route by distance, served from the route cache when possible.
async fn shortest_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResult>, AppError> {
    let start = state.network.station_by_name(&req.from)?;
    let end = state.network.station_by_name(&req.to)?;

    let path = match state.routes.get(start, end).await {
        Some(path) => {
            debug!(from = %req.from, to = %req.to, "Route cache hit");
            path
        }
        None => {
            let path = Arc::new(state.planner().shortest_path_between(start, end)?);
            state.routes.insert(start, end, path.clone()).await;
            path
        }
    };

    Ok(Json(RouteResult::from_path(
        &path,
        &state.network,
        &state.fares,
    )))
}

/// Every simple route, in discovery order, up to the path limit.
async fn all_routes(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RoutesResponse>, AppError> {
    let limit = state.config.path_limit(req.limit);
    let result = state.planner().paths_up_to(&req.from, &req.to, limit)?;
    Ok(Json(routes_response(&state, result)))
}

/// Routes that trade distance against transfers, best first.
async fn alternative_routes(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RoutesResponse>, AppError> {
    let limit = state.config.path_limit(req.limit);
    let result = state.planner().alternatives(&req.from, &req.to, limit)?;
    Ok(Json(routes_response(&state, result)))
}

fn routes_response(state: &AppState, result: SearchResult) -> RoutesResponse {
    let routes = result
        .paths
        .iter()
        .map(|p| RouteResult::from_path(p, &state.network, &state.fares))
        .collect();

    RoutesResponse {
        routes,
        complete: result.complete,
    }
}

/// Regular and card fares for a distance.
async fn fare(
    State(state): State<AppState>,
    Query(req): Query<FareRequest>,
) -> Result<Json<FareQuote>, AppError> {
    if !req.distance_km.is_finite() || req.distance_km < 0.0 {
        return Err(AppError::BadRequest {
            message: format!(
                "distance_km must be a non-negative number, got {}",
                req.distance_km
            ),
        });
    }

    Ok(Json(FareQuote {
        distance_km: req.distance_km,
        regular: state.fares.regular_fare(req.distance_km),
        card: state.fares.card_fare(req.distance_km),
    }))
}

/// Price of a day-pass product.
async fn day_pass(
    State(state): State<AppState>,
    Query(req): Query<DayPassRequest>,
) -> Result<Json<DayPassResponse>, AppError> {
    let price = state.fares.day_pass_fare(&req.code)?;
    Ok(Json(DayPassResponse {
        code: req.code,
        price,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::StationNotFound(_)
            | QueryError::LineNotFound(_)
            | QueryError::PathNotFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            QueryError::InvalidTicketType(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
