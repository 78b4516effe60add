//! HTTP surface: routes, handlers and error mapping.
//!
//! Every endpoint is a GET returning JSON. Handlers stay thin: parse and
//! validate path parameters, call one query function, serialize the rows.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::ClimateError;
use crate::models::{DailyPrecipitation, DailyTemperatureStats, Station, TemperatureObservation};
use crate::queries;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// JSON body for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handler-level error mapped onto an HTTP status and JSON body.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(ClimateError),
}

impl From<ClimateError> for ApiError {
    fn from(err: ClimateError) -> Self {
        match err {
            ClimateError::Validation { message } => ApiError::BadRequest(message),
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.user_message())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Service descriptor returned by the index route.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub routes: &'static [&'static str],
}

/// Advertised routes, in the order they appear on the index page.
pub const ROUTES: &[&str] = &[
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/min_max_avg/{start}",
    "/api/v1.0/min_max_avg/{start}/{end}",
];

/// Routes mounted under `/api/v1.0`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/precipitation", get(precipitation))
        .route("/stations", get(stations))
        .route("/tobs", get(tobs))
        .route("/min_max_avg/{start}", get(temperature_stats_from))
        .route("/min_max_avg/{start}/{end}", get(temperature_stats_range))
}

/// Index route listing the available endpoints.
pub async fn home() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "Hawaii Climate",
        version: crate::VERSION,
        routes: ROUTES,
    })
}

async fn precipitation(
    State(state): State<AppState>,
) -> Result<Json<Vec<DailyPrecipitation>>, ApiError> {
    let readings = queries::all_precipitation(&state.pool).await?;
    Ok(Json(readings))
}

async fn stations(State(state): State<AppState>) -> Result<Json<Vec<Station>>, ApiError> {
    let stations = queries::all_stations(&state.pool).await?;
    Ok(Json(stations))
}

/// Temperature observations of the most active station over the final year
/// of its record.
async fn tobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<TemperatureObservation>>, ApiError> {
    match queries::most_active_station_last_year(&state.pool).await? {
        Some((_, observations)) => Ok(Json(observations)),
        None => Err(ApiError::NotFound(
            "No temperature observations recorded".to_string(),
        )),
    }
}

async fn temperature_stats_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<Vec<DailyTemperatureStats>>, ApiError> {
    let start = parse_route_date(&start)?;
    let stats = queries::temperature_stats(&state.pool, start, None).await?;
    Ok(Json(stats))
}

async fn temperature_stats_range(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<DailyTemperatureStats>>, ApiError> {
    let start = parse_route_date(&start)?;
    let end = parse_route_date(&end)?;
    if start > end {
        return Err(ApiError::BadRequest(format!(
            "Start date {start} is after end date {end}"
        )));
    }

    let stats = queries::temperature_stats(&state.pool, start, Some(end)).await?;
    Ok(Json(stats))
}

fn parse_route_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest(format!("Invalid date '{raw}', expected YYYY-MM-DD")))
}
