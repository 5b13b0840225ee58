//! Handlers for the `/routes` resource.
//!
//! The listing endpoint accepts optional `source` / `destination` query
//! parameters holding airport names. Filters compose conjunctively; absent
//! or empty values impose no constraint, and a name matching no airport
//! simply yields an empty list.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use skyport_core::error::CoreError;
use skyport_core::fleet::validate_route_distance;
use skyport_core::types::DbId;
use skyport_db::models::route::{CreateRoute, RouteRow};
use skyport_db::repositories::RouteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::{RequireAuth, RequireStaff};
use crate::state::AppState;

/// Query parameters for the route listing endpoint.
#[derive(Debug, Deserialize)]
pub struct RouteFilterParams {
    /// Source airport name (exact match).
    pub source: Option<String>,
    /// Destination airport name (exact match).
    pub destination: Option<String>,
}

/// Compact list representation: airport names flattened to strings.
#[derive(Debug, Serialize)]
pub struct RouteList {
    pub id: DbId,
    pub source: String,
    pub destination: String,
    pub distance: i64,
}

impl From<RouteRow> for RouteList {
    fn from(row: RouteRow) -> Self {
        Self {
            id: row.id,
            source: row.source_name,
            destination: row.destination_name,
            distance: row.distance,
        }
    }
}

/// Nested airport reference used by the detail representation.
#[derive(Debug, Serialize)]
pub struct AirportRef {
    pub id: DbId,
    pub name: String,
    pub closest_big_city: String,
}

/// Full detail representation with both airports expanded.
#[derive(Debug, Serialize)]
pub struct RouteDetail {
    pub id: DbId,
    pub source: AirportRef,
    pub destination: AirportRef,
    pub distance: i64,
}

impl From<RouteRow> for RouteDetail {
    fn from(row: RouteRow) -> Self {
        Self {
            id: row.id,
            source: AirportRef {
                id: row.source_id,
                name: row.source_name,
                closest_big_city: row.source_closest_big_city,
            },
            destination: AirportRef {
                id: row.destination_id,
                name: row.destination_name,
                closest_big_city: row.destination_closest_big_city,
            },
            distance: row.distance,
        }
    }
}

/// GET /api/v1/routes
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<RouteFilterParams>,
) -> AppResult<Json<Vec<RouteList>>> {
    let source = normalize_filter(params.source.as_deref());
    let destination = normalize_filter(params.destination.as_deref());

    let routes = RouteRepo::list(&state.pool, source, destination).await?;
    Ok(Json(routes.into_iter().map(RouteList::from).collect()))
}

/// POST /api/v1/routes
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Json(input): Json<CreateRoute>,
) -> AppResult<(StatusCode, Json<RouteDetail>)> {
    validate_route_distance(input.distance)?;

    let route = RouteRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(route.into())))
}

/// GET /api/v1/routes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<RouteDetail>> {
    let route = RouteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Route", id }))?;
    Ok(Json(route.into()))
}

/// Empty or whitespace-only filter values count as absent.
fn normalize_filter(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
