//! Handlers for the `/airports` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skyport_core::error::CoreError;
use skyport_core::fleet::validate_name;
use skyport_core::types::DbId;
use skyport_db::models::airport::{Airport, CreateAirport};
use skyport_db::repositories::AirportRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::{RequireAuth, RequireStaff};
use crate::state::AppState;

/// GET /api/v1/airports
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<Airport>>> {
    let airports = AirportRepo::list(&state.pool).await?;
    Ok(Json(airports))
}

/// POST /api/v1/airports
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Json(input): Json<CreateAirport>,
) -> AppResult<(StatusCode, Json<Airport>)> {
    validate_name(&input.name, "name")?;
    validate_name(&input.closest_big_city, "closest_big_city")?;

    let airport = AirportRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(airport)))
}

/// GET /api/v1/airports/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Airport>> {
    let airport = AirportRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Airport",
            id,
        }))?;
    Ok(Json(airport))
}
