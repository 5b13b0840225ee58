//! Handlers for the `/airplane-types` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skyport_core::error::CoreError;
use skyport_core::fleet::validate_name;
use skyport_core::types::DbId;
use skyport_db::models::airplane_type::{AirplaneType, CreateAirplaneType};
use skyport_db::repositories::AirplaneTypeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::{RequireAuth, RequireStaff};
use crate::state::AppState;

/// GET /api/v1/airplane-types
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<AirplaneType>>> {
    let types = AirplaneTypeRepo::list(&state.pool).await?;
    Ok(Json(types))
}

/// POST /api/v1/airplane-types
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Json(input): Json<CreateAirplaneType>,
) -> AppResult<(StatusCode, Json<AirplaneType>)> {
    validate_name(&input.name, "name")?;

    let airplane_type = AirplaneTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(airplane_type)))
}

/// GET /api/v1/airplane-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<AirplaneType>> {
    let airplane_type = AirplaneTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AirplaneType",
            id,
        }))?;
    Ok(Json(airplane_type))
}
